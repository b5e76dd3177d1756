// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{GerrisError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::GerrisError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.docker, raw.solver))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_docker_section(cfg)?;
    validate_solver_section(cfg)?;
    Ok(())
}

fn validate_docker_section(cfg: &RawConfigFile) -> Result<()> {
    ensure_non_empty("docker.binary", &cfg.docker.binary)?;
    ensure_non_empty("docker.image", &cfg.docker.image)?;
    ensure_non_empty("docker.container_root", &cfg.docker.container_root)?;

    if !cfg.docker.container_root.starts_with('/') {
        return Err(GerrisError::Config(format!(
            "[docker].container_root must be an absolute container path (got '{}')",
            cfg.docker.container_root
        )));
    }

    Ok(())
}

fn validate_solver_section(cfg: &RawConfigFile) -> Result<()> {
    ensure_non_empty("solver.program", &cfg.solver.program)?;
    ensure_non_empty("solver.mpirun", &cfg.solver.mpirun)?;
    ensure_non_empty("solver.topo_converter", &cfg.solver.topo_converter)?;
    Ok(())
}

fn ensure_non_empty(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GerrisError::Config(format!("{key} must not be empty")));
    }
    Ok(())
}
