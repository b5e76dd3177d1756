// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [docker]
/// binary = "docker"
/// image = "gerris"
/// container_root = "/root"
///
/// [solver]
/// program = "gerris2D"
/// mpirun = "mpirun"
/// topo_converter = "xyz2kdt"
/// ```
///
/// All sections are optional and have reasonable defaults. This is the
/// unvalidated form; convert it with `ConfigFile::try_from`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub docker: DockerSection,

    #[serde(default)]
    pub solver: SolverSection,
}

/// `[docker]` section: how the container is started.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DockerSection {
    /// Docker CLI executable, looked up on `PATH` when not absolute.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Image that ships the gerris toolchain.
    #[serde(default = "default_image")]
    pub image: String,

    /// Directory inside the container where the working directory is
    /// mounted and where the input file appears.
    #[serde(default = "default_container_root")]
    pub container_root: String,
}

fn default_binary() -> String {
    "docker".to_string()
}

fn default_image() -> String {
    "gerris".to_string()
}

fn default_container_root() -> String {
    "/root".to_string()
}

impl Default for DockerSection {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            image: default_image(),
            container_root: default_container_root(),
        }
    }
}

/// `[solver]` section: programs invoked inside the container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverSection {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_mpirun")]
    pub mpirun: String,

    #[serde(default = "default_topo_converter")]
    pub topo_converter: String,
}

fn default_program() -> String {
    "gerris2D".to_string()
}

fn default_mpirun() -> String {
    "mpirun".to_string()
}

fn default_topo_converter() -> String {
    "xyz2kdt".to_string()
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            program: default_program(),
            mpirun: default_mpirun(),
            topo_converter: default_topo_converter(),
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub docker: DockerSection,
    pub solver: SolverSection,
}

impl ConfigFile {
    /// Build without validation. Callers outside `validate.rs` should go
    /// through `TryFrom<RawConfigFile>`.
    pub(crate) fn new_unchecked(docker: DockerSection, solver: SolverSection) -> Self {
        Self { docker, solver }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(DockerSection::default(), SolverSection::default())
    }
}
