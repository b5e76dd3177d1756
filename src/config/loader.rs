// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Environment variable that overrides the default config location.
pub const CONFIG_ENV_VAR: &str = "GERRIS_WRAPPER_CONFIG";

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the configuration used by the CLI.
///
/// - An explicit path must exist.
/// - Otherwise `GERRIS_WRAPPER_CONFIG`, then [`default_config_path`], are
///   tried; a missing default file means built-in defaults.
pub fn load_or_default(explicit: Option<&Path>) -> Result<ConfigFile> {
    let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    load_with_fallbacks(explicit, from_env.as_deref(), &default_config_path())
}

/// [`load_or_default`] with the environment and default location passed in.
///
/// `explicit` and `from_env` must point at readable files; `default` is only
/// read when it is a file.
pub fn load_with_fallbacks(
    explicit: Option<&Path>,
    from_env: Option<&Path>,
    default: &Path,
) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return load_and_validate(path);
    }

    if let Some(path) = from_env {
        debug!(path = ?path, "config path taken from {}", CONFIG_ENV_VAR);
        return load_and_validate(path);
    }

    if default.is_file() {
        load_and_validate(default)
    } else {
        debug!(path = ?default, "no config file found; using built-in defaults");
        Ok(ConfigFile::default())
    }
}

/// Helper to resolve a default config path.
///
/// Currently `GerrisWrapper.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("GerrisWrapper.toml")
}
