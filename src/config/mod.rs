// src/config/mod.rs

//! Configuration loading and validation for gerris-wrapper.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like non-empty program names (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_config_path, load_and_validate, load_from_path, load_or_default, load_with_fallbacks,
    CONFIG_ENV_VAR,
};
pub use model::{ConfigFile, DockerSection, RawConfigFile, SolverSection};
