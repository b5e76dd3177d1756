// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

/// Why a call was refused before anything was spawned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("input file not found: {0:?}")]
    MissingInputFile(PathBuf),

    #[error("working directory does not exist: {0:?}")]
    MissingWorkingDir(PathBuf),
}

#[derive(Error, Debug)]
pub enum GerrisError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error("{program} exited with {}", describe_code(.code))]
    ProcessFailed { program: String, code: Option<i32> },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("malformed ASC header at line {line}: {reason}")]
    AscHeader { line: usize, reason: String },

    #[error("malformed ASC body: {0}")]
    AscBody(String),

    #[error("cannot reshape {found} values into {expected} cells")]
    ShapeMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, GerrisError>;
