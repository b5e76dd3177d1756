// src/exec/paths.rs

//! Precondition checks run before any process is spawned.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{PreconditionError, Result};
use crate::fs::FileSystem;

/// Paths that passed the existence checks, made absolute for bind mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    /// File name of `input`, as it appears inside the container.
    pub input_name: String,
    pub working_dir: PathBuf,
}

/// Check that `input` is a file and `working_dir` a directory.
///
/// The input file is checked first; neither path is created.
pub fn resolve_paths(
    fs: &dyn FileSystem,
    input: &Path,
    working_dir: &Path,
) -> Result<ResolvedPaths> {
    let input = fs.absolute(input)?;
    debug!(path = ?input, "looking for input file");
    if !fs.is_file(&input) {
        return Err(PreconditionError::MissingInputFile(input).into());
    }

    let working_dir = check_working_dir(fs, working_dir)?;

    let input_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| PreconditionError::MissingInputFile(input.clone()))?;

    Ok(ResolvedPaths {
        input,
        input_name,
        working_dir,
    })
}

/// Check that `working_dir` exists and return its absolute form.
pub fn check_working_dir(fs: &dyn FileSystem, working_dir: &Path) -> Result<PathBuf> {
    let working_dir = fs.absolute(working_dir)?;
    debug!(path = ?working_dir, "checking if working directory exists");
    if !fs.is_dir(&working_dir) {
        return Err(PreconditionError::MissingWorkingDir(working_dir).into());
    }
    Ok(working_dir)
}
