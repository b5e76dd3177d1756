// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`paths`] validates and absolutizes the input file and working
//!   directory before anything is spawned.
//! - [`command`] builds the `docker run` argument vector for each mode.
//! - [`process`] spawns one child with `tokio::process::Command`, drains its
//!   stderr into a [`ToolLog`](crate::logging::ToolLog) and checks the exit
//!   status.
//! - [`backend`] provides the `ProcessBackend` trait and the concrete
//!   `DockerBackend` used in production, which tests can replace with a
//!   fake implementation.

pub mod backend;
pub mod command;
pub mod paths;
pub mod process;

pub use backend::{DockerBackend, ProcessBackend};
pub use command::{build_command, CommandLine, Mode};
pub use paths::{check_working_dir, resolve_paths, ResolvedPaths};
pub use process::{run_process, StdoutTarget};
