// src/exec/backend.rs

//! Pluggable process backend abstraction.
//!
//! The invoker talks to a `ProcessBackend` instead of spawning directly.
//! This makes it easy to swap in a fake backend in tests while keeping the
//! production implementation in [`process`](super::process).

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::Result;
use crate::exec::command::CommandLine;
use crate::exec::process::{run_process, StdoutTarget};
use crate::logging::ToolLog;

/// Trait abstracting how a built command line is executed.
///
/// Production code uses [`DockerBackend`]; tests can provide their own
/// implementation that records commands instead of spawning processes.
pub trait ProcessBackend: Send + Sync {
    /// Run `command` to completion.
    ///
    /// Must fail when the process exits non-zero.
    fn run<'a>(
        &'a self,
        command: &'a CommandLine,
        stdout: &'a StdoutTarget,
        tool_log: Arc<dyn ToolLog>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Real backend: spawns the command as an OS process.
#[derive(Debug, Clone, Default)]
pub struct DockerBackend;

impl ProcessBackend for DockerBackend {
    fn run<'a>(
        &'a self,
        command: &'a CommandLine,
        stdout: &'a StdoutTarget,
        tool_log: Arc<dyn ToolLog>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(run_process(command, stdout, tool_log))
    }
}
