use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use gerris_wrapper::errors::{GerrisError, Result};
use gerris_wrapper::exec::{CommandLine, ProcessBackend, StdoutTarget};
use gerris_wrapper::logging::ToolLog;

/// A fake backend that:
/// - records every command it is asked to run
/// - forwards canned stderr lines to the tool log
/// - exits with a configurable code without spawning anything.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Arc<Mutex<Vec<(CommandLine, StdoutTarget)>>>,
    stderr_lines: Vec<String>,
    exit_code: i32,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stderr(mut self, lines: &[&str]) -> Self {
        self.stderr_lines = lines.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    pub fn calls(&self) -> Vec<(CommandLine, StdoutTarget)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessBackend for RecordingBackend {
    fn run<'a>(
        &'a self,
        command: &'a CommandLine,
        stdout: &'a StdoutTarget,
        tool_log: Arc<dyn ToolLog>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            {
                let mut guard = self.calls.lock().unwrap();
                guard.push((command.clone(), stdout.clone()));
            }

            for line in &self.stderr_lines {
                tool_log.line(line);
            }

            if self.exit_code != 0 {
                return Err(GerrisError::ProcessFailed {
                    program: command.program.clone(),
                    code: Some(self.exit_code),
                });
            }
            Ok(())
        })
    }
}

/// Tool log that keeps every line in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingToolLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingToolLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ToolLog for RecordingToolLog {
    fn line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
