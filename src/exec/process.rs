// src/exec/process.rs

//! Single child-process runner.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{GerrisError, Result};
use crate::exec::command::CommandLine;
use crate::logging::ToolLog;

/// Where the child's stdout goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StdoutTarget {
    /// Created (or truncated) once the program resolves; receives the raw bytes.
    File(PathBuf),
    Discard,
}

/// Spawn `command`, stream its stderr into `tool_log` and wait for it.
///
/// - stdout goes to `stdout` as raw bytes;
/// - stderr is drained on its own task while the process runs, and that task
///   is joined before the exit status is inspected;
/// - a non-zero (or missing) exit code is `GerrisError::ProcessFailed`. The
///   output file is left as the process wrote it.
pub async fn run_process(
    command: &CommandLine,
    stdout: &StdoutTarget,
    tool_log: Arc<dyn ToolLog>,
) -> Result<()> {
    let program = which::which(&command.program).map_err(|e| GerrisError::Spawn {
        program: command.program.clone(),
        source: std::io::Error::new(ErrorKind::NotFound, e),
    })?;
    debug!(program = ?program, "resolved executable");

    let stdout_stdio = match stdout {
        StdoutTarget::File(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("opening output file {:?}", path))?;
            Stdio::from(file)
        }
        StdoutTarget::Discard => Stdio::null(),
    };

    let mut cmd = Command::new(&program);
    cmd.args(&command.args)
        .stdin(Stdio::null())
        .stdout(stdout_stdio)
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| GerrisError::Spawn {
        program: command.program.clone(),
        source,
    })?;

    let drain = child
        .stderr
        .take()
        .map(|stderr| tokio::spawn(drain_lines(stderr, tool_log)));

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for {}", command.program))?;

    if let Some(handle) = drain {
        let lines = handle.await.context("joining stderr reader")??;
        debug!(lines, "stderr drained");
    }

    info!(
        exit_code = ?status.code(),
        success = status.success(),
        "process exited"
    );

    if !status.success() {
        return Err(GerrisError::ProcessFailed {
            program: command.program.clone(),
            code: status.code(),
        });
    }

    Ok(())
}

/// Forward each line of `reader` to `tool_log`, returning the line count.
///
/// Lines are decoded lossily and lose their trailing `\n` / `\r\n`.
pub async fn drain_lines<R>(reader: R, tool_log: Arc<dyn ToolLog>) -> Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).await?;
        if n == 0 {
            break;
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        tool_log.line(&line);
        count += 1;
    }

    Ok(count)
}
