// src/logging.rs

//! Logging setup for `gerris-wrapper` using `tracing` + `tracing-subscriber`.
//!
//! There are two channels:
//! - wrapper progress, emitted with the crate's own target;
//! - the tool's stderr, routed through a [`ToolLog`] sink. The default sink
//!   re-emits each line as a `tracing` event with target [`TOOL_LOG_TARGET`].
//!
//! Without an installed subscriber both channels are silent, so embedding
//! applications decide what gets recorded.
//!
//! Priority for determining the CLI log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `GERRIS_WRAPPER_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`

use std::fmt::Debug;

use anyhow::Result;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Target used for lines captured from the tool's stderr.
pub const TOOL_LOG_TARGET: &str = "gerris_log";

/// Sink receiving one decoded stderr line at a time, newline stripped.
pub trait ToolLog: Send + Sync + Debug {
    fn line(&self, line: &str);
}

/// Forwards tool output to `tracing` at `info` level.
#[derive(Debug, Clone, Default)]
pub struct TracingToolLog;

impl ToolLog for TracingToolLog {
    fn line(&self, line: &str) {
        tracing::info!(target: TOOL_LOG_TARGET, "{}", line);
    }
}

/// Drops every line.
#[derive(Debug, Clone, Default)]
pub struct NullToolLog;

impl ToolLog for NullToolLog {
    fn line(&self, _line: &str) {}
}

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let level = match cli_level {
        Some(lvl) => level_from_log_level(lvl),
        None => std::env::var("GERRIS_WRAPPER_LOG")
            .ok()
            .and_then(|s| parse_level_str(&s))
            .unwrap_or(tracing::Level::INFO),
    };

    // Send logs to stderr; stdout may carry dry-run output.
    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
