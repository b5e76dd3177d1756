// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::invoker::DEFAULT_SPLIT_PARTS;

/// Command-line arguments for `gerris-wrapper`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gerris-wrapper",
    version,
    about = "Run the gerris flow solver inside docker.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `GERRIS_WRAPPER_CONFIG`, then `GerrisWrapper.toml` in the
    /// current working directory, then built-in defaults.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GERRIS_WRAPPER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Check inputs and print the docker command, but don't run it.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Run a simulation (`gerris2D -m`).
    Run(SimulationArgs),

    /// Split the simulation domain (`gerris2D -ms N`).
    Split {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Number of parts.
        #[arg(short = 'n', long, default_value_t = DEFAULT_SPLIT_PARTS)]
        parts: usize,
    },

    /// Partition the simulation into blocks (`gerris2D -mb N`).
    Parallelize {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Number of blocks. Defaults to the number of CPUs.
        #[arg(short = 'n', long)]
        blocks: Option<usize>,
    },

    /// Run a simulation under MPI (`mpirun -np N gerris2D -m`).
    Prun {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Number of MPI ranks. Defaults to the number of CPUs.
        #[arg(short = 'n', long)]
        ranks: Option<usize>,
    },

    /// Build a topography database with `xyz2kdt`.
    Topo(TopoArgs),
}

/// Arguments shared by the simulation subcommands.
#[derive(Debug, Clone, Args)]
pub struct SimulationArgs {
    /// Simulation file (`.gfs`).
    #[arg(value_name = "GFS_FILE")]
    pub gfs_file: PathBuf,

    /// File receiving the solver's stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Directory mounted as the container's working directory.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub working_dir: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct TopoArgs {
    /// Name of the topography database to create.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Whitespace-separated `x y z` point file.
    #[arg(long, value_name = "PATH", conflicts_with = "asc", required_unless_present = "asc")]
    pub xyz: Option<PathBuf>,

    /// ASC raster grid.
    #[arg(long, value_name = "PATH")]
    pub asc: Option<PathBuf>,

    /// Directory mounted as the container's working directory.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub working_dir: PathBuf,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
