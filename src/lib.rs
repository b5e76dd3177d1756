// src/lib.rs

pub mod asc;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod grid;
pub mod invoker;
pub mod logging;
pub mod topo;

pub use invoker::Invoker;

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, CliCommand, SimulationArgs, TopoArgs};
use crate::config::load_or_default;
use crate::exec::Mode;
use crate::invoker::default_process_count;

/// High-level entry point used by `main.rs`.
///
/// Loads the config, builds an [`Invoker`] and dispatches the subcommand.
/// With `--dry-run` the inputs are still checked but the docker command is
/// only printed.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref())?;
    debug!(config = ?cfg, "configuration loaded");

    let invoker = Invoker::new(cfg);

    if args.dry_run {
        print_dry_run(&invoker, &args.command)?;
        return Ok(());
    }

    match args.command {
        CliCommand::Run(sim) => {
            invoker
                .run(&sim.gfs_file, &sim.output, &sim.working_dir)
                .await?
        }
        CliCommand::Split { sim, parts } => {
            invoker
                .split(&sim.gfs_file, &sim.output, parts, &sim.working_dir)
                .await?
        }
        CliCommand::Parallelize { sim, blocks } => {
            let blocks = blocks.unwrap_or_else(default_process_count);
            invoker
                .parallelize(&sim.gfs_file, &sim.output, blocks, &sim.working_dir)
                .await?
        }
        CliCommand::Prun { sim, ranks } => {
            let ranks = ranks.unwrap_or_else(default_process_count);
            invoker
                .prun(&sim.gfs_file, &sim.output, ranks, &sim.working_dir)
                .await?
        }
        CliCommand::Topo(topo) => run_topo(&invoker, &topo).await?,
    }

    Ok(())
}

async fn run_topo(invoker: &Invoker, topo: &TopoArgs) -> errors::Result<()> {
    match (&topo.xyz, &topo.asc) {
        (Some(xyz), _) => {
            invoker
                .generate_topo_from_file(xyz, &topo.name, &topo.working_dir)
                .await
        }
        (None, Some(asc)) => {
            invoker
                .generate_topo_from_asc(asc, &topo.name, &topo.working_dir)
                .await
        }
        (None, None) => Err(errors::GerrisError::Config(
            "topo needs either --xyz or --asc".to_string(),
        )),
    }
}

fn print_dry_run(invoker: &Invoker, command: &CliCommand) -> Result<()> {
    print!("{}", describe_dry_run(invoker, command)?);
    debug!("dry-run complete (no execution)");
    Ok(())
}

/// Dry-run report: the docker command `command` would run.
///
/// Inputs are still checked, so a missing file fails here exactly as it
/// would on a real run. Nothing is spawned.
pub fn describe_dry_run(invoker: &Invoker, command: &CliCommand) -> Result<String> {
    let (mode, input, working_dir): (Mode, &Path, &Path) = match command {
        CliCommand::Run(sim) => (Mode::Run, sim.gfs_file.as_path(), sim.working_dir.as_path()),
        CliCommand::Split { sim, parts } => (
            Mode::Split { parts: *parts },
            sim.gfs_file.as_path(),
            sim.working_dir.as_path(),
        ),
        CliCommand::Parallelize { sim, blocks } => (
            Mode::Parallelize {
                blocks: blocks.unwrap_or_else(default_process_count),
            },
            sim.gfs_file.as_path(),
            sim.working_dir.as_path(),
        ),
        CliCommand::Prun { sim, ranks } => (
            Mode::ParallelRun {
                ranks: ranks.unwrap_or_else(default_process_count),
            },
            sim.gfs_file.as_path(),
            sim.working_dir.as_path(),
        ),
        CliCommand::Topo(topo) => match &topo.xyz {
            Some(xyz) => (
                Mode::Topology {
                    name: topo.name.clone(),
                },
                xyz.as_path(),
                topo.working_dir.as_path(),
            ),
            None => {
                return Ok("gerris-wrapper dry-run\n  \
                           ASC input is converted to a temporary xyz file first;\n  \
                           no command to show before the conversion.\n"
                    .to_string());
            }
        },
    };

    let cmdline = invoker.command_for(&mode, input, working_dir)?;

    let mut report = String::from("gerris-wrapper dry-run\n");
    report.push_str(&format!("  mode: {}\n", mode.label()));
    if let Some(output) = simulation_output(command) {
        report.push_str(&format!("  stdout -> {}\n", output.display()));
    }
    report.push_str(&format!("  cmd: {cmdline}\n"));
    Ok(report)
}

fn simulation_output(command: &CliCommand) -> Option<&Path> {
    let sim: &SimulationArgs = match command {
        CliCommand::Run(sim) => sim,
        CliCommand::Split { sim, .. }
        | CliCommand::Parallelize { sim, .. }
        | CliCommand::Prun { sim, .. } => sim,
        CliCommand::Topo(_) => return None,
    };
    Some(&sim.output)
}
