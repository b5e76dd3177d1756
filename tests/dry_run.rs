// tests/dry_run.rs
#![cfg(unix)]

use gerris_wrapper_test_utils::fake_docker::FakeDocker;
use gerris_wrapper_test_utils::init_tracing;

use std::error::Error;
use std::ffi::OsStr;
use std::fs;

use clap::Parser;
use tempfile::TempDir;

use gerris_wrapper::cli::CliArgs;
use gerris_wrapper::config::ConfigFile;
use gerris_wrapper::errors::{GerrisError, PreconditionError};
use gerris_wrapper::{describe_dry_run, run, Invoker};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn dry_run_checks_inputs_without_invoking_docker() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let docker = FakeDocker::new().install(dir.path())?;
    let config = dir.path().join("GerrisWrapper.toml");
    fs::write(&config, format!("[docker]\nbinary = {:?}\n", docker.binary))?;
    let gfs = dir.path().join("cavity.gfs");
    fs::write(&gfs, "Define\n")?;
    let output = dir.path().join("out.log");

    let args = CliArgs::try_parse_from(vec![
        OsStr::new("gerris-wrapper"),
        OsStr::new("--config"),
        OsStr::new(&config),
        OsStr::new("--dry-run"),
        OsStr::new("split"),
        OsStr::new(&gfs),
        OsStr::new("-o"),
        OsStr::new(&output),
        OsStr::new("-w"),
        dir.path().as_os_str(),
    ])?;

    run(args).await?;

    assert!(!docker.was_invoked());
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn dry_run_still_reports_missing_input() -> TestResult {
    let dir = TempDir::new()?;
    let absent = dir.path().join("absent.gfs");

    let args = CliArgs::try_parse_from(vec![
        OsStr::new("gerris-wrapper"),
        OsStr::new("--dry-run"),
        OsStr::new("run"),
        OsStr::new(&absent),
        OsStr::new("-o"),
        OsStr::new("out.log"),
        OsStr::new("-w"),
        dir.path().as_os_str(),
    ])?;

    let err = run(args).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GerrisError>(),
        Some(GerrisError::Precondition(PreconditionError::MissingInputFile(_)))
    ));
    Ok(())
}

#[test]
fn report_shows_mode_output_and_command() -> TestResult {
    let dir = TempDir::new()?;
    let gfs = dir.path().join("cavity.gfs");
    fs::write(&gfs, "Define\n")?;

    let args = CliArgs::try_parse_from(vec![
        OsStr::new("gerris-wrapper"),
        OsStr::new("prun"),
        OsStr::new(&gfs),
        OsStr::new("-o"),
        OsStr::new("out.log"),
        OsStr::new("-n"),
        OsStr::new("4"),
        OsStr::new("-w"),
        dir.path().as_os_str(),
    ])?;

    let report = describe_dry_run(&Invoker::new(ConfigFile::default()), &args.command)?;

    assert!(report.starts_with("gerris-wrapper dry-run\n"));
    assert!(report.contains("  mode: parallel gerris simulation\n"));
    assert!(report.contains("  stdout -> out.log\n"));
    assert!(report.contains("mpirun --allow-run-as-root -np 4 gerris2D -m cavity.gfs\n"));
    Ok(())
}

#[test]
fn asc_topology_has_no_command_to_show() -> TestResult {
    let args = CliArgs::try_parse_from(["gerris-wrapper", "topo", "dem", "--asc", "dem.asc"])?;

    let report = describe_dry_run(&Invoker::new(ConfigFile::default()), &args.command)?;

    assert!(report.contains("ASC input is converted to a temporary xyz file first"));
    assert!(!report.contains("cmd:"));
    Ok(())
}
