// tests/preconditions.rs

use gerris_wrapper_test_utils::fake_backend::{RecordingBackend, RecordingToolLog};
use gerris_wrapper_test_utils::init_tracing;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use gerris_wrapper::config::ConfigFile;
use gerris_wrapper::errors::{GerrisError, PreconditionError};
use gerris_wrapper::exec::{Mode, StdoutTarget};
use gerris_wrapper::fs::mock::MockFileSystem;
use gerris_wrapper::Invoker;

type TestResult = Result<(), Box<dyn Error>>;

fn setup() -> (MockFileSystem, Arc<RecordingBackend>, Invoker) {
    init_tracing();
    let fs = MockFileSystem::new();
    let backend = Arc::new(RecordingBackend::new());
    let invoker = Invoker::new(ConfigFile::default())
        .with_filesystem(Arc::new(fs.clone()))
        .with_backend(backend.clone());
    (fs, backend, invoker)
}

#[tokio::test]
async fn missing_input_file_fails_before_spawning() -> TestResult {
    let (fs, backend, invoker) = setup();
    fs.add_dir("/sims");

    let result = invoker.run("/sims/absent.gfs", "/sims/out.log", "/sims").await;

    match result {
        Err(GerrisError::Precondition(PreconditionError::MissingInputFile(path))) => {
            assert_eq!(path, PathBuf::from("/sims/absent.gfs"));
        }
        other => panic!("Expected MissingInputFile, got: {:?}", other),
    }
    assert!(backend.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_working_dir_fails_before_spawning() -> TestResult {
    let (fs, backend, invoker) = setup();
    fs.add_file("/sims/cavity.gfs", "Define ...");

    let result = invoker
        .split("/sims/cavity.gfs", "/sims/out.log", 4, "/nowhere")
        .await;

    match result {
        Err(GerrisError::Precondition(PreconditionError::MissingWorkingDir(path))) => {
            assert_eq!(path, PathBuf::from("/nowhere"));
        }
        other => panic!("Expected MissingWorkingDir, got: {:?}", other),
    }
    assert!(backend.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn input_file_is_checked_before_working_dir() -> TestResult {
    let (_fs, backend, invoker) = setup();

    let result = invoker
        .generate_topo_from_file("/sims/points.xyz", "bathy", "/nowhere")
        .await;

    assert!(matches!(
        result,
        Err(GerrisError::Precondition(PreconditionError::MissingInputFile(_)))
    ));
    assert!(backend.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn directory_given_as_input_file_is_rejected() -> TestResult {
    let (fs, backend, invoker) = setup();
    fs.add_dir("/sims/cavity.gfs");

    let result = invoker.run("/sims/cavity.gfs", "/sims/out.log", "/sims").await;

    assert!(matches!(
        result,
        Err(GerrisError::Precondition(PreconditionError::MissingInputFile(_)))
    ));
    assert!(backend.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn simulations_write_stdout_to_output_file() -> TestResult {
    let (fs, backend, invoker) = setup();
    fs.add_file("/sims/cavity.gfs", "Define ...");

    invoker.run("/sims/cavity.gfs", "/sims/run.log", "/sims").await?;
    invoker
        .prun("/sims/cavity.gfs", "/sims/prun.log", 2, "/sims")
        .await?;

    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, StdoutTarget::File(PathBuf::from("/sims/run.log")));
    assert_eq!(calls[1].1, StdoutTarget::File(PathBuf::from("/sims/prun.log")));
    assert!(calls[1].0.args.iter().any(|a| a == "mpirun"));
    Ok(())
}

#[tokio::test]
async fn topology_conversion_discards_stdout() -> TestResult {
    let (fs, backend, invoker) = setup();
    fs.add_file("/sims/points.xyz", "0 0 1\n");

    invoker
        .generate_topo_from_file("/sims/points.xyz", "bathy", "/sims")
        .await?;

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, StdoutTarget::Discard);
    assert_eq!(
        calls[0].0.args.last().map(String::as_str),
        Some("xyz2kdt -v bathy < points.xyz")
    );
    Ok(())
}

#[tokio::test]
async fn failing_process_surfaces_as_process_failed() -> TestResult {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("/sims/cavity.gfs", "Define ...");
    let backend = Arc::new(
        RecordingBackend::new()
            .with_stderr(&["gerris: parse error"])
            .with_exit_code(3),
    );
    let tool_log = RecordingToolLog::new();
    let invoker = Invoker::new(ConfigFile::default())
        .with_filesystem(Arc::new(fs))
        .with_backend(backend.clone())
        .with_tool_log(Arc::new(tool_log.clone()));

    let result = invoker
        .parallelize("/sims/cavity.gfs", "/sims/out.log", 4, "/sims")
        .await;

    match result {
        Err(GerrisError::ProcessFailed { program, code }) => {
            assert_eq!(program, "docker");
            assert_eq!(code, Some(3));
        }
        other => panic!("Expected ProcessFailed, got: {:?}", other),
    }
    assert_eq!(tool_log.lines(), vec!["gerris: parse error".to_string()]);
    Ok(())
}

#[test]
fn command_for_validates_without_running() -> TestResult {
    let (fs, backend, invoker) = setup();
    fs.add_file("/sims/cavity.gfs", "Define ...");

    let cmd = invoker.command_for(&Mode::Split { parts: 4 }, "/sims/cavity.gfs", "/sims")?;
    assert!(cmd.args.windows(2).any(|w| w[0] == "-ms" && w[1] == "4"));

    let missing = invoker.command_for(&Mode::Run, "/sims/other.gfs", "/sims");
    assert!(missing.is_err());
    assert!(backend.calls().is_empty());
    Ok(())
}
