// src/invoker.rs

//! The public entry points: one method per gerris invocation.
//!
//! Each call is independent:
//! 1. check the input file and working directory,
//! 2. build the docker command for the requested [`Mode`],
//! 3. run it through the [`ProcessBackend`], stderr going to the
//!    [`ToolLog`],
//! 4. fail if the process exits non-zero.
//!
//! Nothing is retried and no state is kept between calls.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::exec::{
    build_command, resolve_paths, CommandLine, DockerBackend, Mode, ProcessBackend, StdoutTarget,
};
use crate::fs::{FileSystem, RealFileSystem};
use crate::logging::{ToolLog, TracingToolLog};

/// Default number of split parts for [`Invoker::split`].
pub const DEFAULT_SPLIT_PARTS: usize = 2;

/// Number of CPUs, used as the default block and rank count.
pub fn default_process_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[derive(Clone)]
pub struct Invoker {
    config: ConfigFile,
    fs: Arc<dyn FileSystem>,
    backend: Arc<dyn ProcessBackend>,
    tool_log: Arc<dyn ToolLog>,
}

impl Invoker {
    /// Invoker that spawns real processes and logs tool output via `tracing`.
    pub fn new(config: ConfigFile) -> Self {
        Self {
            config,
            fs: Arc::new(RealFileSystem),
            backend: Arc::new(DockerBackend),
            tool_log: Arc::new(TracingToolLog),
        }
    }

    pub fn with_filesystem(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_backend(mut self, backend: Arc<dyn ProcessBackend>) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_tool_log(mut self, tool_log: Arc<dyn ToolLog>) -> Self {
        self.tool_log = tool_log;
        self
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub(crate) fn filesystem(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// Validate paths and return the command that `mode` would run,
    /// without spawning it.
    pub fn command_for(
        &self,
        mode: &Mode,
        input: impl AsRef<Path>,
        working_dir: impl AsRef<Path>,
    ) -> Result<CommandLine> {
        info!("check consistency of input files");
        let paths = resolve_paths(self.fs.as_ref(), input.as_ref(), working_dir.as_ref())?;
        let command = build_command(&self.config, mode, &paths);
        debug!(command = %command, "command line");
        Ok(command)
    }

    /// Run the simulation described by `gfs_file`, writing stdout to `output`.
    pub async fn run(
        &self,
        gfs_file: impl AsRef<Path>,
        output: impl AsRef<Path>,
        working_dir: impl AsRef<Path>,
    ) -> Result<()> {
        self.invoke(
            Mode::Run,
            gfs_file.as_ref(),
            StdoutTarget::File(output.as_ref().to_path_buf()),
            working_dir.as_ref(),
        )
        .await
    }

    /// Split the simulation domain into `parts`.
    pub async fn split(
        &self,
        gfs_file: impl AsRef<Path>,
        output: impl AsRef<Path>,
        parts: usize,
        working_dir: impl AsRef<Path>,
    ) -> Result<()> {
        self.invoke(
            Mode::Split { parts },
            gfs_file.as_ref(),
            StdoutTarget::File(output.as_ref().to_path_buf()),
            working_dir.as_ref(),
        )
        .await
    }

    /// Partition the simulation into `blocks` for a later parallel run.
    pub async fn parallelize(
        &self,
        gfs_file: impl AsRef<Path>,
        output: impl AsRef<Path>,
        blocks: usize,
        working_dir: impl AsRef<Path>,
    ) -> Result<()> {
        self.invoke(
            Mode::Parallelize { blocks },
            gfs_file.as_ref(),
            StdoutTarget::File(output.as_ref().to_path_buf()),
            working_dir.as_ref(),
        )
        .await
    }

    /// Run the simulation under MPI with `ranks` processes.
    pub async fn prun(
        &self,
        gfs_file: impl AsRef<Path>,
        output: impl AsRef<Path>,
        ranks: usize,
        working_dir: impl AsRef<Path>,
    ) -> Result<()> {
        self.invoke(
            Mode::ParallelRun { ranks },
            gfs_file.as_ref(),
            StdoutTarget::File(output.as_ref().to_path_buf()),
            working_dir.as_ref(),
        )
        .await
    }

    /// Convert an xyz point file into the topography database `topo_name`,
    /// written into `working_dir`. The converter's stdout is discarded.
    pub async fn generate_topo_from_file(
        &self,
        xyz_file: impl AsRef<Path>,
        topo_name: &str,
        working_dir: impl AsRef<Path>,
    ) -> Result<()> {
        self.invoke(
            Mode::Topology {
                name: topo_name.to_string(),
            },
            xyz_file.as_ref(),
            StdoutTarget::Discard,
            working_dir.as_ref(),
        )
        .await
    }

    async fn invoke(
        &self,
        mode: Mode,
        input: &Path,
        stdout: StdoutTarget,
        working_dir: &Path,
    ) -> Result<()> {
        let command = self.command_for(&mode, input, working_dir)?;

        info!("starting {}...", mode.label());
        self.backend
            .run(&command, &stdout, Arc::clone(&self.tool_log))
            .await?;
        info!("{} finished", mode.label());

        Ok(())
    }
}

impl std::fmt::Debug for Invoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invoker")
            .field("config", &self.config)
            .field("fs", &self.fs)
            .field("tool_log", &self.tool_log)
            .finish_non_exhaustive()
    }
}
