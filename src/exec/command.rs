// src/exec/command.rs

//! Docker command-line construction.
//!
//! Every invocation has the same prefix:
//!
//! ```text
//! docker run --rm -v <abs input>:<root>/<basename> -v <abs working dir>:<root> <image>
//! ```
//!
//! followed by a mode-specific tail.

use std::borrow::Cow;
use std::fmt;

use crate::config::ConfigFile;
use crate::exec::paths::ResolvedPaths;

/// What the container should do with the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `gerris2D -m <file>`
    Run,
    /// `gerris2D -ms <parts> <file>`: split the simulation domain.
    Split { parts: usize },
    /// `gerris2D -mb <blocks> <file>`: partition into blocks for parallel runs.
    Parallelize { blocks: usize },
    /// `mpirun --allow-run-as-root -np <ranks> gerris2D -m <file>`
    ParallelRun { ranks: usize },
    /// `bash -c "xyz2kdt -v <name> < <file>"`, with name and file shell-quoted.
    Topology { name: String },
}

impl Mode {
    /// Short label used in progress logs.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Run => "gerris simulation",
            Mode::Split { .. } => "simulation split",
            Mode::Parallelize { .. } => "simulation parallelization",
            Mode::ParallelRun { .. } => "parallel gerris simulation",
            Mode::Topology { .. } => "topography conversion",
        }
    }
}

/// A program plus its arguments, ready to hand to a process spawner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Program followed by arguments, as one vector.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// Build the full `docker run` command for `mode`.
pub fn build_command(cfg: &ConfigFile, mode: &Mode, paths: &ResolvedPaths) -> CommandLine {
    let root = cfg.docker.container_root.trim_end_matches('/');
    let basename = paths.input_name.as_str();

    let mut args: Vec<String> = vec![
        "run".into(),
        "--rm".into(),
        "-v".into(),
        format!("{}:{}/{}", paths.input.display(), root, basename),
        "-v".into(),
        format!("{}:{}", paths.working_dir.display(), container_mount(root)),
        cfg.docker.image.clone(),
    ];

    let solver = cfg.solver.program.clone();
    match mode {
        Mode::Run => {
            args.extend([solver, "-m".into(), basename.into()]);
        }
        Mode::Split { parts } => {
            args.extend([solver, "-ms".into(), parts.to_string(), basename.into()]);
        }
        Mode::Parallelize { blocks } => {
            args.extend([solver, "-mb".into(), blocks.to_string(), basename.into()]);
        }
        Mode::ParallelRun { ranks } => {
            args.extend([
                cfg.solver.mpirun.clone(),
                "--allow-run-as-root".into(),
                "-np".into(),
                ranks.to_string(),
                solver,
                "-m".into(),
                basename.into(),
            ]);
        }
        Mode::Topology { name } => {
            args.extend([
                "bash".into(),
                "-c".into(),
                format!(
                    "{} -v {} < {}",
                    cfg.solver.topo_converter,
                    shell_quote(name),
                    shell_quote(basename)
                ),
            ]);
        }
    }

    CommandLine {
        program: cfg.docker.binary.clone(),
        args,
    }
}

// `trim_end_matches('/')` turns "/" into "".
fn container_mount(root: &str) -> &str {
    if root.is_empty() { "/" } else { root }
}

/// Quote `word` as a single POSIX shell word.
///
/// Words made only of `[A-Za-z0-9_+,./:@-]` pass through unchanged; anything
/// else is wrapped in single quotes, with embedded `'` written as `'\''`.
pub fn shell_quote(word: &str) -> Cow<'_, str> {
    let plain = !word.is_empty()
        && word
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"_+,./:@-".contains(&b));

    if plain {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(format!("'{}'", word.replace('\'', r"'\''")))
    }
}
