//! A shell script standing in for the `docker` CLI.
//!
//! The script records its arguments one per line, prints canned stdout and
//! stderr, and exits with a chosen code. Unix only.

use std::fs;
use std::path::{Path, PathBuf};

/// Builder for the fake `docker` executable.
pub struct FakeDocker {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    exit_code: i32,
}

/// An installed fake: the script path plus where it records its arguments.
pub struct InstalledDocker {
    pub binary: PathBuf,
    pub argv_file: PathBuf,
}

impl FakeDocker {
    pub fn new() -> Self {
        Self {
            stdout: Vec::new(),
            stderr: Vec::new(),
            exit_code: 0,
        }
    }

    pub fn stdout(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.stdout = bytes.into();
        self
    }

    pub fn stderr(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.stderr = bytes.into();
        self
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Write the script and its data files into `dir`.
    #[cfg(unix)]
    pub fn install(self, dir: &Path) -> std::io::Result<InstalledDocker> {
        use std::os::unix::fs::PermissionsExt;

        let stdout_file = dir.join("fake-docker.stdout");
        let stderr_file = dir.join("fake-docker.stderr");
        let argv_file = dir.join("fake-docker.argv");
        let binary = dir.join("fake-docker");

        fs::write(&stdout_file, &self.stdout)?;
        fs::write(&stderr_file, &self.stderr)?;

        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$@\" > '{argv}'\n\
             cat '{out}'\n\
             cat '{err}' >&2\n\
             exit {code}\n",
            argv = argv_file.display(),
            out = stdout_file.display(),
            err = stderr_file.display(),
            code = self.exit_code,
        );
        fs::write(&binary, script)?;
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o755))?;

        Ok(InstalledDocker { binary, argv_file })
    }
}

impl Default for FakeDocker {
    fn default() -> Self {
        Self::new()
    }
}

impl InstalledDocker {
    /// Arguments from the last invocation, or empty if it never ran.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(&self.argv_file)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn was_invoked(&self) -> bool {
        self.argv_file.exists()
    }
}
