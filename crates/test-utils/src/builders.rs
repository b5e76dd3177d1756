#![allow(dead_code)]

use std::path::Path;

use gerris_wrapper::config::{ConfigFile, RawConfigFile};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn docker_binary(mut self, binary: impl AsRef<Path>) -> Self {
        self.config.docker.binary = binary.as_ref().to_string_lossy().into_owned();
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.config.docker.image = image.to_string();
        self
    }

    pub fn container_root(mut self, root: &str) -> Self {
        self.config.docker.container_root = root.to_string();
        self
    }

    pub fn solver(mut self, program: &str) -> Self {
        self.config.solver.program = program.to_string();
        self
    }

    pub fn mpirun(mut self, launcher: &str) -> Self {
        self.config.solver.mpirun = launcher.to_string();
        self
    }

    pub fn topo_converter(mut self, converter: &str) -> Self {
        self.config.solver.topo_converter = converter.to_string();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
