use zigtest::config::{RawRunnerConfig, RunnerConfig, TargetsSection, ToolchainSection};

/// Builder for `RunnerConfig` to simplify test setup.
///
/// Starts from the same template as the compiled-in config, with no targets.
pub struct RunnerConfigBuilder {
    config: RawRunnerConfig,
}

impl RunnerConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawRunnerConfig {
                toolchain: ToolchainSection {
                    program: "zig".to_string(),
                    subcommand: "test".to_string(),
                    lib_root: "./src/lib".to_string(),
                    trailing_args: vec!["-l".to_string(), "c".to_string()],
                },
                targets: TargetsSection { paths: vec![] },
            },
        }
    }

    pub fn program(mut self, program: &str) -> Self {
        self.config.toolchain.program = program.to_string();
        self
    }

    pub fn subcommand(mut self, subcommand: &str) -> Self {
        self.config.toolchain.subcommand = subcommand.to_string();
        self
    }

    pub fn lib_root(mut self, root: &str) -> Self {
        self.config.toolchain.lib_root = root.to_string();
        self
    }

    pub fn target(mut self, path: &str) -> Self {
        self.config.targets.paths.push(path.to_string());
        self
    }

    pub fn build(self) -> RunnerConfig {
        RunnerConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for RunnerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
