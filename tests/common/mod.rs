//! Common test utilities for ollama-params integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding input files for a test
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(name);
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }
}

/// Command for the real ollama-params binary with a clean environment
#[allow(deprecated)]
pub fn ollama_params_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ollama-params").expect("Failed to find ollama-params binary");
    cmd.env_remove("OLLAMA_PARAMS_FORMAT")
        .env_remove("OLLAMA_PARAMS_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// A parameter block as printed by the model server
#[allow(dead_code)]
pub const LLAMA3_PARAMETERS: &str = "num_ctx                        8192\n\
stop                           \"<|start_header_id|>\"\n\
stop                           \"<|end_header_id|>\"\n\
stop                           \"<|eot_id|>\"\n\
temperature                    0.6\n";
