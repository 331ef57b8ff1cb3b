//! Shared testing utilities for wsdgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR fake image body";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with empty source and output directories.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("diagrams")).expect("Failed to create source directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn source_dir(&self) -> PathBuf {
        self.work_dir.join("diagrams")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join("images")
    }

    /// Write a diagram source file.
    pub fn write_source(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.source_dir().join(name);
        fs::write(&path, content).expect("Failed to write source");
        path
    }

    /// Write `wsdgen.toml` in the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("wsdgen.toml"), content).expect("Failed to write config");
    }

    /// Build a command for invoking the compiled `wsdgen` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wsdgen").expect("Failed to locate wsdgen binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// `wsdgen generate` wired to the given service with test directories.
    pub fn generate(&self, service_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args(["generate", "--source-dir", "diagrams", "--output-dir", "images"])
            .args(["--service-url", service_url, "--timeout-secs", "10"]);
        cmd
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.output_dir().join(name)
    }
}

/// Register the two service endpoints for a successful render of token `id`.
#[allow(dead_code)]
pub fn mock_service(server: &mut mockito::ServerGuard, id: &str) -> (mockito::Mock, mockito::Mock) {
    let render = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("{{\"img\": \"?png={id}\", \"errors\": []}}"))
        .create();
    let fetch = server
        .mock("GET", "/")
        .match_query(mockito::Matcher::UrlEncoded("png".into(), id.into()))
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(PNG_BYTES)
        .create();
    (render, fetch)
}
