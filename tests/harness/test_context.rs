//! Shared testing harness for `imagelab` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `imagelab` binary within the work directory.
    ///
    /// The API key variable is cleared so nothing reaches the network by accident.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("imagelab").expect("Failed to locate imagelab binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("GEMINI_API_KEY")
            .env_remove("IMAGELAB_LOG");
        cmd
    }

    /// Write a PNG into the work directory and return its path.
    pub(crate) fn write_png(&self, name: &str, tag: u8) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, super::png_bytes(tag)).expect("Failed to write test image");
        path
    }

    /// Write `.imagelab/config.toml` in the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        let dir = self.work_dir.join(".imagelab");
        fs::create_dir_all(&dir).expect("Failed to create .imagelab");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Raw library blob, if one has been written.
    pub(crate) fn library_blob(&self) -> Option<String> {
        fs::read_to_string(self.work_dir.join(".imagelab/imagelab.library.json")).ok()
    }

    /// Files in `dir` (relative to the work directory) whose names start with `imagelab-edit-`.
    pub(crate) fn exported_files(&self, dir: &str) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.work_dir.join(dir)) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with("imagelab-edit-"))
            })
            .collect();
        files.sort();
        files
    }

    /// Run a mock edit saving the result as `kind` and return the new item id.
    pub(crate) fn save_mock_edit(&self, kind: &str, tag: u8) -> String {
        let image = self.write_png(&format!("input-{}.png", tag), tag);
        self.cli()
            .args(["edit", image.to_str().unwrap(), "-t", "custom_edit", "-o", "out", "--mock"])
            .args(["--save", kind])
            .assert()
            .success();

        let blob = self.library_blob().expect("library blob written");
        let items: serde_json::Value = serde_json::from_str(&blob).expect("library blob is JSON");
        items[0]["id"].as_str().expect("item id").to_string()
    }
}
