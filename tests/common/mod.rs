//! Shared testing utilities for utilcfg CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The reference descriptor: class-based dark mode, two scan targets and a
/// pink palette extension.
#[allow(dead_code)]
pub const REFERENCE_TOML: &str = r##"darkMode = "class"
content = ["./templates/**/*.html", "./static/**/*.js"]
plugins = []

[theme.extend.colors.pink]
500 = "#ec4899"
600 = "#db2777"
700 = "#be185d"
"##;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `utilcfg` binary within the project.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `utilcfg` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("utilcfg").expect("Failed to locate utilcfg binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Write a file relative to the project directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the reference descriptor as `utilcfg.toml`.
    pub fn write_reference_config(&self) -> PathBuf {
        self.write_file("utilcfg.toml", REFERENCE_TOML)
    }

    /// Create the source files the reference descriptor scans.
    pub fn write_sources(&self) {
        self.write_file("templates/index.html", r#"<body class="bg-pink-600 dark:bg-gray-900">"#);
        self.write_file("templates/partials/nav.html", r#"<nav class="text-pink-500">"#);
        self.write_file("static/app.js", "document.body.classList.toggle('dark');");
    }

    /// Read a file relative to the project directory.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }
}
