//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running xcr against build logs in a temp dir.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub use xcr_slf::test_support::{MessageSpec, SectionSpec};

/// Exit codes of the xcr binary
pub const EXIT_BUILD_FAILED: i32 = 1;
pub const EXIT_TIMED_OUT: i32 = 2;
pub const EXIT_UNDECODABLE: i32 = 3;

/// Environment variables that must not leak from the developer's shell.
const SCRUBBED_ENV: &[&str] = &[
    "XCR_LOG",
    "XCR_LOG_FILE",
    "XCR_TIMEOUT_SECS",
    "XCR_POLL_MS",
    "XCR_QUIET_MS",
    "XCR_DUMP_TIMEOUT_MS",
    "XCR_DERIVED_DATA",
    "XCR_DUMP_COMMAND",
    "COLOR",
];

/// Returns the path to the xcr binary, checking the llvm-cov target
/// directory first.
fn xcr_binary() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug/xcr");
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    assert_cmd::cargo::cargo_bin("xcr")
}

/// A scratch directory holding build logs and an empty config
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write raw bytes (parent directories created automatically)
    pub fn file(&self, rel: impl AsRef<Path>, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(rel.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Write a gzip-compressed SLF build log
    pub fn build_log(&self, rel: impl AsRef<Path>, main: &SectionSpec) -> PathBuf {
        let full_path = self.dir.path().join(rel.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        xcr_slf::test_support::write_log(&full_path, main).unwrap();
        full_path
    }

    /// Write `text` gzip-compressed, as an old or foreign log would look
    pub fn gzip_text(&self, rel: impl AsRef<Path>, text: &str) -> PathBuf {
        let bytes = xcr_slf::test_support::gzip(text.as_bytes()).unwrap();
        self.file(rel, &bytes)
    }

    /// Create a CLI builder isolated from the user's config
    pub fn xcr(&self) -> CliBuilder {
        CliBuilder::new().env("XCR_CONFIG", self.path().join("config.toml"))
    }
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: vec![("NO_COLOR".into(), "1".into())],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Add a path argument
    pub fn arg_path(mut self, path: impl AsRef<Path>) -> Self {
        self.args.push(path.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = Command::new(xcr_binary());
        cmd.args(&self.args);
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        cmd
    }

    fn output(self) -> Output {
        self.command().output().expect("command should run")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and expect a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.output();
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stdout does not contain substring.
    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }
}
