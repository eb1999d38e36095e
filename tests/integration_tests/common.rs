// shared utilities for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// get path to the built mediaq binary
pub fn mediaq_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mediaq"))
}

/// isolated working directory and home for one test
///
/// the binary runs with the temp dir as cwd and HOME, so neither a stray
/// `./mediaq.json5` nor the user's real config can leak in.
pub struct TestEnv {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create test directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// write a config file (JSON5 accepted) and return its path
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test config");
        path
    }

    /// write a config from a JSON value
    pub fn write_json_config(&self, name: &str, content: &serde_json::Value) -> PathBuf {
        self.write_config(name, &serde_json::to_string_pretty(content).unwrap())
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(mediaq_binary_path());
        cmd.args(args)
            .current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join(".config"))
            .env_remove("MEDIAQ_CONFIG")
            .env_remove("MEDIAQ_LOG");
        cmd
    }

    /// run mediaq and capture output
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("Failed to run mediaq")
    }

    /// run mediaq with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Output {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to run mediaq")
    }

    /// run with text output forced (stdout is piped in tests, which auto-enables JSON)
    pub fn run_text(&self, args: &[&str]) -> Output {
        let mut full = vec!["--no-json"];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// run with JSON output and parse stdout
    pub fn run_json(&self, args: &[&str]) -> (Output, serde_json::Value) {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let output = self.run(&full);
        let value = parse_json(&output);
        (output, value)
    }
}

#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn parse_json(output: &Output) -> serde_json::Value {
    let text = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(text.trim()).unwrap_or_else(|e| {
        panic!(
            "stdout is not valid JSON ({}): {}\nstderr: {}",
            e,
            text,
            String::from_utf8_lossy(&output.stderr)
        )
    })
}
