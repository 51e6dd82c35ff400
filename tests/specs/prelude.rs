//! Test helpers for behavioral specifications.
//!
//! Provides a small builder DSL for running the target-pattern binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::PathBuf;

/// Returns a Command configured to run the target-pattern binary
pub fn target_pattern_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("target-pattern"));
    // Keep the caller's environment from leaking config into specs
    cmd.env_remove("TARGET_PATTERN_CONFIG");
    cmd.env_remove("TARGET_PATTERN_LOG");
    cmd
}

/// Start building a `target-pattern <subcommand>` invocation
pub fn run(subcommand: &str) -> RunBuilder {
    RunBuilder {
        args: vec![subcommand.to_string()],
        stdin: None,
        dir: None,
        envs: Vec::new(),
    }
}

/// Fluent builder for one CLI invocation
pub struct RunBuilder {
    args: Vec<String>,
    stdin: Option<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl RunBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        let mut cmd = target_pattern_cmd();
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());

        let output = cmd.output().expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(code),
            "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
            code,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Captured output of a finished invocation
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("valid JSON")
    }

    /// Assert stdout equals the expected text exactly
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected.to_string());
        self
    }

    /// Assert stdout contains the given text
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "expected stdout to contain {:?}\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains the given text
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "expected stderr to contain {:?}\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}
