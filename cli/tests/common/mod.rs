//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a temporary data directory that is removed on drop.

#![allow(dead_code)]

use clap::Parser;
use fitdash_cli::{
    commands::{self, Cli},
    config::AppConfig,
    error::CliResult,
    state::AppState,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test application wrapper
pub struct TestApp {
    pub dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Parse `args` like the binary would and run the command
    pub fn run(&self, args: &[&str]) -> CliResult<String> {
        let cli = Cli::try_parse_from(std::iter::once("fitdash").chain(args.iter().copied()))
            .expect("Failed to parse arguments");

        let mut config = AppConfig::default();
        config.storage.data_dir = self.dir.path().to_path_buf();
        config.output.json = cli.json;

        let state = AppState::new(config);
        commands::execute(&state, &cli.command)
    }

    /// Run with --json and parse the output
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut args = args.to_vec();
        args.push("--json");
        let out = self.run(&args).expect("Command failed");
        serde_json::from_str(&out).expect("Output is not JSON")
    }

    /// Write a file into the data directory and return its path
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Store the 70 kg / 170 cm / 30 y male, moderate, weight loss profile
    pub fn set_reference_profile(&self) {
        self.run(&[
            "profile", "set", "--weight", "70", "--height", "170", "--age", "30", "--gender", "male",
            "--activity", "moderate", "--goal", "weight_loss",
        ])
        .expect("Failed to set profile");
    }
}
