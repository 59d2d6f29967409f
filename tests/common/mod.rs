//! Common test utilities and fixtures for shtags integration tests
//!
//! This module provides:
//! - `TestRepo` builder for creating script trees in a temp directory
//! - Helpers for running the `shtags` binary and reading tag names back

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A throwaway directory of scripts
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write `content` to `rel`, creating parent directories
    pub fn file(self, rel: &str, content: &str) -> Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write fixture");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Run the binary with the repo as working directory
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_shtags"))
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("SHTAGS_CONFIG")
            .output()
            .expect("run shtags")
    }
}

/// Tag lines of ctags output, pseudo-tags removed
pub fn tag_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| !l.starts_with("!_TAG_"))
        .map(str::to_string)
        .collect()
}

/// First column of each tag line
pub fn tag_names(stdout: &[u8]) -> Vec<String> {
    tag_lines(stdout)
        .iter()
        .filter_map(|l| l.split('\t').next().map(str::to_string))
        .collect()
}
