//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating scratch directories with Markdown inputs and
//! templates, and for running the mdp binary against them.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Creates temporary directory for test inputs and outputs.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn scratch_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes file into directory, creating parent directories as needed.
///
/// # Returns
///
/// Full path of written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

/// Runs the mdp binary with given arguments.
///
/// Uses `RUST_LOG=off` so stderr only carries error reports.
///
/// # Errors
///
/// Returns error if the process cannot be spawned
pub fn run_mdp(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_mdp"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()?;
    Ok(output)
}
