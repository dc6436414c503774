//! Shared fixture helpers for the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Writes `contents` to a `config.json` inside a fresh temp directory.
///
/// The directory handle must outlive the test's use of the file; dropping
/// it deletes the file.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, contents).expect("failed to write fixture");
    (dir, path)
}
