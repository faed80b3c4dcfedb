#![allow(dead_code)]

use std::path::PathBuf;

pub mod sorter_behavior;

pub fn test_dir() -> PathBuf {
    test_dir_with_name("test_runs")
}

pub fn test_dir_with_name(name: &str) -> PathBuf {
    let dir = PathBuf::from(format!("./{}", name));
    std::fs::create_dir_all(&dir).expect("Failed to create test directory");
    dir
}

/// A CSV path inside the test directory that does not exist yet.
pub fn fresh_csv(name: &str) -> PathBuf {
    let path = test_dir().join(format!("{}.csv", name));
    let _ = std::fs::remove_file(&path);
    path
}
