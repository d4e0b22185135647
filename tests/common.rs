#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rct() -> Command {
    cargo_bin_cmd!("rcaltrack")
}

/// Create a unique test calendar path inside the system temp dir and remove
/// any existing file
pub fn setup_test_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcaltrack.json", name));
    let file_path = path.to_string_lossy().to_string();
    fs::remove_file(&file_path).ok();
    file_path
}

/// Populate a calendar with a small dataset useful for many tests:
/// two events on 2025-01-09 and one on 2025-01-10 (same ISO week 2025-W02,
/// same month 2025-01)
pub fn init_file_with_data(file_path: &str) {
    rct()
        .args([
            "--file",
            file_path,
            "add",
            "2025-01-09",
            "Quiz prep",
            "--time",
            "18:00",
            "--priority",
            "1",
            "--category",
            "study",
        ])
        .assert()
        .success();

    rct()
        .args([
            "--file",
            file_path,
            "add",
            "2025-01-09",
            "Gym",
            "--time",
            "20:00",
            "--priority",
            "3",
            "--category",
            "exercise",
        ])
        .assert()
        .success();

    rct()
        .args([
            "--file",
            file_path,
            "add",
            "2025-01-10",
            "Standup",
            "--time",
            "09:30",
            "--category",
            "work",
        ])
        .assert()
        .success();
}
