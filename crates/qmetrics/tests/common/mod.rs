//! Shared test utilities for qmetrics integration tests.
//!
//! Every test gets its own copy of `tests/data` so runs never touch the
//! checked-in fixtures and can be compared byte for byte.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            std::fs::copy(&from, &to)?;
        }
    }
    Ok(())
}

/// A fresh repository root holding `metrics/raw/pmd.xml` and
/// `metrics/raw/ck_class.csv`.
pub fn fixture() -> TempDir {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data");
    let dir = tempfile::tempdir().expect("create temp dir");
    copy_dir_recursive(&src, dir.path()).expect("copy fixture");
    dir
}

/// `qmetrics --root <root>` with logging left at its default.
pub fn qmetrics(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qmetrics"));
    cmd.env_remove("QMETRICS_LOG");
    cmd.arg("--root").arg(root);
    cmd
}

pub fn processed(root: &Path, file: &str) -> PathBuf {
    root.join("metrics").join("processed").join(file)
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

pub const ARTIFACTS: [&str; 5] = [
    "cc-by-method.csv",
    "cc-by-class.csv",
    "cc-summary.txt",
    "p8-class-metrics.csv",
    "p8-summary.txt",
];
