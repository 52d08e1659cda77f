use anyhow::{bail, Result};
use std::path::Path;

/// Check that the compiler is reachable and the example inputs exist in the
/// working directory. Purely informational; does not modify anything.
pub fn run() -> Result<()> {
    let mut ok = true;

    if which::which(crate::toolchain::COMPILER).is_err() {
        eprintln!("[FAIL] missing `cl` in PATH (run from a vcvars64 environment)");
        ok = false;
    } else {
        eprintln!("[OK] cl");
    }

    for file in ["main.cpp", "config.h"] {
        if Path::new(file).is_file() {
            eprintln!("[OK] {file}");
        } else {
            eprintln!("[FAIL] missing file: {file}");
            ok = false;
        }
    }

    for dir in ["imgui", "imgui/backends", "../../src"] {
        if Path::new(dir).is_dir() {
            eprintln!("[OK] {dir}");
        } else {
            eprintln!("[FAIL] missing directory: {dir}");
            ok = false;
        }
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
