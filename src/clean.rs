//! Post-build cleanup of compiler intermediates.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Filename marker for compiler-generated intermediates.
const INTERMEDIATE_MARKER: &str = ".obj";

/// True when a directory-entry name identifies a compiler intermediate.
pub fn is_intermediate(name: &str) -> bool {
    name.contains(INTERMEDIATE_MARKER)
}

/// Deletes every intermediate file in `dir`, returning the deleted paths.
///
/// The directory is listed at call time, so objects written by a build step
/// that just finished are visible to the sweep.
pub fn remove_intermediates(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !is_intermediate(name) || !entry.file_type()?.is_file() {
            continue;
        }
        std::fs::remove_file(entry.path())
            .with_context(|| format!("Failed to remove {}", entry.path().display()))?;
        removed.push(entry.path());
    }

    removed.sort();
    Ok(removed)
}

pub fn clean(dir: &Path) -> Result<()> {
    println!("🧹 Cleaning...");
    let removed = remove_intermediates(dir)?;
    println!("Removed {} intermediate file(s)", removed.len());
    Ok(())
}
