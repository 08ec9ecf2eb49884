use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Returns the root directory of the workspace.
///
/// # Result
/// Returns the workspace root path as `PathBuf`.
///
/// # Errors
/// Returns an error if the manifest directory does not have a parent.
pub fn get_project_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .context("Could not find the workspace root from the snapshot manifest")
}

#[test]
fn project_root_is_the_manifest_parent() {
    let root = get_project_root().unwrap();
    assert!(root.join("snapshot").join("Cargo.toml").exists());
}
