//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Default file name for saved combined notes.
pub const NOTES_FILE_NAME: &str = "release-notes.md";

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file lives next to the target so the rename stays on one
/// filesystem; an interrupted write never leaves a truncated file behind.
pub fn atomic_write(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;

    fs::rename(&temp_path, path).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
