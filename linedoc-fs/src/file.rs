//! Line-delimited JSON file primitives.
//!
//! Three access patterns cover everything the store does on disk: a full read
//! that skips blank lines, an append for inserts, and an atomic full rewrite
//! for deletes and updates. The rewrite goes to a `.tmp` sibling first and is
//! renamed over the target, so the old file survives a mid-write crash.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use linedoc_core::error::StoreResult;

/// Reads every non-blank line of `path` as one JSON value.
///
/// Line order is preserved; whitespace-only lines are skipped.
pub(crate) fn read_lines<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    let content = fs::read_to_string(path)?;
    let mut items = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        items.push(serde_json::from_str(line)?);
    }
    Ok(items)
}

/// Appends one value as a single JSON line.
pub(crate) fn append_line<T: Serialize>(path: &Path, item: &T) -> StoreResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut line = serde_json::to_string(item)?;
    line.push('\n');
    file.write_all(line.as_bytes())?;
    Ok(())
}

/// Rewrites `path` to hold exactly `items`, one JSON line each, preserving
/// slice order. The write lands in a temp sibling that atomically replaces
/// the target.
pub(crate) fn write_lines<T: Serialize>(path: &Path, items: &[T]) -> StoreResult<()> {
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        for item in items {
            let mut line = serde_json::to_string(item)?;
            line.push('\n');
            file.write_all(line.as_bytes())?;
        }
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Creates an empty file, truncating any previous content.
pub(crate) fn create_empty(path: &Path) -> StoreResult<()> {
    File::create(path)?;
    Ok(())
}

/// Creates the file only when it is absent, leaving existing content alone.
pub(crate) fn ensure_exists(path: &Path) -> StoreResult<()> {
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
