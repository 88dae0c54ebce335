//! JSON output writing
//!
//! Datasets are serialized as a JSON array with 2-space indentation and
//! non-ASCII characters left verbatim, so the files stay human-diffable and
//! match what the games ship. The serialized text is written to a `.tmp`
//! sibling and renamed into place: a crash mid-write never leaves a partial
//! output file, and an aborted run leaves the previous file untouched.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::Result;

/// Serialize `records` as a pretty-printed JSON array and replace `path`.
///
/// Creates the parent directory if missing. Only called after every prior
/// pipeline stage has succeeded.
pub fn write_json_pretty<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(records)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json.as_bytes())?;
    fs::rename(&tmp, path)?;

    info!("✓ Successfully written to {}", path.display());
    Ok(())
}
