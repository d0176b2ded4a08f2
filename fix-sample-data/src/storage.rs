//! Fixture Storage
//!
//! Loads and persists the sample-data JSON document. Output matches the
//! shape the client app ships with: 2-space indent, non-ASCII unescaped.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::core::error::Result;
use crate::models::SampleData;

/// Read and parse the fixture file (UTF-8).
pub fn load(path: &Path) -> Result<SampleData> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write the document back, pretty-printed.
///
/// Serializes to a temp file in the destination directory and renames it
/// over the original, so a crash mid-write cannot truncate the fixture.
pub fn save(path: &Path, data: &SampleData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path)?;

    Ok(())
}
