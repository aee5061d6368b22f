use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use crate::record::BuildRecord;

/// Write a record as pretty JSON under `<name>_<timestamp>.json` in the
/// output directory, creating the directory if needed. The timestamp
/// keeps repeated imports of the same build from clobbering each other.
pub fn save_build(dir: &Path, name: &str, record: &BuildRecord) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{}_{}.json", name, timestamp));

    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;

    info!("Saved build '{}' to {}", name, path.display());
    Ok(path)
}
