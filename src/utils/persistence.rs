use std::{fs, path::Path};

use tracing::info;

use crate::{core::utils::ensure_dir, domain::DomainEntry, errors::Result};

/// Writes an entry snapshot to disk atomically by staging to a temporary file.
pub fn save_entries_to_path(entries: &[DomainEntry], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    info!(path = %path.display(), count = entries.len(), "saved entry snapshot");
    Ok(())
}

/// Loads an entry snapshot from disk, returning structured errors on failure.
pub fn load_entries_from_path(path: &Path) -> Result<Vec<DomainEntry>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
