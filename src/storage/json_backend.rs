use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    core::utils::{canonical_name, ensure_dir, PathResolver},
    domain::DomainEntry,
    errors::{FinanceError, Result},
    utils::persistence,
};

use super::EntryStore;

const SNAPSHOT_EXTENSION: &str = "json";

/// Stores each named snapshot as `<root>/snapshots/<name>.json`.
#[derive(Debug, Clone)]
pub struct JsonEntryStore {
    root: PathBuf,
    snapshots_dir: PathBuf,
}

impl JsonEntryStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        let snapshots_dir = PathResolver::snapshot_dir_in(&root);
        ensure_dir(&snapshots_dir)?;
        Ok(Self {
            root,
            snapshots_dir,
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn snapshot_path(&self, name: &str) -> Result<PathBuf> {
        let canonical = canonical_name(name);
        if canonical.is_empty() {
            return Err(FinanceError::InvalidInput(format!(
                "snapshot name `{name}` has no usable characters"
            )));
        }
        Ok(self
            .snapshots_dir
            .join(format!("{canonical}.{SNAPSHOT_EXTENSION}")))
    }
}

impl EntryStore for JsonEntryStore {
    fn save(&self, name: &str, entries: &[DomainEntry]) -> Result<()> {
        let path = self.snapshot_path(name)?;
        persistence::save_entries_to_path(entries, &path)?;
        info!(snapshot = %name, count = entries.len(), "stored entry snapshot");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Vec<DomainEntry>> {
        let path = self.snapshot_path(name)?;
        if !path.exists() {
            return Err(FinanceError::NotFound(format!("snapshot `{name}`")));
        }
        let entries = persistence::load_entries_from_path(&path)?;
        debug!(snapshot = %name, count = entries.len(), "loaded entry snapshot");
        Ok(entries)
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.snapshots_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.snapshots_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn remove(&self, name: &str) -> Result<()> {
        let path = self.snapshot_path(name)?;
        if !path.exists() {
            return Err(FinanceError::NotFound(format!("snapshot `{name}`")));
        }
        fs::remove_file(path)?;
        info!(snapshot = %name, "removed entry snapshot");
        Ok(())
    }
}
