pub mod json_backend;

use crate::{domain::DomainEntry, errors::Result};

/// Abstraction over places entry snapshots can be kept between runs.
pub trait EntryStore: Send + Sync {
    fn save(&self, name: &str, entries: &[DomainEntry]) -> Result<()>;
    fn load(&self, name: &str) -> Result<Vec<DomainEntry>>;
    fn list(&self) -> Result<Vec<String>>;
    fn remove(&self, name: &str) -> Result<()>;
}

pub use json_backend::JsonEntryStore;
