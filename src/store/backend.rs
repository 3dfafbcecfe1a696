//! Persistence backends for the item collection

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{check_collection, check_item};
use crate::errors::{CaseflowError, Result};
use crate::fs;
use crate::schemas::WorkItem;

/// Whole-collection storage. Callers read, modify and write back.
pub trait ItemStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<WorkItem>>;
    fn save_all(&self, items: &[WorkItem]) -> Result<()>;
}

/// The collection as a single pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<WorkItem>> {
        let items = fs::read_items(&self.path)?;
        warn_on_inconsistencies(&items);
        Ok(items)
    }

    fn save_all(&self, items: &[WorkItem]) -> Result<()> {
        tracing::debug!(path = %self.path.display(), count = items.len(), "writing items");
        fs::write_items(&self.path, items)
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<Vec<WorkItem>>,
}

impl MemoryStore {
    pub fn new(items: Vec<WorkItem>) -> Self {
        MemoryStore {
            items: Mutex::new(items),
        }
    }
}

impl ItemStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<WorkItem>> {
        let items = self
            .items
            .lock()
            .map_err(|e| CaseflowError::wrap(e, "memory store"))?;
        Ok(items.clone())
    }

    fn save_all(&self, items: &[WorkItem]) -> Result<()> {
        let mut stored = self
            .items
            .lock()
            .map_err(|e| CaseflowError::wrap(e, "memory store"))?;
        *stored = items.to_vec();
        Ok(())
    }
}

// Hand-edited files can break the timing invariants; keep serving but say so.
fn warn_on_inconsistencies(items: &[WorkItem]) {
    for item in items {
        if let Err(e) = check_item(item) {
            tracing::warn!(item = %item.id, "inconsistent item: {}", e);
        }
    }
    if let Err(e) = check_collection(items) {
        tracing::warn!("inconsistent collection: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Status;
    use tempfile::TempDir;

    #[test]
    fn test_json_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("items.json"));
        assert!(store.load_all().unwrap().is_empty());

        let items = vec![
            WorkItem::new("W-1001", "a", 1),
            WorkItem::new("W-1002", "b", 2).with_status(Status::ChReview),
        ];
        store.save_all(&items).unwrap();
        assert_eq!(store.load_all().unwrap(), items);
    }

    #[test]
    fn test_json_store_loads_inconsistent_items() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("items.json"));
        let broken = WorkItem::new("W-1", "t", 0).with_status(Status::PickUp);
        store.save_all(&[broken.clone()]).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![broken]);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        assert!(store.load_all().unwrap().is_empty());
        store.save_all(&[WorkItem::new("W-1", "t", 0)]).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }
}
