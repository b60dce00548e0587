//! Shared, in-memory dataset store.
//!
//! Datasets are held behind `Arc` so readers take cheap snapshots: a run that
//! resolved its inputs keeps reading the same data even if the store is
//! reloaded meanwhile.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use colmatch_model::Dataset;

use crate::error::{IngestError, Result};

type Entries = BTreeMap<String, Arc<Dataset>>;

/// Name-addressed collection of loaded datasets.
#[derive(Debug, Default)]
pub struct DatasetStore {
    entries: RwLock<Entries>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `datasets`.
    pub fn from_datasets(datasets: impl IntoIterator<Item = Dataset>) -> Self {
        let store = Self::new();
        store.replace_all(datasets);
        store
    }

    // Entries are immutable values; a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds or replaces one dataset, returning the previous one with that name.
    pub fn insert(&self, dataset: Dataset) -> Option<Arc<Dataset>> {
        let name = dataset.name.to_string();
        self.write().insert(name, Arc::new(dataset))
    }

    /// Clears the store and loads `datasets` in one write.
    pub fn replace_all(&self, datasets: impl IntoIterator<Item = Dataset>) {
        let fresh: Entries = datasets
            .into_iter()
            .map(|dataset| (dataset.name.to_string(), Arc::new(dataset)))
            .collect();
        let count = fresh.len();
        *self.write() = fresh;
        debug!(dataset_count = count, "dataset store replaced");
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    /// Snapshot of one dataset.
    pub fn get(&self, name: &str) -> Result<Arc<Dataset>> {
        self.read()
            .get(name)
            .cloned()
            .ok_or_else(|| IngestError::DatasetNotFound {
                name: name.to_string(),
            })
    }

    /// Snapshots of two datasets taken under a single read lock.
    pub fn pair(&self, left: &str, right: &str) -> Result<(Arc<Dataset>, Arc<Dataset>)> {
        let entries = self.read();
        let lookup = |name: &str| {
            entries
                .get(name)
                .cloned()
                .ok_or_else(|| IngestError::DatasetNotFound {
                    name: name.to_string(),
                })
        };
        Ok((lookup(left)?, lookup(right)?))
    }

    /// Dataset names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Snapshots of every dataset, sorted by name.
    pub fn datasets(&self) -> Vec<Arc<Dataset>> {
        self.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
