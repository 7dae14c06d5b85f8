//! Storage adapter bridging `baseline_storage::StorageContext` to
//! `BaselineTreeStore`.

use baseline_storage::StorageContext;

use crate::{BaselineTreeError, BaselineTreeStore, Result};

/// Storage adapter wrapping a `StorageContext` for a Baseline tree.
///
/// All three key domains (node hashes, raw leaves, the count) live in the
/// context's data storage. Writes are applied however the context applies
/// them: immediately, or on commit for a transactional context.
pub struct BaselineTreeStorageContext<'a, C> {
    ctx: &'a C,
}

impl<'a, C> BaselineTreeStorageContext<'a, C> {
    /// Create a new storage context adapter.
    pub fn new(ctx: &'a C) -> Self {
        Self { ctx }
    }
}

impl<'db, C: StorageContext<'db>> BaselineTreeStore for BaselineTreeStorageContext<'_, C> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        self.ctx
            .get(key)
            .map_err(|e| BaselineTreeError::Storage(e.to_string()))
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.ctx
            .put(key, value)
            .map_err(|e| BaselineTreeError::Storage(e.to_string()))
    }
}
