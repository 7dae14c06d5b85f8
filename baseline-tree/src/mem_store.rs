use std::{collections::BTreeMap, sync::Arc};

use parking_lot::RwLock;

use crate::{BaselineTreeStore, Result};

/// In-memory store backed by a `BTreeMap`.
///
/// Useful for tests and ephemeral trees. Clones share the same map, so a
/// second tree opened over a clone sees everything the first one wrote.
#[derive(Clone, Default)]
pub struct MemStore(Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>);

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}

impl BaselineTreeStore for MemStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.0.read().get(key).cloned())
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.0.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
