//! Storage context implementation with a transaction.

use super::make_prefixed_key;
use crate::{Error, StorageContext, SubtreePrefix, rocksdb_storage::Tx};

/// Transactional storage context with a prefix applied to be used in a
/// subtree. Writes become visible to other contexts once the transaction is
/// committed; reads through this context see its own pending writes.
pub struct PrefixedRocksDbTransactionContext<'db> {
    transaction: &'db Tx<'db>,
    prefix: SubtreePrefix,
}

impl<'db> PrefixedRocksDbTransactionContext<'db> {
    /// Create a new prefixed transaction context instance
    pub fn new(transaction: &'db Tx<'db>, prefix: SubtreePrefix) -> Self {
        PrefixedRocksDbTransactionContext {
            transaction,
            prefix,
        }
    }
}

impl<'db> StorageContext<'db> for PrefixedRocksDbTransactionContext<'db> {
    fn put<K: AsRef<[u8]>>(&self, key: K, value: &[u8]) -> Result<(), Error> {
        Ok(self
            .transaction
            .put(make_prefixed_key(&self.prefix, key), value)?)
    }

    fn get<K: AsRef<[u8]>>(&self, key: K) -> Result<Option<Vec<u8>>, Error> {
        Ok(self
            .transaction
            .get(make_prefixed_key(&self.prefix, key))?)
    }
}
