//! Implementation of prefixed storage context.
mod context_no_tx;
mod context_tx;

pub use context_no_tx::PrefixedRocksDbStorageContext;
pub use context_tx::PrefixedRocksDbTransactionContext;

use crate::SubtreePrefix;

/// Concatenate a subtree prefix with a relative key.
pub fn make_prefixed_key<K: AsRef<[u8]>>(prefix: &SubtreePrefix, key: K) -> Vec<u8> {
    let key = key.as_ref();
    let mut prefixed_key = Vec::with_capacity(prefix.len() + key.len());
    prefixed_key.extend_from_slice(prefix);
    prefixed_key.extend_from_slice(key);
    prefixed_key
}
