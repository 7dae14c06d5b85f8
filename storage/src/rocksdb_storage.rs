//! Storage layer implemented over RocksDB backend.
mod storage;
mod storage_context;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use storage_context::{PrefixedRocksDbStorageContext, PrefixedRocksDbTransactionContext};

pub use self::storage::{RocksDbStorage, Tx, default_db_opts};
