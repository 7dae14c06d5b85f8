//! Implementation for a storage abstraction over RocksDB.
use std::path::Path;

use rocksdb::{OptimisticTransactionDB, Transaction};
use tracing::debug;

use super::{PrefixedRocksDbStorageContext, PrefixedRocksDbTransactionContext};
use crate::{Error, SubtreePrefix};

/// Optimistic transaction over the storage database.
pub type Tx<'db> = Transaction<'db, OptimisticTransactionDB>;

/// RocksDB options
pub fn default_db_opts() -> rocksdb::Options {
    let mut opts = rocksdb::Options::default();
    opts.create_if_missing(true);
    opts.increase_parallelism(num_cpus::get() as i32);
    opts.set_allow_mmap_writes(true);
    opts.set_allow_mmap_reads(true);
    opts.set_atomic_flush(true);
    opts
}

/// Storage which uses RocksDB as its backend.
pub struct RocksDbStorage {
    db: OptimisticTransactionDB,
}

impl RocksDbStorage {
    /// Open (or create) a database at `path` with [`default_db_opts`].
    pub fn default_rocksdb_with_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let db = OptimisticTransactionDB::open(&default_db_opts(), &path)?;
        debug!(path = %path.as_ref().display(), "opened rocksdb storage");
        Ok(RocksDbStorage { db })
    }

    /// Make a context for the subtree at `path` that writes straight to the
    /// database.
    pub fn get_prefixed_context_from_path<'p, P>(&self, path: P) -> PrefixedRocksDbStorageContext<'_>
    where
        P: IntoIterator<Item = &'p [u8]>,
    {
        let prefix = Self::build_prefix(path);
        PrefixedRocksDbStorageContext::new(&self.db, prefix)
    }

    /// Make a context for the subtree at `path` whose reads and writes go
    /// through `transaction`.
    pub fn get_prefixed_transactional_context_from_path<'a, 'p, P>(
        &'a self,
        path: P,
        transaction: &'a Tx<'a>,
    ) -> PrefixedRocksDbTransactionContext<'a>
    where
        P: IntoIterator<Item = &'p [u8]>,
    {
        let prefix = Self::build_prefix(path);
        PrefixedRocksDbTransactionContext::new(transaction, prefix)
    }

    /// A helper method to build a prefix to rocksdb keys or identify a subtree
    /// by its path.
    pub fn build_prefix<'a, P>(path: P) -> SubtreePrefix
    where
        P: IntoIterator<Item = &'a [u8]>,
    {
        let mut segments_count: usize = 0;
        let mut res = Vec::new();
        let mut lengths = Vec::new();

        for s in path {
            segments_count += 1;
            res.extend_from_slice(s);
            lengths.extend(s.len().to_ne_bytes());
        }

        res.extend(segments_count.to_ne_bytes());
        res.extend(lengths);
        *blake3::hash(&res).as_bytes()
    }

    /// Starts a new transaction
    pub fn start_transaction(&self) -> Tx<'_> {
        self.db.transaction()
    }

    /// Consumes and commits a transaction
    pub fn commit_transaction(&self, transaction: Tx<'_>) -> Result<(), Error> {
        Ok(transaction.commit()?)
    }

    /// Rollback a transaction
    pub fn rollback_transaction(&self, transaction: &Tx<'_>) -> Result<(), Error> {
        Ok(transaction.rollback()?)
    }

    /// Forces data to be written
    pub fn flush(&self) -> Result<(), Error> {
        Ok(self.db.flush()?)
    }
}
