#![deny(missing_docs)]

//! Storage abstraction for the Baseline Merkle tree.
//!
//! A [`StorageContext`] is a view of the database restricted to one subtree
//! prefix. The RocksDB backend hands out immediate contexts (every `put` hits
//! the database) and transactional contexts (writes become visible on
//! commit).

mod error;
#[cfg(feature = "rocksdb_storage")]
pub mod rocksdb_storage;
mod storage;

pub use crate::{
    error::Error,
    storage::{StorageContext, SubtreePrefix},
};
