//! Baseline Merkle tree: an append-only accumulator of fixed height 32.
//!
//! Leaves are 32-byte values appended in order. Each insertion writes the
//! leaf and the 32 hashes on its path to the root into a key-value store,
//! so both the root and any leaf's sibling path are single-pass reads.
//!
//! There is one empty value for every row ([`ZERO_HASH`]) rather than a
//! per-row empty subtree hash, and parents are hashed positionally as
//! `combine(carried_node, sibling)`. Roots produced this way are only
//! comparable with trees using the exact same rule.
//!
//! # Core types
//!
//! - [`BaselineTree`]: insert, root, proofs, leaf count.
//! - [`BaselineProof`]: sibling path (verify, compute root, bincode).
//! - [`MerkleHasher`]: combine strategy ([`Blake3Hasher`], [`Sha256Hasher`]).
//!
//! # Store traits
//!
//! - [`BaselineTreeStore`]: raw `get`/`set` on byte keys.
//! - [`MemStore`]: in-memory store (requires `mem_store` feature).
//! - [`BaselineTreeStorageContext`]: `baseline_storage::StorageContext`
//!   adapter (requires `storage` feature).

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
pub mod index;
/// In-memory store (requires `mem_store` feature).
#[cfg(any(test, feature = "mem_store"))]
pub mod mem_store;
pub(crate) mod proof;
mod store;
#[cfg(feature = "storage")]
mod storage_adapter;
pub(crate) mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{BaselineTreeError, Result};
pub use hash::{Blake3Hasher, MerkleHasher, Sha256Hasher, ZERO_HASH};
#[cfg(any(test, feature = "mem_store"))]
pub use mem_store::MemStore;
pub use proof::{BaselineProof, BaselineTreeNode};
#[cfg(feature = "storage")]
pub use storage_adapter::BaselineTreeStorageContext;
pub use store::{BaselineTreeStore, COUNT_KEY, leaf_key, node_key};
pub use tree::{BaselineTree, InsertOutcome};
