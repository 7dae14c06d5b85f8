use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::{
    BaselineTreeError, BaselineTreeStore, MerkleHasher, Result,
    hash::{ZERO_HASH, hash_from_bytes},
    index::{
        LEAF_CAPACITY, LEAF_ROW, index_at_row, node_index, parent_index,
        sibling_index_at_row, validate_index_at_row, validate_node_index,
    },
    proof::{BaselineProof, BaselineTreeNode},
    store::{COUNT_KEY, decode_count, encode_count, leaf_key, node_key},
};

/// Result of a successful [`BaselineTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Leaf number assigned to the inserted value.
    pub leaf_index: u64,
    /// Root hash after the insertion.
    pub root: [u8; 32],
}

/// An append-only Merkle accumulator of height 32 persisted in a key-value
/// store.
///
/// Every node hash lives in the store under its flat node index (see
/// [`crate::index`]); nodes never written read as [`ZERO_HASH`]. Inserting a
/// leaf rewrites the 32 hashes on its path to the root, folding
/// `combine(current, sibling)` with the node being carried up always first.
///
/// Insertions are serialized by a lock owned by the tree. Reads take no lock
/// and may observe a partially updated path while an insertion is running.
pub struct BaselineTree<S, H> {
    store: S,
    hasher: H,
    count: AtomicU64,
    insert_lock: Mutex<()>,
}

impl<S: BaselineTreeStore, H: MerkleHasher> BaselineTree<S, H> {
    /// Open the tree persisted in `store`, or an empty one if the store holds
    /// no leaf count yet.
    pub fn open(store: S, hasher: H) -> Result<Self> {
        let count = match store.get(&COUNT_KEY)? {
            Some(bytes) => decode_count(&bytes)?,
            None => 0,
        };
        if count > LEAF_CAPACITY {
            return Err(BaselineTreeError::CorruptedData(format!(
                "stored leaf count {} exceeds capacity {}",
                count, LEAF_CAPACITY
            )));
        }
        debug!(count, "opened baseline tree");
        Ok(Self {
            store,
            hasher,
            count: AtomicU64::new(count),
            insert_lock: Mutex::new(()),
        })
    }

    /// Number of leaves inserted so far.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Acquire)
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The hash strategy this tree was opened with.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    fn load_hash(&self, node_index: u64) -> Result<[u8; 32]> {
        match self.store.get(&node_key(node_index))? {
            Some(bytes) => hash_from_bytes(&bytes, "node hash"),
            None => Ok(ZERO_HASH),
        }
    }

    fn load_hash_at(&self, row: u8, index_at_row: u64) -> Result<[u8; 32]> {
        self.load_hash(node_index(row, index_at_row)?)
    }

    fn save_hash(&self, node_index: u64, hash: &[u8; 32]) -> Result<()> {
        self.store.set(&node_key(node_index), hash)
    }

    /// Hash stored at `node_index`, or [`ZERO_HASH`] if it was never written.
    pub fn node_hash(&self, node_index: u64) -> Result<[u8; 32]> {
        validate_node_index(node_index)?;
        self.load_hash(node_index)
    }

    /// Current root hash ([`ZERO_HASH`] for an empty tree).
    pub fn root(&self) -> Result<[u8; 32]> {
        self.load_hash(0)
    }

    /// Raw value inserted as leaf `leaf_index`, if any.
    pub fn leaf(&self, leaf_index: u64) -> Result<Option<[u8; 32]>> {
        validate_index_at_row(LEAF_ROW, leaf_index)?;
        self.store
            .get(&leaf_key(leaf_index))?
            .map(|bytes| hash_from_bytes(&bytes, "leaf value"))
            .transpose()
    }

    /// Append `leaf` and update every hash on its path to the root.
    ///
    /// Fails with [`BaselineTreeError::Capacity`] once `2^32` leaves are
    /// stored. A store failure aborts the call and leaves earlier writes of
    /// the same insertion in place; the count is only advanced when the
    /// whole path has been written.
    pub fn insert(&self, leaf: &[u8; 32]) -> Result<InsertOutcome> {
        let _guard = self.insert_lock.lock();
        let result = self.insert_locked(leaf);
        if let Err(e) = &result {
            warn!(error = %e, "baseline tree insertion aborted");
        }
        result
    }

    fn insert_locked(&self, leaf: &[u8; 32]) -> Result<InsertOutcome> {
        let leaf_index = self.count.load(Ordering::Acquire);
        if leaf_index >= LEAF_CAPACITY {
            return Err(BaselineTreeError::Capacity {
                capacity: LEAF_CAPACITY,
            });
        }
        trace!(leaf_index, "inserting leaf");

        self.store.set(&leaf_key(leaf_index), leaf)?;

        let mut index = leaf_index;
        let mut hash = *leaf;
        let mut sibling_hash =
            self.load_hash_at(LEAF_ROW, sibling_index_at_row(LEAF_ROW, index)?)?;
        self.save_hash(node_index(LEAF_ROW, index)?, &hash)?;

        for row in (1..=LEAF_ROW).rev() {
            let parent = parent_index(node_index(row, index)?)?;
            let parent_hash = self.hasher.combine(&hash, &sibling_hash);
            self.save_hash(parent, &parent_hash)?;

            index = index_at_row(row - 1, parent)?;
            hash = parent_hash;
            if row != 1 {
                sibling_hash = self.load_hash_at(row - 1, sibling_index_at_row(row - 1, index)?)?;
            }
        }

        let count = leaf_index + 1;
        self.store.set(&COUNT_KEY, &encode_count(count))?;
        self.count.store(count, Ordering::Release);
        debug!(leaf_index, root = %hex::encode(hash), "inserted leaf");

        Ok(InsertOutcome {
            leaf_index,
            root: hash,
        })
    }

    /// Sibling path of leaf `leaf_index`, from the leaf row up to the row
    /// just below the root.
    ///
    /// Pure read of the current store contents; the leaf does not need to
    /// have been inserted, in which case the path is made of whatever the
    /// neighbouring insertions wrote (or [`ZERO_HASH`]).
    pub fn get_proof(&self, leaf_index: u64) -> Result<BaselineProof> {
        validate_index_at_row(LEAF_ROW, leaf_index)?;

        let nodes = BaselineProof::expected_sibling_indices(leaf_index)?
            .into_iter()
            .map(|sibling_node_index| {
                Ok(BaselineTreeNode {
                    hash: self.load_hash(sibling_node_index)?,
                    node_index: sibling_node_index,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        trace!(leaf_index, "generated proof");

        Ok(BaselineProof { leaf_index, nodes })
    }
}
