//! Test utilities: leaf helpers, a commutative hasher and a failing store.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{BaselineTreeError, BaselineTreeStore, MemStore, Result};

/// Deterministic 32-byte leaf derived from an integer.
pub(crate) fn leaf_from_u64(i: u64) -> [u8; 32] {
    *blake3::hash(&i.to_le_bytes()).as_bytes()
}

/// `blake3(min(a, b) || max(a, b))`: order-independent, so proofs of every
/// inserted leaf verify regardless of insertion order.
pub(crate) fn sorted_pair_hash(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = blake3::Hasher::new();
    hasher.update(lo);
    hasher.update(hi);
    *hasher.finalize().as_bytes()
}

/// Store whose writes, reads or both start failing once a budget of
/// successful operations has been used up.
pub(crate) struct FailingStore {
    pub inner: MemStore,
    writes_left: AtomicUsize,
    reads_left: AtomicUsize,
}

impl FailingStore {
    /// Fail every write after the first `writes_before_failure`.
    pub fn new(inner: MemStore, writes_before_failure: usize) -> Self {
        Self {
            inner,
            writes_left: AtomicUsize::new(writes_before_failure),
            reads_left: AtomicUsize::new(usize::MAX),
        }
    }

    /// Fail every read after the first `reads_before_failure`.
    pub fn with_failing_reads(inner: MemStore, reads_before_failure: usize) -> Self {
        Self {
            inner,
            writes_left: AtomicUsize::new(usize::MAX),
            reads_left: AtomicUsize::new(reads_before_failure),
        }
    }

    pub fn heal(&self) {
        self.writes_left.store(usize::MAX, Ordering::SeqCst);
        self.reads_left.store(usize::MAX, Ordering::SeqCst);
    }
}

fn take_one(budget: &AtomicUsize, what: &str) -> Result<()> {
    budget
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .map(|_| ())
        .map_err(|_| BaselineTreeError::Storage(format!("disk unavailable ({})", what)))
}

impl BaselineTreeStore for FailingStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        take_one(&self.reads_left, "read")?;
        self.inner.get(key)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        take_one(&self.writes_left, "write")?;
        self.inner.set(key, value)
    }
}
