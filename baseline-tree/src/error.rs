use thiserror::Error;

/// Errors from Baseline tree operations.
#[derive(Debug, Error)]
pub enum BaselineTreeError {
    /// A row, index-at-row, node index or leaf index outside the tree.
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
    /// The root has no sibling.
    #[error("root node has no siblings")]
    NoSiblingForRoot,
    /// The root has no parent.
    #[error("root node has no parent")]
    NoParentForRoot,
    /// Every leaf slot is taken.
    #[error("tree is full (capacity {capacity})")]
    Capacity {
        /// Number of leaves the tree can hold.
        capacity: u64,
    },
    /// Failure reported by the backing store, passed through unchanged.
    #[error("store error: {0}")]
    Storage(String),
    /// A persisted value that cannot be decoded.
    #[error("corrupted data: {0}")]
    CorruptedData(String),
    /// Malformed proof, or a proof that does not reproduce the root.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
    /// Rejected argument, such as a truncation length above 32.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Alias for `core::result::Result<T, BaselineTreeError>`.
pub type Result<T> = core::result::Result<T, BaselineTreeError>;
