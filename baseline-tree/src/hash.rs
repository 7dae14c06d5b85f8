use sha2::{Digest, Sha256};

use crate::{BaselineTreeError, Result};

/// Value of every node that has never been written, on every row.
pub const ZERO_HASH: [u8; 32] = [0u8; 32];

/// Two-input combine function used to fold hashes towards the root.
///
/// Must be deterministic and stay the same for the lifetime of a store:
/// changing it invalidates every node hash already persisted.
pub trait MerkleHasher {
    /// Hash the node being carried up (`a`) together with its sibling (`b`).
    fn combine(&self, a: &[u8; 32], b: &[u8; 32]) -> [u8; 32];
}

impl<F> MerkleHasher for F
where
    F: Fn(&[u8; 32], &[u8; 32]) -> [u8; 32],
{
    fn combine(&self, a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        self(a, b)
    }
}

/// `blake3(a || b)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl MerkleHasher for Blake3Hasher {
    fn combine(&self, a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(a);
        hasher.update(b);
        *hasher.finalize().as_bytes()
    }
}

/// `sha256(a || b)` with the leading `truncation_length` bytes of the digest
/// zeroed.
///
/// Truncation lets the resulting hashes fit in fewer than 32 bytes, e.g. in a
/// prime field element when the tree feeds a proving system.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher {
    truncation_length: usize,
}

impl Sha256Hasher {
    /// Plain SHA-256 without truncation.
    pub fn new() -> Self {
        Self::default()
    }

    /// SHA-256 with the first `truncation_length` bytes cleared.
    pub fn with_truncation(truncation_length: usize) -> Result<Self> {
        if truncation_length > 32 {
            return Err(BaselineTreeError::InvalidInput(format!(
                "truncation length must be at most 32, got {}",
                truncation_length
            )));
        }
        Ok(Self { truncation_length })
    }

    /// Number of leading digest bytes that are zeroed.
    pub fn truncation_length(&self) -> usize {
        self.truncation_length
    }
}

impl MerkleHasher for Sha256Hasher {
    fn combine(&self, a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(a);
        hasher.update(b);
        let mut hash: [u8; 32] = hasher.finalize().into();
        hash[..self.truncation_length].fill(0);
        hash
    }
}

/// Decode a persisted 32-byte value, rejecting anything of another length.
pub(crate) fn hash_from_bytes(bytes: &[u8], what: &str) -> Result<[u8; 32]> {
    bytes.try_into().map_err(|_| {
        BaselineTreeError::CorruptedData(format!(
            "{} should be 32 bytes, got {}",
            what,
            bytes.len()
        ))
    })
}
