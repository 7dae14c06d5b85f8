//! Proof verification for the Baseline tree.
//!
//! Pure functions, no storage required. The root is recomputed by folding
//! `combine(current, sibling)` in insertion order, so a proof only verifies
//! when every node on its path was last written by the proved leaf's own
//! insertion, or when the hasher is commutative.

use crate::{BaselineTreeError, MerkleHasher, Result, proof::BaselineProof};

impl BaselineProof {
    /// Root obtained by replaying the proof from `leaf`.
    ///
    /// Does not check the proof's structure; see [`BaselineProof::verify`].
    pub fn compute_root<H: MerkleHasher>(&self, leaf: &[u8; 32], hasher: &H) -> [u8; 32] {
        self.nodes
            .iter()
            .fold(*leaf, |current, node| hasher.combine(&current, &node.hash))
    }

    /// Verify that `leaf` is included under `expected_root`.
    pub fn verify<H: MerkleHasher>(
        &self,
        leaf: &[u8; 32],
        expected_root: &[u8; 32],
        hasher: &H,
    ) -> Result<()> {
        self.validate_structure()?;
        let computed_root = self.compute_root(leaf, hasher);
        if &computed_root != expected_root {
            return Err(BaselineTreeError::InvalidProof(format!(
                "root hash mismatch: expected {}, got {}",
                hex::encode(expected_root),
                hex::encode(computed_root)
            )));
        }
        Ok(())
    }
}
