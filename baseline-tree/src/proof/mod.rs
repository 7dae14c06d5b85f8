//! Inclusion proofs for the Baseline tree.
//!
//! A `BaselineProof` is the list of sibling hashes met on the way from a leaf
//! to the root, leaf row first. It is replayed with the same positional
//! folding used by insertion:
//!
//! ```text
//! current = leaf
//! for node in proof.nodes:          // 32 entries, rows 32 down to 1
//!     current = combine(current, node.hash)
//! current == root
//! ```

use bincode::{Decode, Encode};

use crate::{
    BaselineTreeError, Result,
    index::{LEAF_ROW, TREE_HEIGHT, index_at_row, node_index, parent_index, sibling_index_at_row},
};


/// One step of a proof: the sibling's hash and its flat node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct BaselineTreeNode {
    /// Hash stored at the sibling, `ZERO_HASH` if it was never written.
    pub hash: [u8; 32],
    /// Flat index of the sibling.
    pub node_index: u64,
}

/// Inclusion proof for a single leaf.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct BaselineProof {
    /// Leaf number the proof was generated for.
    pub leaf_index: u64,
    /// Exactly [`TREE_HEIGHT`] siblings; `nodes[0]` is on the leaf row and
    /// `nodes[31]` is a child of the root.
    pub nodes: Vec<BaselineTreeNode>,
}

impl BaselineProof {
    /// Node indices the siblings of `leaf_index` must have, leaf row first.
    pub(crate) fn expected_sibling_indices(leaf_index: u64) -> Result<Vec<u64>> {
        let mut indices = Vec::with_capacity(TREE_HEIGHT as usize);
        let mut index = leaf_index;
        for row in (1..=LEAF_ROW).rev() {
            indices.push(node_index(row, sibling_index_at_row(row, index)?)?);
            index = index_at_row(row - 1, parent_index(node_index(row, index)?)?)?;
        }
        Ok(indices)
    }

    /// Check the proof is shaped like one generated for `leaf_index`: 32
    /// nodes whose indices are exactly the sibling path of that leaf.
    pub fn validate_structure(&self) -> Result<()> {
        if self.nodes.len() != TREE_HEIGHT as usize {
            return Err(BaselineTreeError::InvalidProof(format!(
                "proof should have {} nodes, got {}",
                TREE_HEIGHT,
                self.nodes.len()
            )));
        }
        let expected = Self::expected_sibling_indices(self.leaf_index)
            .map_err(|e| BaselineTreeError::InvalidProof(e.to_string()))?;
        for (step, (node, expected_index)) in self.nodes.iter().zip(expected).enumerate() {
            if node.node_index != expected_index {
                return Err(BaselineTreeError::InvalidProof(format!(
                    "node {} of the proof for leaf {} should be at index {}, got {}",
                    step, self.leaf_index, expected_index, node.node_index
                )));
            }
        }
        Ok(())
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| BaselineTreeError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects proofs that do not have the shape of a proof for their leaf
    /// index.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 64 * 1024 }>();
        let (proof, read): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| BaselineTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(BaselineTreeError::InvalidProof(format!(
                "{} trailing bytes after proof",
                bytes.len() - read
            )));
        }
        proof.validate_structure()?;
        Ok(proof)
    }
}
