//! Position arithmetic for a complete binary tree of height 32 stored as a
//! flat address space.
//!
//! Rows are numbered from the root (row 0) down to the leaves (row 32). The
//! node at `index_at_row` within `row` lives at
//! `node_index = 2^row - 1 + index_at_row`, so row `r` occupies the addresses
//! `[2^r - 1, 2^(r+1) - 2]` and the whole tree `[0, 2^33 - 2]`.
//!
//! ```text
//!            0                row 0
//!        /       \
//!       1         2           row 1
//!     /   \     /   \
//!    3     4   5     6        row 2
//! ```
//!
//! Every function validates its inputs before computing anything and never
//! clamps or wraps.

use crate::{BaselineTreeError, Result};

/// Number of rows below the root.
pub const TREE_HEIGHT: u8 = 32;

/// Row holding the leaves.
pub const LEAF_ROW: u8 = TREE_HEIGHT;

/// Total number of node slots, `2^33 - 1`.
pub const MAX_NODES: u64 = (1 << (TREE_HEIGHT as u64 + 1)) - 1;

/// Largest valid node index, `2^33 - 2`.
pub const MAX_NODE_INDEX: u64 = MAX_NODES - 1;

/// Node index of leaf number 0, `2^32 - 1`.
pub const FIRST_LEAF_NODE_INDEX: u64 = MAX_NODES / 2;

/// Number of leaf slots, `2^32`.
pub const LEAF_CAPACITY: u64 = 1 << TREE_HEIGHT;

/// First node index of `row`. Row must already be validated.
fn min_node_index(row: u8) -> u64 {
    (1u64 << row) - 1
}

/// Last node index of `row`. Row must already be validated.
fn max_node_index(row: u8) -> u64 {
    (1u64 << (row + 1)) - 2
}

/// Check that `row` is within `[0, 32]`.
pub fn validate_row(row: u8) -> Result<()> {
    if row > LEAF_ROW {
        return Err(BaselineTreeError::IndexOutOfRange(format!(
            "tree row should be between 0 and {}, got {}",
            LEAF_ROW, row
        )));
    }
    Ok(())
}

/// Check that `node_index` is within `[0, 2^33 - 2]`.
pub fn validate_node_index(node_index: u64) -> Result<()> {
    if node_index > MAX_NODE_INDEX {
        return Err(BaselineTreeError::IndexOutOfRange(format!(
            "node index should be between 0 and {}, got {}",
            MAX_NODE_INDEX, node_index
        )));
    }
    Ok(())
}

/// Check that `index_at_row` is within `[0, 2^row)`.
pub fn validate_index_at_row(row: u8, index_at_row: u64) -> Result<()> {
    validate_row(row)?;
    let max_index_at_row = (1u64 << row) - 1;
    if index_at_row > max_index_at_row {
        return Err(BaselineTreeError::IndexOutOfRange(format!(
            "tree row {} should only have indices between 0 and {}, got {}",
            row, max_index_at_row, index_at_row
        )));
    }
    Ok(())
}

fn validate_node_index_at_row(row: u8, node_index: u64) -> Result<()> {
    let min = min_node_index(row);
    let max = max_node_index(row);
    if node_index < min || node_index > max {
        return Err(BaselineTreeError::IndexOutOfRange(format!(
            "node index at row {} should be in the range of [{},{}] and was {}",
            row, min, max, node_index
        )));
    }
    Ok(())
}

/// Flat address of the node at `(row, index_at_row)`.
pub fn node_index(row: u8, index_at_row: u64) -> Result<u64> {
    validate_index_at_row(row, index_at_row)?;
    Ok(min_node_index(row) + index_at_row)
}

/// Row containing `node_index`.
pub fn row_of(node_index: u64) -> Result<u8> {
    validate_node_index(node_index)?;
    // floor(log2(node_index + 1)); node_index + 1 is at most 2^33 - 1
    Ok((u64::BITS - 1 - (node_index + 1).leading_zeros()) as u8)
}

/// Position of `node_index` within `row`.
pub fn index_at_row(row: u8, node_index: u64) -> Result<u64> {
    validate_row(row)?;
    validate_node_index_at_row(row, node_index)?;
    let index_at_row = node_index - min_node_index(row);
    validate_index_at_row(row, index_at_row)?;
    Ok(index_at_row)
}

/// Leaf number (insertion order) of a node in the leaf row.
pub fn leaf_number(node_index: u64) -> Result<u64> {
    validate_node_index_at_row(LEAF_ROW, node_index)?;
    Ok(node_index - FIRST_LEAF_NODE_INDEX)
}

/// Index of the other child of the same parent.
pub fn sibling_index_at_row(row: u8, index_at_row: u64) -> Result<u64> {
    validate_index_at_row(row, index_at_row)?;
    if row == 0 {
        return Err(BaselineTreeError::NoSiblingForRoot);
    }
    if index_at_row % 2 == 0 {
        Ok(index_at_row + 1)
    } else {
        Ok(index_at_row - 1)
    }
}

/// Flat address of the parent of `node_index`.
pub fn parent_index(node_index: u64) -> Result<u64> {
    validate_node_index(node_index)?;
    if node_index == 0 {
        return Err(BaselineTreeError::NoParentForRoot);
    }
    Ok((node_index + 1) / 2 - 1)
}
