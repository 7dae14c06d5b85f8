use integer_encoding::VarInt;

use crate::{BaselineTreeError, Result};

/// Tag of the node hash key domain.
const NODE_KEY_TAG: u8 = 0x00;
/// Tag of the raw leaf key domain.
const LEAF_KEY_TAG: u8 = 0x01;

/// Key holding the number of inserted leaves.
///
/// One byte long with its own tag, so it cannot collide with any node or leaf
/// key (those are always 9 bytes).
pub const COUNT_KEY: [u8; 1] = [0x02];

/// Key of the hash stored at `node_index`: tag byte followed by the big-endian
/// node index.
pub fn node_key(node_index: u64) -> [u8; 9] {
    tagged_key(NODE_KEY_TAG, node_index)
}

/// Key of the raw value of leaf number `leaf_index`.
pub fn leaf_key(leaf_index: u64) -> [u8; 9] {
    tagged_key(LEAF_KEY_TAG, leaf_index)
}

fn tagged_key(tag: u8, n: u64) -> [u8; 9] {
    let mut key = [0u8; 9];
    key[0] = tag;
    key[1..].copy_from_slice(&n.to_be_bytes());
    key
}

/// Encode the leaf count for storage under [`COUNT_KEY`].
pub(crate) fn encode_count(count: u64) -> Vec<u8> {
    count.encode_var_vec()
}

/// Decode a leaf count previously written by [`encode_count`].
pub(crate) fn decode_count(bytes: &[u8]) -> Result<u64> {
    match u64::decode_var(bytes) {
        Some((count, read)) if read == bytes.len() => Ok(count),
        _ => Err(BaselineTreeError::CorruptedData(format!(
            "cannot decode leaf count from {}",
            hex::encode(bytes)
        ))),
    }
}

/// Abstract key-value storage backing a Baseline tree.
///
/// Uses `&self` (interior mutability) to match the `StorageContext` pattern,
/// so one store can serve concurrent readers while an insertion is running.
pub trait BaselineTreeStore {
    /// Retrieve the value stored under `key`, or `None` if it was never set.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;
    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &[u8], value: &[u8]) -> Result<()>;
}

impl<S: BaselineTreeStore + ?Sized> BaselineTreeStore for &S {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}
