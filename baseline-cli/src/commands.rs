//! Subcommand execution against an opened tree.

use anyhow::{Context, anyhow};
use baseline_tree::{BaselineTree, BaselineTreeStore, MerkleHasher, index::LEAF_ROW};
use tracing::info;

use crate::cli::Commands;

/// Parse a 32-byte value written as hex, with or without a `0x` prefix.
pub fn parse_leaf(input: &str) -> anyhow::Result<[u8; 32]> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    let bytes = hex::decode(digits).with_context(|| format!("invalid hex leaf {input:?}"))?;
    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow!("leaf must be 32 bytes, got {}", bytes.len()))
}

/// Run `command` and return what should be printed on stdout.
pub fn execute<S, H>(tree: &BaselineTree<S, H>, command: &Commands) -> anyhow::Result<String>
where
    S: BaselineTreeStore,
    H: MerkleHasher,
{
    match command {
        Commands::Insert { leaf } => {
            let leaf = parse_leaf(leaf)?;
            let outcome = tree.insert(&leaf)?;
            info!(leaf_index = outcome.leaf_index, "leaf inserted");
            Ok(format!(
                "leaf_index {}\nroot {}",
                outcome.leaf_index,
                hex::encode(outcome.root)
            ))
        }
        Commands::Proof { leaf_index } => {
            let proof = tree.get_proof(*leaf_index)?;
            let mut lines = Vec::with_capacity(proof.nodes.len() + 1);
            for (step, node) in proof.nodes.iter().enumerate() {
                lines.push(format!(
                    "row {:>2} node {:>10} {}",
                    LEAF_ROW as usize - step,
                    node.node_index,
                    hex::encode(node.hash)
                ));
            }
            lines.push(format!("encoded {}", hex::encode(proof.encode_to_vec()?)));
            Ok(lines.join("\n"))
        }
        Commands::Verify { leaf_index, leaf } => {
            let leaf = parse_leaf(leaf)?;
            let root = tree.root()?;
            tree.get_proof(*leaf_index)?
                .verify(&leaf, &root, tree.hasher())
                .with_context(|| format!("leaf {leaf_index} does not verify"))?;
            Ok(format!("leaf {leaf_index} verifies against root {}", hex::encode(root)))
        }
        Commands::Count => Ok(tree.count().to_string()),
        Commands::Root => Ok(hex::encode(tree.root()?)),
        Commands::Leaf { leaf_index } => match tree.leaf(*leaf_index)? {
            Some(value) => Ok(hex::encode(value)),
            None => Err(anyhow!("leaf {leaf_index} has not been inserted")),
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use baseline_tree::{Blake3Hasher, MemStore, ZERO_HASH};

    use super::*;

    fn leaf_hex(byte: u8) -> String {
        hex::encode([byte; 32])
    }

    #[test]
    fn test_parse_leaf() {
        assert_eq!(parse_leaf(&leaf_hex(0xab)).expect("plain"), [0xab; 32]);
        assert_eq!(
            parse_leaf(&format!("0x{}", leaf_hex(0x01))).expect("prefixed"),
            [0x01; 32]
        );
        assert!(parse_leaf("abcd").is_err());
        assert!(parse_leaf("zz").is_err());
    }

    #[test]
    fn test_insert_then_read_back() {
        let tree = BaselineTree::open(MemStore::new(), Blake3Hasher).expect("open tree");

        assert_eq!(execute(&tree, &Commands::Count).expect("count"), "0");
        assert_eq!(
            execute(&tree, &Commands::Root).expect("root"),
            hex::encode(ZERO_HASH)
        );

        let output = execute(&tree, &Commands::Insert { leaf: leaf_hex(7) }).expect("insert");
        assert!(output.starts_with("leaf_index 0\n"));
        assert_eq!(execute(&tree, &Commands::Count).expect("count"), "1");
        assert_eq!(
            execute(&tree, &Commands::Leaf { leaf_index: 0 }).expect("leaf"),
            leaf_hex(7)
        );
        assert_matches!(execute(&tree, &Commands::Leaf { leaf_index: 1 }), Err(_));
    }

    #[test]
    fn test_proof_and_verify() {
        let tree = BaselineTree::open(MemStore::new(), Blake3Hasher).expect("open tree");
        execute(&tree, &Commands::Insert { leaf: leaf_hex(1) }).expect("insert");
        execute(&tree, &Commands::Insert { leaf: leaf_hex(2) }).expect("insert");

        let proof = execute(&tree, &Commands::Proof { leaf_index: 1 }).expect("proof");
        assert_eq!(proof.lines().count(), 33);
        assert!(proof.lines().last().expect("encoded line").starts_with("encoded "));

        execute(
            &tree,
            &Commands::Verify {
                leaf_index: 1,
                leaf: leaf_hex(2),
            },
        )
        .expect("latest leaf verifies");
        assert!(
            execute(
                &tree,
                &Commands::Verify {
                    leaf_index: 1,
                    leaf: leaf_hex(3),
                },
            )
            .is_err()
        );
    }
}
