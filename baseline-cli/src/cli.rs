//! Command-line arguments. Every option can also be set from the environment.

use std::path::PathBuf;

use baseline_tree::{Blake3Hasher, MerkleHasher, Sha256Hasher};
use clap::{Parser, Subcommand, ValueEnum};

use crate::logging::LogFormat;

/// Inspect and extend a Baseline Merkle tree stored in RocksDB.
#[derive(Parser, Debug)]
#[command(name = "baseline", version, propagate_version = true)]
pub struct BaselineCli {
    /// Directory of the RocksDB database (created if missing).
    #[arg(long, short = 'd', env = "BASELINE_DB_PATH")]
    pub db_path: PathBuf,

    /// Name of the tree inside the database; trees with different names do
    /// not share any keys.
    #[arg(long, env = "BASELINE_TREE", default_value = "baseline")]
    pub tree: String,

    /// Combine function used for every parent hash. Must stay the same for
    /// the lifetime of a tree.
    #[arg(long, value_enum, env = "BASELINE_HASHER", default_value_t = HasherKind::Blake3)]
    pub hasher: HasherKind,

    /// Number of leading bytes cleared from every SHA-256 digest.
    #[arg(long, env = "BASELINE_TRUNCATION", default_value_t = 0)]
    pub truncation: usize,

    /// Default log filter when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a 32-byte hex leaf and print its index and the new root.
    Insert { leaf: String },
    /// Print the sibling path of a leaf.
    Proof { leaf_index: u64 },
    /// Check a leaf value against the current root.
    Verify { leaf_index: u64, leaf: String },
    /// Print the number of inserted leaves.
    Count,
    /// Print the current root hash.
    Root,
    /// Print the raw value of an inserted leaf.
    Leaf { leaf_index: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HasherKind {
    Blake3,
    Sha256,
}

/// Hasher selected at runtime.
#[derive(Debug, Clone, Copy)]
pub enum ConfiguredHasher {
    Blake3(Blake3Hasher),
    Sha256(Sha256Hasher),
}

impl BaselineCli {
    /// Build the hasher described by `--hasher` and `--truncation`.
    pub fn configured_hasher(&self) -> anyhow::Result<ConfiguredHasher> {
        match self.hasher {
            HasherKind::Blake3 => {
                if self.truncation != 0 {
                    anyhow::bail!("--truncation only applies to the sha256 hasher");
                }
                Ok(ConfiguredHasher::Blake3(Blake3Hasher))
            }
            HasherKind::Sha256 => Ok(ConfiguredHasher::Sha256(Sha256Hasher::with_truncation(
                self.truncation,
            )?)),
        }
    }
}

impl MerkleHasher for ConfiguredHasher {
    fn combine(&self, a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        match self {
            ConfiguredHasher::Blake3(hasher) => hasher.combine(a, b),
            ConfiguredHasher::Sha256(hasher) => hasher.combine(a, b),
        }
    }
}
