//! `baseline` command-line tool.

mod cli;
mod commands;
mod logging;

use anyhow::Context;
use baseline_storage::rocksdb_storage::RocksDbStorage;
use baseline_tree::{BaselineTree, BaselineTreeStorageContext};
use clap::Parser;
use tracing::debug;

use crate::cli::BaselineCli;

fn main() -> anyhow::Result<()> {
    let cli = BaselineCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    let hasher = cli.configured_hasher()?;
    let storage = RocksDbStorage::default_rocksdb_with_path(&cli.db_path)
        .with_context(|| format!("failed to open database at {}", cli.db_path.display()))?;

    let transaction = storage.start_transaction();
    let output = {
        let context = storage
            .get_prefixed_transactional_context_from_path([cli.tree.as_bytes()], &transaction);
        let tree = BaselineTree::open(BaselineTreeStorageContext::new(&context), hasher)
            .with_context(|| format!("failed to open tree {:?}", cli.tree))?;
        commands::execute(&tree, &cli.command)?
    };
    storage
        .commit_transaction(transaction)
        .context("failed to commit transaction")?;
    debug!(tree = %cli.tree, "transaction committed");

    println!("{output}");
    Ok(())
}
