//! Seed check command
//!
//! Usage: crumbtrail check <SEED>

use clap::Args;
use crumbtrail_core::rules::check_taxonomy;
use crumbtrail_core_types::RequestId;
use crumbtrail_store::errors::invariant_violation;
use crumbtrail_store::{load_taxonomy_file, LoadOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the taxonomy seed YAML file
    pub seed: PathBuf,
}

/// Execute check command
///
/// Prints the seed digest, then one line per violation. Any violation makes
/// the command fail.
pub fn execute(args: CheckArgs, request_id: &RequestId) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_taxonomy_file(&args.seed, &LoadOptions::default())
        .map_err(|e| e.with_request_id(request_id.clone()))?;

    println!("digest: {}", loaded.digest);

    let violations = check_taxonomy(&loaded.taxonomy);
    if violations.is_empty() {
        println!("✓ {} nodes, no violations", loaded.taxonomy.node_count());
        return Ok(());
    }

    for violation in &violations {
        println!("✗ {}", violation);
    }

    Err(invariant_violation(&violations)
        .with_op("check")
        .with_entity_id(loaded.digest)
        .with_request_id(request_id.clone())
        .into())
}
