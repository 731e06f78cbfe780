//! Trail resolution command
//!
//! Usage: crumbtrail resolve <SEED> --collection <ID> [--root <ID>] [--leaf <ID>] [--term <ID>] [--strict]

use clap::Args;
use crumbtrail_core::{
    resolve_trail_with_config, ExError, ParentSelection, ResolverConfig, Trail, TrailRequest,
};
use crumbtrail_core_types::RequestId;
use crumbtrail_store::{load_taxonomy_file, LoadOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Path to the taxonomy seed YAML file
    pub seed: PathBuf,

    /// Collection id
    #[arg(long)]
    pub collection: String,

    /// Root category id
    #[arg(long)]
    pub root: Option<String>,

    /// Leaf category id (requires --root)
    #[arg(long)]
    pub leaf: Option<String>,

    /// Term id
    #[arg(long)]
    pub term: Option<String>,

    /// Print the trail as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail when a category on the chain has more than one parent
    #[arg(long)]
    pub strict_parents: bool,

    /// Refuse seeds that break the taxonomy invariants (see `check`)
    #[arg(long)]
    pub strict: bool,

    /// Require a lone root category to be anchored to the collection
    #[arg(long)]
    pub anchor_lone_root: bool,
}

impl ResolveArgs {
    fn request(&self) -> TrailRequest {
        let mut request = TrailRequest::new(self.collection.clone());
        if let Some(root) = &self.root {
            request = request.with_root_category(root.clone());
        }
        if let Some(leaf) = &self.leaf {
            request = request.with_leaf_category(leaf.clone());
        }
        if let Some(term) = &self.term {
            request = request.with_term(term.clone());
        }
        request
    }

    fn config(&self) -> ResolverConfig {
        ResolverConfig {
            parent_selection: if self.strict_parents {
                ParentSelection::RequireSingle
            } else {
                ParentSelection::LastSeen
            },
            anchor_lone_root: self.anchor_lone_root,
        }
    }
}

/// Execute resolve command
pub fn execute(args: ResolveArgs, request_id: &RequestId) -> Result<(), Box<dyn std::error::Error>> {
    let options = LoadOptions {
        strict: args.strict,
    };
    let loaded = load_taxonomy_file(&args.seed, &options)
        .map_err(|e| e.with_request_id(request_id.clone()))?;

    let trail = resolve_trail_with_config(&loaded.taxonomy, &args.request(), &args.config())
        .map_err(|e| ExError::from(e).with_request_id(request_id.clone()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trail)?);
    } else {
        print_trail(&trail);
    }

    Ok(())
}

fn print_trail(trail: &Trail) {
    for crumb in trail {
        println!("{}\t{}\t{}", crumb.kind, crumb.id, crumb.name);
    }
}
