//! Seed loading
//!
//! Turns a parsed seed into a `MemoryTaxonomy`. Edge order is deterministic
//! because the resolver's default parent tie-break depends on it:
//! 1. For each category: its collection anchor, then its parent containment
//! 2. For each term: its term anchor, then one categorization per category
//! 3. Raw relationships, in file order

use crate::errors::{invariant_violation, Result};
use crate::seed::format_v0::SeedV0;
use crate::seed::{compute_seed_digest, parse_seed_file};
use crumbtrail_core::rules::check_taxonomy;
use crumbtrail_core::{MemoryTaxonomy, Node, Relationship};
use std::path::Path;

/// Options controlling how a seed is loaded
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Reject seeds whose taxonomy fails `check_taxonomy`
    pub strict: bool,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// A loaded taxonomy together with the digest of the seed it came from
#[derive(Debug, Clone)]
pub struct LoadedTaxonomy {
    pub taxonomy: MemoryTaxonomy,
    pub digest: String,
}

/// Build a taxonomy from a validated seed
pub fn build_taxonomy(seed: &SeedV0) -> MemoryTaxonomy {
    let mut taxonomy = MemoryTaxonomy::new();

    for collection in &seed.collections {
        taxonomy.insert_node(Node::collection(&collection.id, &collection.name));
    }

    for category in &seed.categories {
        taxonomy.insert_node(Node::category(&category.id, &category.name));
        if let Some(collection) = &category.collection {
            taxonomy.insert_relationship(Relationship::collection_anchor(&category.id, collection));
        }
        if let Some(parent) = &category.parent {
            taxonomy.insert_relationship(Relationship::containment(&category.id, parent));
        }
    }

    for term in &seed.terms {
        taxonomy.insert_node(Node::term(&term.id, &term.name));
        if let Some(collection) = &term.collection {
            taxonomy.insert_relationship(Relationship::term_anchor(&term.id, collection));
        }
        for category in &term.categories {
            taxonomy.insert_relationship(Relationship::categorization(category, &term.id));
        }
    }

    for rel in &seed.relationships {
        taxonomy.insert_relationship(Relationship::new(rel.kind, &rel.from, &rel.to));
    }

    taxonomy
}

/// Build a taxonomy from a parsed seed and compute its digest
///
/// # Errors
///
/// Fails with `InvariantViolation` in strict mode when the taxonomy breaks
/// the containment rules.
pub fn load_taxonomy(seed: &SeedV0, options: &LoadOptions) -> Result<LoadedTaxonomy> {
    let digest = compute_seed_digest(seed)?;
    let taxonomy = build_taxonomy(seed);

    if options.strict {
        let violations = check_taxonomy(&taxonomy);
        if !violations.is_empty() {
            tracing::debug!(
                digest = %digest,
                violations = violations.len(),
                "Seed rejected in strict mode"
            );
            return Err(invariant_violation(&violations).with_entity_id(digest));
        }
    }

    tracing::debug!(
        digest = %digest,
        nodes = taxonomy.node_count(),
        relationships = taxonomy.relationships().len(),
        "Seed loaded"
    );

    Ok(LoadedTaxonomy { taxonomy, digest })
}

/// Parse a seed file and load it
///
/// # Errors
///
/// Returns IO errors for unreadable files, `InvalidInput` for malformed
/// seeds, and strict-mode `InvariantViolation` errors.
pub fn load_taxonomy_file(path: &Path, options: &LoadOptions) -> Result<LoadedTaxonomy> {
    let seed = parse_seed_file(path)?;
    load_taxonomy(&seed, options)
}
