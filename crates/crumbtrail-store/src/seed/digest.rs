//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds so two files describing the same
//! taxonomy can be recognised regardless of formatting or node order.

use crate::errors::{serialization_error, Result};
use crate::seed::format_v0::{SeedRelationship, SeedV0};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Canonical representation of a seed for digest calculation
#[derive(Debug, Clone, Serialize)]
struct CanonicalSeed {
    schema_version: u32,
    collections: Vec<CanonicalNode>,
    categories: Vec<CanonicalCategory>,
    terms: Vec<CanonicalTerm>,
    relationships: Vec<SeedRelationship>,
}

#[derive(Debug, Clone, Serialize)]
struct CanonicalNode {
    id: String,
    name: String,
}

#[derive(Debug, Clone, Serialize)]
struct CanonicalCategory {
    id: String,
    name: String,
    collection: Option<String>,
    parent: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct CanonicalTerm {
    id: String,
    name: String,
    collection: Option<String>,
    categories: Vec<String>,
}

/// Compute a stable digest for a seed
///
/// Returns a SHA256 hex digest of the canonicalized seed representation.
///
/// # Errors
///
/// Returns `ERR_SERIALIZATION` if the canonical form cannot be encoded.
pub fn compute_seed_digest(seed: &SeedV0) -> Result<String> {
    let canonical = canonicalize_seed(seed);

    let json =
        serde_json::to_string(&canonical).map_err(|e| serialization_error("seed_digest", e))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());

    Ok(hex::encode(hasher.finalize()))
}

/// Canonicalize a seed for deterministic digest calculation
///
/// Node lists are sorted by id. Raw relationships and term categories keep
/// their declared order: relationship order decides which parent wins when a
/// category has several, so reordering them is a semantic change.
fn canonicalize_seed(seed: &SeedV0) -> CanonicalSeed {
    let mut collections: Vec<CanonicalNode> = seed
        .collections
        .iter()
        .map(|c| CanonicalNode {
            id: c.id.clone(),
            name: c.name.clone(),
        })
        .collect();
    collections.sort_by(|a, b| a.id.cmp(&b.id));

    let mut categories: Vec<CanonicalCategory> = seed
        .categories
        .iter()
        .map(|c| CanonicalCategory {
            id: c.id.clone(),
            name: c.name.clone(),
            collection: c.collection.clone(),
            parent: c.parent.clone(),
        })
        .collect();
    categories.sort_by(|a, b| a.id.cmp(&b.id));

    let mut terms: Vec<CanonicalTerm> = seed
        .terms
        .iter()
        .map(|t| CanonicalTerm {
            id: t.id.clone(),
            name: t.name.clone(),
            collection: t.collection.clone(),
            categories: t.categories.clone(),
        })
        .collect();
    terms.sort_by(|a, b| a.id.cmp(&b.id));

    CanonicalSeed {
        schema_version: seed.schema_version,
        collections,
        categories,
        terms,
        relationships: seed.relationships.clone(),
    }
}
