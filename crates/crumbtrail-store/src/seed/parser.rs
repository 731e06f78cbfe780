//! Seed parser with validation
//!
//! Parses YAML and validates schema version, id uniqueness and references.
//! Structural rules (single parent, anchoring) are checked after loading by
//! `crumbtrail_core::rules`.

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use crumbtrail_core::NodeKind;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
///
/// # Errors
///
/// Returns `ERR_IO` when the file cannot be read, otherwise as `parse_seed_str`.
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
///
/// # Errors
///
/// Returns `ERR_INVALID_INPUT` for malformed YAML, an unsupported version,
/// duplicate ids or references to missing or mistyped nodes.
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    // Ids are unique across every node kind
    let mut kinds: HashMap<&str, NodeKind> = HashMap::new();
    let declared = seed
        .collections
        .iter()
        .map(|c| (c.id.as_str(), NodeKind::Collection))
        .chain(
            seed.categories
                .iter()
                .map(|c| (c.id.as_str(), NodeKind::Category)),
        )
        .chain(seed.terms.iter().map(|t| (t.id.as_str(), NodeKind::Term)));

    for (id, kind) in declared {
        if id.trim().is_empty() {
            return Err(seed_validation(&format!("Empty id for a {}", kind)));
        }
        if kinds.insert(id, kind).is_some() {
            return Err(seed_validation(&format!("Duplicate node id: {}", id)));
        }
    }

    let expect = |id: &str, kind: NodeKind, context: &str| -> Result<()> {
        match kinds.get(id) {
            Some(actual) if *actual == kind => Ok(()),
            Some(actual) => Err(seed_validation(&format!(
                "{} references {} {} but it is a {}",
                context, kind, id, actual
            ))),
            None => Err(seed_validation(&format!(
                "{} references non-existent {}: {}",
                context, kind, id
            ))),
        }
    };

    for category in &seed.categories {
        let context = format!("Category {}", category.id);
        if let Some(collection) = &category.collection {
            expect(collection, NodeKind::Collection, &context)?;
        }
        if let Some(parent) = &category.parent {
            expect(parent, NodeKind::Category, &context)?;
        }
    }

    for term in &seed.terms {
        let context = format!("Term {}", term.id);
        if let Some(collection) = &term.collection {
            expect(collection, NodeKind::Collection, &context)?;
        }
        for category in &term.categories {
            expect(category, NodeKind::Category, &context)?;
        }
    }

    for rel in &seed.relationships {
        let context = format!("Relationship {} {} -> {}", rel.kind, rel.from, rel.to);
        let (from_kind, to_kind) = rel.kind.endpoint_kinds();
        expect(&rel.from, from_kind, &context)?;
        expect(&rel.to, to_kind, &context)?;
    }

    Ok(())
}
