//! Seed Format v0 schema
//!
//! Defines the YAML structure of a taxonomy seed

use crumbtrail_core::RelationshipKind;
use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default)]
    pub collections: Vec<SeedCollection>,

    #[serde(default)]
    pub categories: Vec<SeedCategory>,

    #[serde(default)]
    pub terms: Vec<SeedTerm>,

    /// Extra edges appended after the ones implied by the declarations above
    #[serde(default)]
    pub relationships: Vec<SeedRelationship>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCollection {
    pub id: String,
    pub name: String,
}

/// Category definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCategory {
    pub id: String,

    pub name: String,

    /// Owning collection (emits a CollectionAnchor edge)
    #[serde(default)]
    pub collection: Option<String>,

    /// Parent category (emits a Containment edge)
    #[serde(default)]
    pub parent: Option<String>,
}

/// Term definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTerm {
    pub id: String,

    pub name: String,

    /// Owning collection (emits a TermAnchor edge)
    #[serde(default)]
    pub collection: Option<String>,

    /// Categories holding this term (each emits a Categorization edge)
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Raw edge in seed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeedRelationship {
    pub kind: RelationshipKind,
    pub from: String,
    pub to: String,
}
