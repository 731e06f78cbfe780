//! crumbtrail store - taxonomy seed files
//!
//! Provides:
//! - Seed Format v0 schema (YAML)
//! - Parser with referential validation
//! - Digest canonicalization
//! - Loading a seed into a `MemoryTaxonomy`

pub mod errors;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use seed::{load_taxonomy, load_taxonomy_file, LoadOptions, LoadedTaxonomy};
