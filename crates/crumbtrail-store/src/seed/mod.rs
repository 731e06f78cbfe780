//! Taxonomy seed files
//!
//! Provides:
//! - Seed Format v0 schema
//! - YAML parser with validation
//! - Digest canonicalization
//! - Loader building a `MemoryTaxonomy`

pub mod digest;
pub mod format_v0;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use format_v0::SeedV0;
pub use importer::{build_taxonomy, load_taxonomy, load_taxonomy_file, LoadOptions, LoadedTaxonomy};
pub use parser::{parse_seed_file, parse_seed_str};
