//! crumbtrail core - breadcrumb trail resolution over a taxonomy
//!
//! A taxonomy is a top-level collection, categories nested inside it, and
//! terms placed in categories. This crate provides:
//! - The taxonomy model (nodes, typed relationships, breadcrumb trails)
//! - The `TaxonomyAccessor` contract and an in-memory accessor
//! - The trail resolver, which validates a sparse set of ids against the
//!   containment rules and returns the leaf-to-collection path
//! - Taxonomy invariant checks
//! - Error and logging facilities shared by the other crumbtrail crates

pub mod accessor;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod trail;

// Re-export commonly used types
pub use accessor::{MemoryTaxonomy, TaxonomyAccessor};
pub use errors::{AccessError, ExError, ExErrorKind, Result, TrailError};
pub use model::{Breadcrumb, Node, NodeKind, Relationship, RelationshipKind, Trail};
pub use trail::{
    resolve_trail, resolve_trail_with_config, ParentSelection, ResolverConfig, TrailParam,
    TrailRequest,
};

#[doc(hidden)]
pub mod __private {
    pub use crumbtrail_core_types::schema;
    pub use tracing;
}
