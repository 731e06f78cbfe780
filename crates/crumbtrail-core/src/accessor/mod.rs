//! Node/relationship accessor contract
//!
//! The resolver never owns taxonomy data. It reads nodes and their incident
//! relationships through a `TaxonomyAccessor`, which may be backed by an
//! in-memory map, a seed file or a remote store.

pub mod memory;

use crate::errors::AccessResult;
use crate::model::{Node, NodeKind, Relationship};

pub use memory::MemoryTaxonomy;

/// Read-only view of a taxonomy
///
/// Implementations must be safe to call repeatedly within one request; the
/// resolver performs its lookups strictly in sequence.
pub trait TaxonomyAccessor {
    /// Fetch a node by id
    ///
    /// # Errors
    ///
    /// Returns `AccessError::NotFound` when no node with this id exists or
    /// when it exists with a different kind.
    fn get_node(&self, id: &str, kind: NodeKind) -> AccessResult<Node>;

    /// Fetch every relationship with `id` at either end
    ///
    /// Returns an empty list when the node has no relationships. The order
    /// of the returned edges must be stable for an unchanged taxonomy.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::Unavailable` when the backing store cannot be read.
    fn get_relationships(&self, id: &str) -> AccessResult<Vec<Relationship>>;
}
