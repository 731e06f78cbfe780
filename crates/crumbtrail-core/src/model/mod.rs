pub mod breadcrumb;
pub mod node;
pub mod relationship;

pub use breadcrumb::{Breadcrumb, Trail};
pub use node::{Node, NodeKind};
pub use relationship::{Relationship, RelationshipKind};
