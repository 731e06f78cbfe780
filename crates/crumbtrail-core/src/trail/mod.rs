//! Breadcrumb trail resolution
//!
//! Given a collection id and optionally a root category, a leaf category and
//! a term, validate that they form one connected containment path and return
//! that path from the deepest supplied node up to the collection.

pub mod config;
pub mod request;
pub mod resolver;

pub use config::{ParentSelection, ResolverConfig};
pub use request::{TrailParam, TrailRequest};
pub use resolver::{resolve_trail, resolve_trail_with_config};
