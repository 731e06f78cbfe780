use serde::{Deserialize, Serialize};

/// How the chain walk picks a parent when a category declares several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentSelection {
    /// Follow the last matching Containment edge in accessor order
    #[default]
    LastSeen,
    /// Fail with `MultipleParents` when more than one distinct parent exists
    RequireSingle,
}

/// Resolver policy knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub parent_selection: ParentSelection,

    /// Require a root category supplied without a leaf to carry a
    /// CollectionAnchor to the supplied collection
    pub anchor_lone_root: bool,
}

impl ResolverConfig {
    /// Single-parent selection plus lone-root anchoring
    pub fn strict() -> Self {
        Self {
            parent_selection: ParentSelection::RequireSingle,
            anchor_lone_root: true,
        }
    }
}
