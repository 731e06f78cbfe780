use serde::{Deserialize, Serialize};

use super::node::NodeKind;

/// Relationship types the trail resolver reasons about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// Category -> Collection (ownership)
    CollectionAnchor,
    /// Term -> Collection (ownership)
    TermAnchor,
    /// Child Category -> parent Category
    Containment,
    /// Category -> Term
    Categorization,
}

impl RelationshipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::CollectionAnchor => "collection_anchor",
            RelationshipKind::TermAnchor => "term_anchor",
            RelationshipKind::Containment => "containment",
            RelationshipKind::Categorization => "categorization",
        }
    }

    /// Node kinds expected at the (from, to) ends
    pub fn endpoint_kinds(&self) -> (NodeKind, NodeKind) {
        match self {
            RelationshipKind::CollectionAnchor => (NodeKind::Category, NodeKind::Collection),
            RelationshipKind::TermAnchor => (NodeKind::Term, NodeKind::Collection),
            RelationshipKind::Containment => (NodeKind::Category, NodeKind::Category),
            RelationshipKind::Categorization => (NodeKind::Category, NodeKind::Term),
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed, typed edge between two node identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub kind: RelationshipKind,
    pub from: String,
    pub to: String,
}

impl Relationship {
    pub fn new(kind: RelationshipKind, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn collection_anchor(category: impl Into<String>, collection: impl Into<String>) -> Self {
        Self::new(RelationshipKind::CollectionAnchor, category, collection)
    }

    pub fn term_anchor(term: impl Into<String>, collection: impl Into<String>) -> Self {
        Self::new(RelationshipKind::TermAnchor, term, collection)
    }

    pub fn containment(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::new(RelationshipKind::Containment, child, parent)
    }

    pub fn categorization(category: impl Into<String>, term: impl Into<String>) -> Self {
        Self::new(RelationshipKind::Categorization, category, term)
    }

    /// Whether either end of the edge is `id`
    pub fn is_incident_to(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }

    /// Exact match on kind and both ends
    pub fn links(&self, kind: RelationshipKind, from: &str, to: &str) -> bool {
        self.kind == kind && self.from == from && self.to == to
    }
}
