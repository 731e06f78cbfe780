use serde::{Deserialize, Serialize};

/// The three node kinds a taxonomy is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Top-level container of a taxonomy (e.g. a glossary)
    Collection,
    /// Nestable grouping node within a Collection
    Category,
    /// Leaf definitional node
    Term,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Collection => "collection",
            NodeKind::Category => "category",
            NodeKind::Term => "term",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A taxonomy node as seen through an accessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: String,

    /// Human-readable name
    pub name: String,

    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn collection(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Collection)
    }

    pub fn category(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Category)
    }

    pub fn term(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&NodeKind::Category).unwrap();
        assert_eq!(json, "\"category\"");
    }

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Node::collection("g1", "Finance").kind, NodeKind::Collection);
        assert_eq!(Node::category("c1", "Accounts").kind, NodeKind::Category);
        assert_eq!(Node::term("t1", "Invoice").kind, NodeKind::Term);
    }
}
