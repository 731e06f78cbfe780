use serde::{Deserialize, Serialize};

use super::node::{Node, NodeKind};

/// One entry in a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
}

impl From<Node> for Breadcrumb {
    fn from(node: Node) -> Self {
        Self {
            id: node.id,
            name: node.name,
            kind: node.kind,
        }
    }
}

/// Ordered breadcrumb trail, most specific node first, owning collection last
///
/// A trail is only ever produced whole; there is no partially resolved form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trail {
    entries: Vec<Breadcrumb>,
}

impl Trail {
    pub fn new(entries: Vec<Breadcrumb>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Breadcrumb] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most specific supplied node
    pub fn leaf(&self) -> Option<&Breadcrumb> {
        self.entries.first()
    }

    /// Owning collection
    pub fn root(&self) -> Option<&Breadcrumb> {
        self.entries.last()
    }

    /// Entry ids in leaf-to-root order
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|b| b.id.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Breadcrumb> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<Breadcrumb> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Breadcrumb;
    type IntoIter = std::slice::Iter<'a, Breadcrumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
