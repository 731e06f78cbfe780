use std::collections::HashMap;

use crate::accessor::TaxonomyAccessor;
use crate::errors::{AccessError, AccessResult};
use crate::model::{Node, NodeKind, Relationship};

/// In-memory taxonomy
///
/// Nodes are keyed by id. Relationships keep their insertion order, and
/// `get_relationships` reports incident edges in that order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaxonomy {
    nodes: HashMap<String, Node>,
    relationships: Vec<Relationship>,
}

impl MemoryTaxonomy {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            relationships: Vec::new(),
        }
    }

    /// Insert a node, replacing any node with the same id
    pub fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Append a relationship
    ///
    /// Endpoints are not checked here; use `rules::check_taxonomy` to find
    /// dangling or mistyped edges.
    pub fn insert_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.insert_node(node);
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.insert_relationship(relationship);
        self
    }

    /// Look up a node of any kind
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All nodes sorted by id
    pub fn list_nodes(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self.nodes.values().collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        nodes
    }

    /// All nodes of one kind sorted by id
    pub fn list_nodes_of(&self, kind: NodeKind) -> Vec<&Node> {
        self.list_nodes()
            .into_iter()
            .filter(|n| n.kind == kind)
            .collect()
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl TaxonomyAccessor for MemoryTaxonomy {
    fn get_node(&self, id: &str, kind: NodeKind) -> AccessResult<Node> {
        self.nodes
            .get(id)
            .filter(|node| node.kind == kind)
            .cloned()
            .ok_or_else(|| AccessError::NotFound {
                node_id: id.to_string(),
                kind,
            })
    }

    fn get_relationships(&self, id: &str) -> AccessResult<Vec<Relationship>> {
        Ok(self
            .relationships
            .iter()
            .filter(|rel| rel.is_incident_to(id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_node_checks_kind() {
        let taxonomy = MemoryTaxonomy::new().with_node(Node::category("c1", "Accounts"));

        assert!(taxonomy.get_node("c1", NodeKind::Category).is_ok());

        let err = taxonomy.get_node("c1", NodeKind::Term).unwrap_err();
        assert_eq!(
            err,
            AccessError::NotFound {
                node_id: "c1".to_string(),
                kind: NodeKind::Term,
            }
        );
    }

    #[test]
    fn test_missing_node_is_not_found() {
        let taxonomy = MemoryTaxonomy::new();
        assert!(matches!(
            taxonomy.get_node("nope", NodeKind::Collection),
            Err(AccessError::NotFound { .. })
        ));
    }

    #[test]
    fn test_relationships_keep_insertion_order() {
        let taxonomy = MemoryTaxonomy::new()
            .with_relationship(Relationship::containment("c3", "c2"))
            .with_relationship(Relationship::collection_anchor("c1", "g1"))
            .with_relationship(Relationship::containment("c2", "c1"));

        let rels = taxonomy.get_relationships("c2").unwrap();
        assert_eq!(
            rels,
            vec![
                Relationship::containment("c3", "c2"),
                Relationship::containment("c2", "c1"),
            ]
        );
    }

    #[test]
    fn test_isolated_node_has_no_relationships() {
        let taxonomy = MemoryTaxonomy::new().with_node(Node::term("t1", "Invoice"));
        assert!(taxonomy.get_relationships("t1").unwrap().is_empty());
    }

    #[test]
    fn test_list_nodes_of_kind_is_sorted() {
        let taxonomy = MemoryTaxonomy::new()
            .with_node(Node::category("c2", "Receivables"))
            .with_node(Node::collection("g1", "Finance"))
            .with_node(Node::category("c1", "Accounts"));

        let ids: Vec<&str> = taxonomy
            .list_nodes_of(NodeKind::Category)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c1", "c2"]);
    }
}
