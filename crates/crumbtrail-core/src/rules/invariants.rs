use std::collections::{BTreeSet, HashMap, HashSet};

use thiserror::Error;

use crate::accessor::MemoryTaxonomy;
use crate::model::{NodeKind, Relationship, RelationshipKind};

/// A structural problem found in a taxonomy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("{kind} relationship references missing node {node_id}")]
    DanglingEndpoint {
        kind: RelationshipKind,
        node_id: String,
    },

    #[error("{kind} relationship expects {expected} at {node_id}, found {actual}")]
    EndpointKindMismatch {
        kind: RelationshipKind,
        node_id: String,
        expected: NodeKind,
        actual: NodeKind,
    },

    #[error("Category {category_id} has multiple parents: {parent_ids:?}")]
    MultipleParents {
        category_id: String,
        parent_ids: Vec<String>,
    },

    #[error("Category {category_id} is part of a containment cycle")]
    ContainmentCycle { category_id: String },

    #[error("Category {category_id} has no reachable collection anchor")]
    UnanchoredCategory { category_id: String },

    #[error("{node_id} reaches more than one collection: {collection_ids:?}")]
    MultipleCollections {
        node_id: String,
        collection_ids: Vec<String>,
    },

    #[error("Term {term_id} has no collection anchor")]
    UnanchoredTerm { term_id: String },

    #[error("Term {term_id} is placed in multiple categories: {category_ids:?}")]
    MultipleCategories {
        term_id: String,
        category_ids: Vec<String>,
    },
}

/// Check a taxonomy against the containment rules the resolver relies on
///
/// Violations come back in a stable order: relationship endpoint problems
/// first (in relationship order), then per-category and per-term problems
/// sorted by node id.
pub fn check_taxonomy(taxonomy: &MemoryTaxonomy) -> Vec<Violation> {
    let mut violations = check_endpoints(taxonomy);

    let parents = edges_by_from(taxonomy.relationships(), RelationshipKind::Containment);
    let category_anchors =
        edges_by_from(taxonomy.relationships(), RelationshipKind::CollectionAnchor);

    for category in taxonomy.list_nodes_of(NodeKind::Category) {
        let id = category.id.as_str();

        if let Some(ps) = parents.get(id) {
            let distinct = distinct_sorted(ps);
            if distinct.len() > 1 {
                violations.push(Violation::MultipleParents {
                    category_id: id.to_string(),
                    parent_ids: distinct,
                });
            }
        }

        if cycles_back(&parents, id) {
            violations.push(Violation::ContainmentCycle {
                category_id: id.to_string(),
            });
            continue;
        }

        // Anchors anywhere on the chain must agree on one collection
        let mut collections = BTreeSet::new();
        for ancestor in ancestors_inclusive(&parents, id) {
            if let Some(anchors) = category_anchors.get(ancestor) {
                collections.extend(anchors.iter().map(|c| c.to_string()));
            }
        }
        match collections.len() {
            0 => violations.push(Violation::UnanchoredCategory {
                category_id: id.to_string(),
            }),
            1 => {}
            _ => violations.push(Violation::MultipleCollections {
                node_id: id.to_string(),
                collection_ids: collections.into_iter().collect(),
            }),
        }
    }

    let term_anchors = edges_by_from(taxonomy.relationships(), RelationshipKind::TermAnchor);
    let placements = edges_by_to(taxonomy.relationships(), RelationshipKind::Categorization);

    for term in taxonomy.list_nodes_of(NodeKind::Term) {
        let id = term.id.as_str();

        match term_anchors.get(id).map(|a| distinct_sorted(a)) {
            None => violations.push(Violation::UnanchoredTerm {
                term_id: id.to_string(),
            }),
            Some(collections) if collections.len() > 1 => {
                violations.push(Violation::MultipleCollections {
                    node_id: id.to_string(),
                    collection_ids: collections,
                })
            }
            Some(_) => {}
        }

        if let Some(categories) = placements.get(id) {
            let distinct = distinct_sorted(categories);
            if distinct.len() > 1 {
                violations.push(Violation::MultipleCategories {
                    term_id: id.to_string(),
                    category_ids: distinct,
                });
            }
        }
    }

    violations
}

/// Whether walking Containment edges up from `category_id` returns to it
pub fn has_containment_cycle(taxonomy: &MemoryTaxonomy, category_id: &str) -> bool {
    let parents = edges_by_from(taxonomy.relationships(), RelationshipKind::Containment);
    cycles_back(&parents, category_id)
}

fn cycles_back(parents: &HashMap<&str, Vec<&str>>, category_id: &str) -> bool {
    let mut visited = HashSet::new();
    let mut stack = vec![category_id];

    while let Some(id) = stack.pop() {
        for parent in parents.get(id).into_iter().flatten() {
            if *parent == category_id {
                return true;
            }
            if visited.insert(*parent) {
                stack.push(*parent);
            }
        }
    }

    false
}

fn check_endpoints(taxonomy: &MemoryTaxonomy) -> Vec<Violation> {
    let mut violations = Vec::new();

    for rel in taxonomy.relationships() {
        let (from_kind, to_kind) = rel.kind.endpoint_kinds();
        for (node_id, expected) in [(&rel.from, from_kind), (&rel.to, to_kind)] {
            match taxonomy.node(node_id) {
                None => violations.push(Violation::DanglingEndpoint {
                    kind: rel.kind,
                    node_id: node_id.clone(),
                }),
                Some(node) if node.kind != expected => {
                    violations.push(Violation::EndpointKindMismatch {
                        kind: rel.kind,
                        node_id: node_id.clone(),
                        expected,
                        actual: node.kind,
                    })
                }
                Some(_) => {}
            }
        }
    }

    violations
}

/// Categories from `category_id` up through every reachable parent
fn ancestors_inclusive<'a>(
    parents: &HashMap<&'a str, Vec<&'a str>>,
    category_id: &'a str,
) -> Vec<&'a str> {
    let mut seen = HashSet::from([category_id]);
    let mut order = vec![category_id];
    let mut stack = vec![category_id];

    while let Some(id) = stack.pop() {
        for parent in parents.get(id).into_iter().flatten() {
            if seen.insert(*parent) {
                order.push(*parent);
                stack.push(*parent);
            }
        }
    }

    order
}

fn edges_by_from(rels: &[Relationship], kind: RelationshipKind) -> HashMap<&str, Vec<&str>> {
    let mut map: HashMap<&str, Vec<&str>> = HashMap::new();
    for rel in rels.iter().filter(|r| r.kind == kind) {
        map.entry(rel.from.as_str()).or_default().push(rel.to.as_str());
    }
    map
}

fn edges_by_to(rels: &[Relationship], kind: RelationshipKind) -> HashMap<&str, Vec<&str>> {
    let mut map: HashMap<&str, Vec<&str>> = HashMap::new();
    for rel in rels.iter().filter(|r| r.kind == kind) {
        map.entry(rel.to.as_str()).or_default().push(rel.from.as_str());
    }
    map
}

fn distinct_sorted(ids: &[&str]) -> Vec<String> {
    ids.iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
