use std::sync::atomic::{AtomicUsize, Ordering};

use crumbtrail_core::errors::AccessResult;
use crumbtrail_core::{AccessError, MemoryTaxonomy, Node, NodeKind, Relationship, TaxonomyAccessor};

/// Finance glossary used across the resolution tests
///
/// ```text
/// g1 Finance
/// ├── c1 Accounts            (anchored to g1)
/// │   └── c2 Receivables
/// │       └── t1 Invoice
/// │   └── t3 Ledger          (categorized directly under c1)
/// └── t2 Audit               (no category)
/// g2 Legal
/// └── c9 Contracts           (anchored to g2)
/// ```
#[allow(dead_code)]
pub fn finance_taxonomy() -> MemoryTaxonomy {
    MemoryTaxonomy::new()
        .with_node(Node::collection("g1", "Finance"))
        .with_node(Node::collection("g2", "Legal"))
        .with_node(Node::category("c1", "Accounts"))
        .with_node(Node::category("c2", "Receivables"))
        .with_node(Node::category("c9", "Contracts"))
        .with_node(Node::term("t1", "Invoice"))
        .with_node(Node::term("t2", "Audit"))
        .with_node(Node::term("t3", "Ledger"))
        .with_relationship(Relationship::collection_anchor("c1", "g1"))
        .with_relationship(Relationship::collection_anchor("c9", "g2"))
        .with_relationship(Relationship::containment("c2", "c1"))
        .with_relationship(Relationship::term_anchor("t1", "g1"))
        .with_relationship(Relationship::categorization("c2", "t1"))
        .with_relationship(Relationship::term_anchor("t2", "g1"))
        .with_relationship(Relationship::term_anchor("t3", "g1"))
        .with_relationship(Relationship::categorization("c1", "t3"))
}

/// Linear chain of `depth` categories under collection `g1`
///
/// `cat-0` is the anchored root; `cat-i` is contained in `cat-(i-1)`. Each
/// category `cat-i` holds one term `term-i`. Returns the taxonomy and the
/// category ids root-first.
#[allow(dead_code)]
pub fn chain_taxonomy(depth: usize) -> (MemoryTaxonomy, Vec<String>) {
    let mut taxonomy = MemoryTaxonomy::new().with_node(Node::collection("g1", "Glossary"));
    let mut ids = Vec::with_capacity(depth);

    for i in 0..depth {
        let id = format!("cat-{i}");
        taxonomy.insert_node(Node::category(&id, format!("Category {i}")));
        if i == 0 {
            taxonomy.insert_relationship(Relationship::collection_anchor(&id, "g1"));
        } else {
            taxonomy.insert_relationship(Relationship::containment(&id, &ids[i - 1]));
        }

        let term_id = format!("term-{i}");
        taxonomy.insert_node(Node::term(&term_id, format!("Term {i}")));
        taxonomy.insert_relationship(Relationship::term_anchor(&term_id, "g1"));
        taxonomy.insert_relationship(Relationship::categorization(&id, &term_id));

        ids.push(id);
    }

    (taxonomy, ids)
}

/// Accessor whose relationship lookups fail for one node id
#[allow(dead_code)]
pub struct UnavailableAccessor {
    pub inner: MemoryTaxonomy,
    pub fail_on: String,
}

impl TaxonomyAccessor for UnavailableAccessor {
    fn get_node(&self, id: &str, kind: NodeKind) -> AccessResult<Node> {
        self.inner.get_node(id, kind)
    }

    fn get_relationships(&self, id: &str) -> AccessResult<Vec<crumbtrail_core::Relationship>> {
        if id == self.fail_on {
            return Err(AccessError::Unavailable {
                message: "connection reset".to_string(),
            });
        }
        self.inner.get_relationships(id)
    }
}

/// Accessor counting every lookup it serves
#[allow(dead_code)]
#[derive(Default)]
pub struct CountingAccessor {
    pub inner: MemoryTaxonomy,
    pub node_lookups: AtomicUsize,
    pub relationship_lookups: AtomicUsize,
}

#[allow(dead_code)]
impl CountingAccessor {
    pub fn new(inner: MemoryTaxonomy) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> (usize, usize) {
        (
            self.node_lookups.load(Ordering::SeqCst),
            self.relationship_lookups.load(Ordering::SeqCst),
        )
    }
}

impl TaxonomyAccessor for CountingAccessor {
    fn get_node(&self, id: &str, kind: NodeKind) -> AccessResult<Node> {
        self.node_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_node(id, kind)
    }

    fn get_relationships(&self, id: &str) -> AccessResult<Vec<crumbtrail_core::Relationship>> {
        self.relationship_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_relationships(id)
    }
}
