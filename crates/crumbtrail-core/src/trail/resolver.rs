//! Trail resolution over a `TaxonomyAccessor`
//!
//! ## Logging Ownership
//!
//! `resolve_trail_with_config` owns the lifecycle events for the
//! `resolve_trail` op (`log_op_start!`, `log_op_end!`, `log_op_error!`).
//! Helpers below only emit `tracing::debug!` for individual hops.

use std::collections::HashSet;
use std::time::Instant;

use crate::accessor::TaxonomyAccessor;
use crate::errors::{AccessError, Result, TrailError};
use crate::model::{Breadcrumb, Node, NodeKind, Relationship, RelationshipKind, Trail};
use crate::trail::config::{ParentSelection, ResolverConfig};
use crate::trail::request::{TrailParam, TrailRequest};
use crate::{log_op_end, log_op_error, log_op_start};

const OP_RESOLVE_TRAIL: &str = "resolve_trail";

/// Resolve a breadcrumb trail with the default `ResolverConfig`
///
/// # Errors
///
/// See [`resolve_trail_with_config`].
pub fn resolve_trail<A>(accessor: &A, request: &TrailRequest) -> Result<Trail>
where
    A: TaxonomyAccessor + ?Sized,
{
    resolve_trail_with_config(accessor, request, &ResolverConfig::default())
}

/// Resolve a breadcrumb trail
///
/// Returns the supplied nodes (plus any categories between leaf and root)
/// ordered from the most specific node to the owning collection.
///
/// # Errors
///
/// * `NodeNotFound` - A supplied id does not resolve to a node of its kind
/// * `TermNotAnchored` / `TermNotCategorized` / `RootNotOwned` - Ownership
///   relationships disagree with the supplied ancestry
/// * `ChainRootMismatch` / `ChainCycle` / `ParentChainBroken` /
///   `MultipleParents` - The leaf's containment chain does not lead to the
///   supplied root
/// * `LeafWithoutRoot` - A leaf category was supplied without a root
/// * `AccessorUnavailable` - The accessor failed to answer
pub fn resolve_trail_with_config<A>(
    accessor: &A,
    request: &TrailRequest,
    config: &ResolverConfig,
) -> Result<Trail>
where
    A: TaxonomyAccessor + ?Sized,
{
    log_op_start!(
        OP_RESOLVE_TRAIL,
        collection_id = request.collection_id.as_str(),
        supplied = request.supplied_count() as u64
    );
    let start = Instant::now();

    let trail = resolve_trail_impl(accessor, request, config).map_err(|e| {
        log_op_error!(
            OP_RESOLVE_TRAIL,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        OP_RESOLVE_TRAIL,
        duration_ms = start.elapsed().as_millis() as u64,
        trail_len = trail.len() as u64
    );

    Ok(trail)
}

fn resolve_trail_impl<A>(
    accessor: &A,
    request: &TrailRequest,
    config: &ResolverConfig,
) -> Result<Trail>
where
    A: TaxonomyAccessor + ?Sized,
{
    if let (None, Some(leaf_id)) = (&request.root_category_id, &request.leaf_category_id) {
        return Err(TrailError::LeafWithoutRoot {
            leaf_id: leaf_id.clone(),
        });
    }

    let collection = fetch_node(
        accessor,
        &request.collection_id,
        NodeKind::Collection,
        TrailParam::CollectionId,
    )?;
    let root = request
        .root_category_id
        .as_deref()
        .map(|id| fetch_node(accessor, id, NodeKind::Category, TrailParam::RootCategoryId))
        .transpose()?;
    let leaf = request
        .leaf_category_id
        .as_deref()
        .map(|id| fetch_node(accessor, id, NodeKind::Category, TrailParam::LeafCategoryId))
        .transpose()?;
    let term = request
        .term_id
        .as_deref()
        .map(|id| fetch_node(accessor, id, NodeKind::Term, TrailParam::TermId))
        .transpose()?;

    if let Some(term) = &term {
        verify_term_placement(accessor, term, &collection, root.as_ref(), leaf.as_ref())?;
    }

    let categories = match (root, leaf) {
        (Some(root), Some(leaf)) => walk_category_chain(accessor, &collection, &root, leaf, config)?,
        (Some(root), None) => {
            if config.anchor_lone_root {
                let relationships =
                    fetch_relationships(accessor, &root.id, TrailParam::RootCategoryId)?;
                verify_root_owned(&relationships, &root, &collection)?;
            }
            vec![root]
        }
        (None, _) => Vec::new(),
    };

    let entries: Vec<Breadcrumb> = term
        .into_iter()
        .chain(categories)
        .chain(std::iter::once(collection))
        .map(Breadcrumb::from)
        .collect();

    Ok(Trail::new(entries))
}

fn fetch_node<A>(accessor: &A, id: &str, kind: NodeKind, param: TrailParam) -> Result<Node>
where
    A: TaxonomyAccessor + ?Sized,
{
    accessor
        .get_node(id, kind)
        .map_err(|e| TrailError::from_access(e, param, id))
}

fn fetch_relationships<A>(accessor: &A, id: &str, param: TrailParam) -> Result<Vec<Relationship>>
where
    A: TaxonomyAccessor + ?Sized,
{
    accessor
        .get_relationships(id)
        .map_err(|e| TrailError::from_access(e, param, id))
}

/// Check the term against the deepest supplied ancestor
///
/// Only the leaf is checked when both categories are supplied; the chain
/// walk ties the leaf to the root.
fn verify_term_placement<A>(
    accessor: &A,
    term: &Node,
    collection: &Node,
    root: Option<&Node>,
    leaf: Option<&Node>,
) -> Result<()>
where
    A: TaxonomyAccessor + ?Sized,
{
    let relationships = fetch_relationships(accessor, &term.id, TrailParam::TermId)?;

    match (root, leaf) {
        (None, None) => {
            let mut anchors = relationships
                .iter()
                .filter(|r| r.kind == RelationshipKind::TermAnchor && r.from == term.id);

            match (anchors.next(), anchors.next()) {
                (Some(anchor), None) if anchor.to == collection.id => Ok(()),
                _ => Err(TrailError::TermNotAnchored {
                    term_id: term.id.clone(),
                    collection_id: collection.id.clone(),
                }),
            }
        }
        (Some(root), None) => {
            require_categorization(&relationships, term, root, TrailParam::RootCategoryId)
        }
        (_, Some(leaf)) => {
            require_categorization(&relationships, term, leaf, TrailParam::LeafCategoryId)
        }
    }
}

fn require_categorization(
    relationships: &[Relationship],
    term: &Node,
    category: &Node,
    under: TrailParam,
) -> Result<()> {
    let categorized = relationships
        .iter()
        .any(|r| r.links(RelationshipKind::Categorization, &category.id, &term.id));

    if categorized {
        Ok(())
    } else {
        Err(TrailError::TermNotCategorized {
            term_id: term.id.clone(),
            category_id: category.id.clone(),
            under,
        })
    }
}

fn verify_root_owned(relationships: &[Relationship], root: &Node, collection: &Node) -> Result<()> {
    let owned = relationships
        .iter()
        .any(|r| r.links(RelationshipKind::CollectionAnchor, &root.id, &collection.id));

    if owned {
        Ok(())
    } else {
        Err(TrailError::RootNotOwned {
            category_id: root.id.clone(),
            collection_id: collection.id.clone(),
        })
    }
}

/// Walk Containment edges from the leaf up to the top-most category
///
/// Returns the categories from leaf to root inclusive. The walk stops when
/// the current category has no parent; that category must be `root` and
/// must be anchored to `collection`.
fn walk_category_chain<A>(
    accessor: &A,
    collection: &Node,
    root: &Node,
    leaf: Node,
    config: &ResolverConfig,
) -> Result<Vec<Node>>
where
    A: TaxonomyAccessor + ?Sized,
{
    let leaf_id = leaf.id.clone();
    let mut visited: HashSet<String> = HashSet::from([leaf_id.clone()]);
    let mut current_id = leaf_id.clone();
    let mut relationships = fetch_relationships(accessor, &current_id, TrailParam::LeafCategoryId)?;
    let mut chain = vec![leaf];

    while let Some(parent_id) = select_parent(&current_id, &relationships, config.parent_selection)?
    {
        if !visited.insert(parent_id.clone()) {
            return Err(TrailError::ChainCycle {
                leaf_id,
                category_id: parent_id,
            });
        }

        let parent = accessor
            .get_node(&parent_id, NodeKind::Category)
            .map_err(|e| match e {
                AccessError::NotFound { .. } => TrailError::ParentChainBroken {
                    category_id: current_id.clone(),
                    parent_id: parent_id.clone(),
                },
                other => TrailError::from_access(other, TrailParam::LeafCategoryId, &parent_id),
            })?;

        tracing::debug!(
            category_id = current_id.as_str(),
            parent_id = parent_id.as_str(),
            "followed containment edge"
        );

        relationships = fetch_relationships(accessor, &parent_id, TrailParam::LeafCategoryId)?;
        chain.push(parent);
        current_id = parent_id;
    }

    tracing::debug!(
        leaf_category_id = leaf_id.as_str(),
        top_category_id = current_id.as_str(),
        hops = (chain.len() - 1) as u64,
        "category chain walked"
    );

    if current_id != root.id {
        return Err(TrailError::ChainRootMismatch {
            leaf_id,
            expected_root: root.id.clone(),
            actual_root: current_id,
        });
    }

    // `relationships` now holds the edges incident to the root
    verify_root_owned(&relationships, root, collection)?;

    Ok(chain)
}

/// Pick the parent of `category_id` among its incident relationships
fn select_parent(
    category_id: &str,
    relationships: &[Relationship],
    selection: ParentSelection,
) -> Result<Option<String>> {
    let parents = relationships
        .iter()
        .filter(|r| r.kind == RelationshipKind::Containment && r.from == category_id)
        .map(|r| r.to.as_str());

    match selection {
        ParentSelection::LastSeen => Ok(parents.last().map(str::to_string)),
        ParentSelection::RequireSingle => {
            let mut distinct: Vec<&str> = Vec::new();
            for parent in parents {
                if !distinct.contains(&parent) {
                    distinct.push(parent);
                }
            }

            match distinct.as_slice() {
                [] => Ok(None),
                [only] => Ok(Some((*only).to_string())),
                _ => Err(TrailError::MultipleParents {
                    category_id: category_id.to_string(),
                    parent_ids: distinct.iter().map(|p| p.to_string()).collect(),
                }),
            }
        }
    }
}
