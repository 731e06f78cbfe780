mod common;

use common::chain_taxonomy;
use crumbtrail_core::{resolve_trail, ExErrorKind, NodeKind, TrailRequest};
use proptest::prelude::*;

/// (depth, root index, leaf index) with root <= leaf < depth
fn chain_shape() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..10).prop_flat_map(|depth| {
        (Just(depth), 0..depth).prop_flat_map(|(depth, leaf)| (Just(depth), 0..=leaf, Just(leaf)))
    })
}

proptest! {
    #[test]
    fn prop_consistent_chain_resolves_leaf_first_collection_last(
        (depth, _root, leaf) in chain_shape(),
        with_term in any::<bool>(),
    ) {
        let (taxonomy, ids) = chain_taxonomy(depth);
        let mut request = TrailRequest::new("g1")
            .with_root_category(&ids[0])
            .with_leaf_category(&ids[leaf]);
        if with_term {
            request = request.with_term(format!("term-{leaf}"));
        }

        let trail = resolve_trail(&taxonomy, &request).unwrap();

        // term? + leaf..=root + collection
        let expected_len = usize::from(with_term) + (leaf + 1) + 1;
        prop_assert_eq!(trail.len(), expected_len);
        prop_assert_eq!(trail.root().map(|b| b.kind), Some(NodeKind::Collection));

        let most_specific = if with_term { format!("term-{leaf}") } else { ids[leaf].clone() };
        prop_assert_eq!(trail.leaf().map(|b| b.id.clone()), Some(most_specific));
    }

    #[test]
    fn prop_resolution_is_idempotent(
        (depth, _root, leaf) in chain_shape(),
    ) {
        let (taxonomy, ids) = chain_taxonomy(depth);
        let request = TrailRequest::new("g1")
            .with_root_category(&ids[0])
            .with_leaf_category(&ids[leaf])
            .with_term(format!("term-{leaf}"));

        let first = resolve_trail(&taxonomy, &request).unwrap();
        let second = resolve_trail(&taxonomy, &request).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_non_top_root_is_broken_chain(
        (depth, root, leaf) in chain_shape(),
    ) {
        prop_assume!(root > 0);
        let (taxonomy, ids) = chain_taxonomy(depth);
        let request = TrailRequest::new("g1")
            .with_root_category(&ids[root])
            .with_leaf_category(&ids[leaf]);

        let err = resolve_trail(&taxonomy, &request).unwrap_err();

        prop_assert_eq!(err.kind(), ExErrorKind::BrokenChain);
    }

    #[test]
    fn prop_trail_length_matches_supplied_ids_without_intermediates(
        with_root in any::<bool>(),
        with_term in any::<bool>(),
    ) {
        // Depth 1: no intermediate categories, so each supplied id adds one entry
        let (taxonomy, ids) = chain_taxonomy(1);
        let mut request = TrailRequest::new("g1");
        if with_root {
            request = request.with_root_category(&ids[0]);
        }
        if with_term {
            request = request.with_term("term-0");
        }

        let trail = resolve_trail(&taxonomy, &request).unwrap();

        prop_assert_eq!(trail.len(), request.supplied_count());
    }
}
