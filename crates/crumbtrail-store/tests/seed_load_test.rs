// Integration tests for loading seeds and resolving trails against them

use crumbtrail_core::{resolve_trail, ExErrorKind, TrailRequest};
use crumbtrail_store::{load_taxonomy_file, LoadOptions};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_loaded_seed_resolves_full_trail() {
    // Given: The finance seed loaded in strict mode
    let loaded =
        load_taxonomy_file(&fixtures_dir().join("seed_finance.yaml"), &LoadOptions::strict())
            .unwrap();

    // When: We resolve the invoice under receivables
    let request = TrailRequest::new("g1")
        .with_root_category("c1")
        .with_leaf_category("c2")
        .with_term("t1");
    let trail = resolve_trail(&loaded.taxonomy, &request).unwrap();

    // Then: The trail runs leaf to collection
    assert_eq!(trail.ids(), vec!["t1", "c2", "c1", "g1"]);
    assert_eq!(loaded.digest.len(), 64);
}

#[test]
fn test_same_seed_same_digest_across_copies() {
    // Given: The finance seed copied to a scratch directory
    let dir = TempDir::new().unwrap();
    let copy = dir.path().join("copy.yaml");
    fs::copy(fixtures_dir().join("seed_finance.yaml"), &copy).unwrap();

    // When: Both are loaded
    let original =
        load_taxonomy_file(&fixtures_dir().join("seed_finance.yaml"), &LoadOptions::default())
            .unwrap();
    let copied = load_taxonomy_file(&copy, &LoadOptions::default()).unwrap();

    // Then: The digests match
    assert_eq!(original.digest, copied.digest);
}

#[test]
fn test_strict_load_rejects_multi_parent_seed() {
    let path = fixtures_dir().join("seed_multi_parent.yaml");

    let err = load_taxonomy_file(&path, &LoadOptions::strict()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvariantViolation);
    assert!(err.message().contains("multiple parents"));
}

#[test]
fn test_lenient_load_uses_last_declared_parent() {
    // Given: A category whose declared parent is c1 and whose raw edge adds c3
    let loaded =
        load_taxonomy_file(&fixtures_dir().join("seed_multi_parent.yaml"), &LoadOptions::default())
            .unwrap();

    // When: We resolve from c2 up to c3
    let request = TrailRequest::new("g1")
        .with_root_category("c3")
        .with_leaf_category("c2");
    let trail = resolve_trail(&loaded.taxonomy, &request).unwrap();

    // Then: The raw edge, declared last, wins the tie-break
    assert_eq!(trail.ids(), vec!["c2", "c3", "g1"]);

    // And: Asking for the other parent as root is a broken chain
    let other = TrailRequest::new("g1")
        .with_root_category("c1")
        .with_leaf_category("c2");
    let err = resolve_trail(&loaded.taxonomy, &other).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::BrokenChain);
}

#[test]
fn test_invalid_yaml_in_scratch_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "schema_version: [not a number").unwrap();

    let err = load_taxonomy_file(&path, &LoadOptions::default()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert!(err.message().starts_with("YAML parse error"));
}
