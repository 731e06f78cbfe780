use serde::{Deserialize, Serialize};

/// Names of the identifiers a trail request accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailParam {
    CollectionId,
    RootCategoryId,
    LeafCategoryId,
    TermId,
}

impl TrailParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailParam::CollectionId => "collection_id",
            TrailParam::RootCategoryId => "root_category_id",
            TrailParam::LeafCategoryId => "leaf_category_id",
            TrailParam::TermId => "term_id",
        }
    }
}

impl std::fmt::Display for TrailParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifiers supplied to one resolution
///
/// `collection_id` is always required; the presence of the other three
/// selects the validation branch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrailRequest {
    pub collection_id: String,
    #[serde(default)]
    pub root_category_id: Option<String>,
    #[serde(default)]
    pub leaf_category_id: Option<String>,
    #[serde(default)]
    pub term_id: Option<String>,
}

impl TrailRequest {
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            ..Self::default()
        }
    }

    pub fn with_root_category(mut self, id: impl Into<String>) -> Self {
        self.root_category_id = Some(id.into());
        self
    }

    pub fn with_leaf_category(mut self, id: impl Into<String>) -> Self {
        self.leaf_category_id = Some(id.into());
        self
    }

    pub fn with_term(mut self, id: impl Into<String>) -> Self {
        self.term_id = Some(id.into());
        self
    }

    /// Number of identifiers supplied, collection included
    pub fn supplied_count(&self) -> usize {
        1 + [
            &self.root_category_id,
            &self.leaf_category_id,
            &self.term_id,
        ]
        .iter()
        .filter(|id| id.is_some())
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_supplied_count() {
        let req = TrailRequest::new("g1");
        assert_eq!(req.supplied_count(), 1);

        let req = req.with_root_category("c1").with_leaf_category("c2").with_term("t1");
        assert_eq!(req.supplied_count(), 4);
        assert_eq!(req.term_id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_deserializes_with_missing_optionals() {
        let req: TrailRequest = serde_json::from_str(r#"{"collection_id":"g1"}"#).unwrap();
        assert_eq!(req, TrailRequest::new("g1"));
    }

    #[test]
    fn test_param_names() {
        assert_eq!(TrailParam::LeafCategoryId.to_string(), "leaf_category_id");
    }
}
