//! Canonical schema constants for structured logging and events
//!
//! `tracing` macros take field names as literal tokens, so emitters spell
//! these keys out; readers (the capture layer, log assertions) look fields
//! up through the constants.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Taxonomy identifiers
pub const FIELD_COLLECTION_ID: &str = "collection_id";
pub const FIELD_LEAF_CATEGORY_ID: &str = "leaf_category_id";
pub const FIELD_CATEGORY_ID: &str = "category_id";

// Sizes
pub const FIELD_TRAIL_LEN: &str = "trail_len";
pub const FIELD_HOPS: &str = "hops";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_PARAM: &str = "err.param";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_TRAIL_LEN.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_fields_are_namespaced() {
        for key in [FIELD_ERR_KIND, FIELD_ERR_CODE, FIELD_ERR_PARAM] {
            assert!(key.starts_with("err."), "{key} should live under err.");
        }
    }
}
