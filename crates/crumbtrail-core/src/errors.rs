use crumbtrail_core_types::RequestId;
use thiserror::Error;

use crate::model::NodeKind;
use crate::trail::TrailParam;

/// Result type alias using TrailError
pub type Result<T> = std::result::Result<T, TrailError>;

/// Result type returned by taxonomy accessors
pub type AccessResult<T> = std::result::Result<T, AccessError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every failure the crumbtrail crates report. Each
/// kind maps to a stable error code used by the CLI, by log capture in tests
/// and by any service layer translating failures into responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Resolution
    NodeNotFound,
    InconsistentAnchoring,
    BrokenChain,
    InvalidInput,

    // Taxonomy integrity
    InvariantViolation,

    // Integration/IO
    ExternalService,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NodeNotFound => "ERR_NODE_NOT_FOUND",
            ExErrorKind::InconsistentAnchoring => "ERR_INCONSISTENT_ANCHORING",
            ExErrorKind::BrokenChain => "ERR_BROKEN_CHAIN",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether retrying the same request could produce a different outcome
    ///
    /// Only transport failures qualify; taxonomy content does not change
    /// within one request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ExErrorKind::ExternalService | ExErrorKind::Io)
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the context needed to point a caller at
/// the offending input.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    param: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            param: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Name the request parameter that caused the failure
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(param) = &self.param {
            write!(f, " (param: {})", param)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failure reported by a taxonomy accessor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    /// No node with this id and kind exists
    #[error("{kind} not found: {node_id}")]
    NotFound { node_id: String, kind: NodeKind },

    /// The backing store could not be reached
    #[error("Taxonomy accessor unavailable: {message}")]
    Unavailable { message: String },
}

/// Breadcrumb trail resolution failures
///
/// Every variant is terminal for the request that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrailError {
    // ===== NodeNotFound =====
    /// A supplied identifier does not resolve to a node of the expected kind
    #[error("{param} {node_id} does not resolve to a {kind}")]
    NodeNotFound {
        param: TrailParam,
        node_id: String,
        kind: NodeKind,
    },

    // ===== InconsistentAnchoring =====
    /// Term has no single anchor to the supplied collection
    #[error("Term {term_id} is not anchored to the supplied collection {collection_id}")]
    TermNotAnchored {
        term_id: String,
        collection_id: String,
    },

    /// Term is not categorized under the supplied category
    #[error("Term {term_id} is not categorized under {under} {category_id}")]
    TermNotCategorized {
        term_id: String,
        category_id: String,
        under: TrailParam,
    },

    /// Root category is not anchored to the supplied collection
    #[error("Root category {category_id} is not owned by the supplied collection {collection_id}")]
    RootNotOwned {
        category_id: String,
        collection_id: String,
    },

    // ===== BrokenChain =====
    /// Walking up from the leaf ended somewhere other than the supplied root
    #[error("Supplied root {expected_root} is not the actual root of leaf {leaf_id}'s chain (walk ended at {actual_root})")]
    ChainRootMismatch {
        leaf_id: String,
        expected_root: String,
        actual_root: String,
    },

    /// Walking up from the leaf revisited a category
    #[error("Containment cycle detected at category {category_id} while walking up from leaf {leaf_id}")]
    ChainCycle {
        leaf_id: String,
        category_id: String,
    },

    /// A containment edge points at a category that does not exist
    #[error("Category chain broken: {category_id} is contained in missing category {parent_id}")]
    ParentChainBroken {
        category_id: String,
        parent_id: String,
    },

    /// Category declares more than one parent under single-parent selection
    #[error("Category {category_id} declares multiple parents: {parent_ids:?}")]
    MultipleParents {
        category_id: String,
        parent_ids: Vec<String>,
    },

    // ===== InvalidInput =====
    /// Leaf category supplied without its root category
    #[error("Leaf category {leaf_id} supplied without a root category")]
    LeafWithoutRoot { leaf_id: String },

    // ===== ExternalService =====
    /// Accessor transport failure while reading a node or its relationships
    #[error("Taxonomy accessor unavailable while reading {param} {node_id}: {message}")]
    AccessorUnavailable {
        param: TrailParam,
        node_id: String,
        message: String,
    },
}

impl TrailError {
    /// Map an accessor failure onto the request parameter being read
    pub fn from_access(err: AccessError, param: TrailParam, node_id: &str) -> Self {
        match err {
            AccessError::NotFound { node_id, kind } => TrailError::NodeNotFound {
                param,
                node_id,
                kind,
            },
            AccessError::Unavailable { message } => TrailError::AccessorUnavailable {
                param,
                node_id: node_id.to_string(),
                message,
            },
        }
    }

    /// Canonical classification of this failure
    pub fn kind(&self) -> ExErrorKind {
        match self {
            TrailError::NodeNotFound { .. } => ExErrorKind::NodeNotFound,
            TrailError::TermNotAnchored { .. }
            | TrailError::TermNotCategorized { .. }
            | TrailError::RootNotOwned { .. } => ExErrorKind::InconsistentAnchoring,
            TrailError::ChainRootMismatch { .. }
            | TrailError::ChainCycle { .. }
            | TrailError::ParentChainBroken { .. }
            | TrailError::MultipleParents { .. } => ExErrorKind::BrokenChain,
            TrailError::LeafWithoutRoot { .. } => ExErrorKind::InvalidInput,
            TrailError::AccessorUnavailable { .. } => ExErrorKind::ExternalService,
        }
    }

    /// The request parameter the failure is attributed to
    pub fn param(&self) -> TrailParam {
        match self {
            TrailError::NodeNotFound { param, .. } => *param,
            TrailError::AccessorUnavailable { param, .. } => *param,
            TrailError::TermNotAnchored { .. } | TrailError::TermNotCategorized { .. } => {
                TrailParam::TermId
            }
            TrailError::RootNotOwned { .. } | TrailError::ChainRootMismatch { .. } => {
                TrailParam::RootCategoryId
            }
            TrailError::ChainCycle { .. }
            | TrailError::ParentChainBroken { .. }
            | TrailError::MultipleParents { .. }
            | TrailError::LeafWithoutRoot { .. } => TrailParam::LeafCategoryId,
        }
    }

    /// The node the failure is about
    fn entity_id(&self) -> &str {
        match self {
            TrailError::NodeNotFound { node_id, .. } => node_id,
            TrailError::AccessorUnavailable { node_id, .. } => node_id,
            TrailError::TermNotAnchored { term_id, .. } => term_id,
            TrailError::TermNotCategorized { term_id, .. } => term_id,
            TrailError::RootNotOwned { category_id, .. } => category_id,
            TrailError::ChainRootMismatch { expected_root, .. } => expected_root,
            TrailError::ChainCycle { category_id, .. } => category_id,
            TrailError::ParentChainBroken { category_id, .. } => category_id,
            TrailError::MultipleParents { category_id, .. } => category_id,
            TrailError::LeafWithoutRoot { leaf_id } => leaf_id,
        }
    }
}

impl From<TrailError> for ExError {
    fn from(err: TrailError) -> Self {
        ExError::new(err.kind())
            .with_op("resolve_trail")
            .with_param(err.param().as_str())
            .with_entity_id(err.entity_id())
            .with_message(err.to_string())
    }
}

impl From<AccessError> for ExError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotFound { ref node_id, .. } => ExError::new(ExErrorKind::NodeNotFound)
                .with_entity_id(node_id.clone())
                .with_message(err.to_string()),
            AccessError::Unavailable { message } => {
                ExError::new(ExErrorKind::ExternalService).with_message(message)
            }
        }
    }
}
