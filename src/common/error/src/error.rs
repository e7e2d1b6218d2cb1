//! Core error types for hypergraphdb.

use thiserror::Error;

/// Result type alias using `HgError`.
pub type HgResult<T> = std::result::Result<T, HgError>;

/// Core error type for hypergraph operations.
///
/// All variants are named failure results: the graph is left unmodified when
/// one of them is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HgError {
    /// A node handle that does not belong to the graph it was used with.
    #[error("InvalidNode: no node with index {0}")]
    InvalidNode(usize),

    /// The requested relation needs a containing scope that does not exist.
    #[error("NoRelation: {0}")]
    NoRelation(String),

    /// Hyperedge members share no containment ancestor.
    #[error("NoCommonContainer: {0}")]
    NoCommonContainer(String),

    /// A containment move would make a node its own ancestor.
    #[error("ContainmentCycle: {0}")]
    ContainmentCycle(String),

    /// A background traversal was aborted before it could finish.
    #[error("Cancelled: {0}")]
    Cancelled(String),

    /// Internal error (bug in hypergraphdb).
    #[error("InternalError: {0}")]
    InternalError(String),
}

impl HgError {
    /// Create a new `InvalidNode` error for the given arena index.
    pub const fn invalid_node(index: usize) -> Self {
        Self::InvalidNode(index)
    }

    /// Create a new `NoRelation` error.
    pub fn no_relation<S: Into<String>>(msg: S) -> Self {
        Self::NoRelation(msg.into())
    }

    /// Create a new `NoCommonContainer` error.
    pub fn no_common_container<S: Into<String>>(msg: S) -> Self {
        Self::NoCommonContainer(msg.into())
    }

    /// Create a new `Cancelled` error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        Self::Cancelled(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }
}

/// Ensure a condition holds, returning the given `HgError` variant if not.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::HgError::$variant(format!($($msg)*)));
        }
    };
}
