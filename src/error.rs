//! Error types for tola-paste.
//!
//! Matchers run over a host-provided fragment. Structural problems that a
//! browser DOM would surface as exceptions (a row without a parent, a text
//! node where an element is expected) are reported here instead.

use thiserror::Error;

use crate::id::NodeId;

/// Errors that can occur while matching pasted content.
#[derive(Debug, Error)]
pub enum PasteError {
    /// The node id does not belong to the fragment
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// The operation needs an element but the node is text
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// Walking up the parent chain ran out of nodes
    #[error("node {node} has no ancestor at depth {depth}")]
    MissingAncestor {
        /// Node the walk started from
        node: NodeId,
        /// Requested depth (1 = parent)
        depth: usize,
    },

    /// Clipboard HTML could not be turned into a fragment
    #[error("html parse error: {0}")]
    Parse(String),
}

/// Result type alias for paste operations.
pub type PasteResult<T> = Result<T, PasteError>;

impl PasteError {
    /// Create a parse error with a message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
