//! Node identity inside a [`Fragment`](crate::node::Fragment)
//!
//! Nodes live in an arena owned by the fragment; a `NodeId` is the index
//! into that arena. Ids are assigned in insertion order, so a fragment built
//! top-down (as the HTML converter does) numbers nodes in document order.

use std::fmt;

/// Index of a node within its fragment
///
/// - 4 bytes, Copy
/// - Only meaningful for the fragment that produced it
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The root node of every fragment.
    pub const ROOT: Self = Self(0);

    /// Create a NodeId from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 representation
    #[inline]
    pub const fn as_raw(&self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
