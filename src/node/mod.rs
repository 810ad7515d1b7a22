//! Node types for pasted DOM fragments.
//!
//! A [`Fragment`] owns every node in an arena and hands out [`NodeId`]s.
//! Matchers receive a fragment plus the id of the node they were invoked
//! on, which gives them the parent and descendant access a browser DOM
//! node would.
//!
//! Only elements and text are represented. Comments, doctypes and
//! processing instructions carry nothing the table matchers look at.

mod element;
mod fragment;
mod text;

pub use element::Element;
pub use fragment::{Descendants, Fragment};
pub use text::Text;

use smallvec::SmallVec;

use crate::id::NodeId;

/// Content of a node - either Element or Text.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Element(Element),
    Text(Text),
}

impl NodeKind {
    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, NodeKind::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text(_))
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            NodeKind::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as mutable element reference.
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            NodeKind::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Arena slot: node content plus its links into the tree.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; 8]>,
    /// Element or text payload
    pub kind: NodeKind,
}

impl NodeData {
    pub(crate) fn new(parent: Option<NodeId>, kind: NodeKind) -> Self {
        Self {
            parent,
            children: SmallVec::new(),
            kind,
        }
    }

    /// Parent node, `None` for the fragment root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in document order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
