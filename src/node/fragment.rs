//! Fragment type and related utilities
//!
//! The arena that owns a pasted DOM subtree, with the navigation and query
//! APIs the matchers rely on (`parentNode`, `querySelectorAll`, attributes).

use compact_str::CompactString;

use crate::attr::Attrs;
use crate::error::{PasteError, PasteResult};
use crate::id::NodeId;

use super::{Element, NodeData, NodeKind, Text};

// =============================================================================
// Fragment
// =============================================================================

/// Pasted DOM subtree rooted at a single element
///
/// ```
/// use tola_paste::node::Fragment;
///
/// let mut frag = Fragment::new("table");
/// let tr = frag.append_element(frag.root(), "tr", vec![]).unwrap();
/// let td = frag.append_element(tr, "td", vec![]).unwrap();
/// frag.append_text(td, "a").unwrap();
///
/// assert_eq!(frag.parent(td), Some(tr));
/// assert_eq!(frag.query_all(frag.root(), "td"), vec![td]);
/// ```
#[derive(Debug, Clone)]
pub struct Fragment {
    nodes: Vec<NodeData>,
}

impl Fragment {
    /// Create a fragment whose root is an empty element
    pub fn new(root_tag: impl Into<CompactString>) -> Self {
        Self::with_root(Element::new(root_tag))
    }

    /// Create a fragment from a prepared root element
    pub fn with_root(root: Element) -> Self {
        Self {
            nodes: vec![NodeData::new(None, NodeKind::Element(root))],
        }
    }

    /// Id of the root element
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Total number of nodes, root included
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a fragment has at least its root
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Building
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an element as the last child of `parent`
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: impl Into<CompactString>,
        attrs: Attrs,
    ) -> PasteResult<NodeId> {
        self.append(parent, NodeKind::Element(Element::with_attrs(tag, attrs)))
    }

    /// Append a text node as the last child of `parent`
    pub fn append_text(&mut self, parent: NodeId, content: impl Into<String>) -> PasteResult<NodeId> {
        self.append(parent, NodeKind::Text(Text::new(content)))
    }

    fn append(&mut self, parent: NodeId, kind: NodeKind) -> PasteResult<NodeId> {
        self.element(parent)?;
        let raw = u32::try_from(self.nodes.len())
            .map_err(|_| PasteError::parse("fragment exceeds u32::MAX nodes"))?;
        let id = NodeId::from_raw(raw);
        self.nodes.push(NodeData::new(Some(parent), kind));
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Node access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get a node, `None` if the id is foreign to this fragment
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.index())
    }

    /// Get a node or fail with [`PasteError::UnknownNode`]
    pub fn node(&self, id: NodeId) -> PasteResult<&NodeData> {
        self.get(id).ok_or(PasteError::UnknownNode(id))
    }

    /// Get a node's element payload, failing for text nodes
    pub fn element(&self, id: NodeId) -> PasteResult<&Element> {
        self.node(id)?
            .kind
            .as_element()
            .ok_or(PasteError::NotAnElement(id))
    }

    /// Mutable element payload
    pub fn element_mut(&mut self, id: NodeId) -> PasteResult<&mut Element> {
        self.nodes
            .get_mut(id.index())
            .ok_or(PasteError::UnknownNode(id))?
            .kind
            .as_element_mut()
            .ok_or(PasteError::NotAnElement(id))
    }

    /// Parent of a node (`None` for the root or unknown ids)
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(NodeData::parent)
    }

    /// Child ids in document order (empty for unknown ids)
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(NodeData::children).unwrap_or_default()
    }

    /// Tag name of an element node
    #[inline]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id)
            .and_then(|n| n.kind.as_element())
            .map(|e| e.tag.as_str())
    }

    /// Check whether `id` is an element with the given tag (ASCII case-insensitive)
    #[inline]
    pub fn is_tag(&self, id: NodeId, tag: &str) -> bool {
        self.tag(id).is_some_and(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Attribute lookup on an element node
    #[inline]
    pub fn get_attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)
            .and_then(|n| n.kind.as_element())
            .and_then(|e| e.get_attr(name))
    }

    /// Check whether an element node carries an attribute
    #[inline]
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.get(id)
            .and_then(|n| n.kind.as_element())
            .is_some_and(|e| e.has_attr(name))
    }

    /// Walk `depth` steps up the parent chain (1 = parent, 2 = grandparent)
    pub fn ancestor(&self, id: NodeId, depth: usize) -> PasteResult<NodeId> {
        self.node(id)?;
        let mut current = id;
        for _ in 0..depth {
            current = self
                .parent(current)
                .ok_or(PasteError::MissingAncestor { node: id, depth })?;
        }
        Ok(current)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Iterate over all descendants of `id` in document order (`id` excluded)
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants::new(self, id)
    }

    /// Descendant elements with the given tag, in document order
    ///
    /// Equivalent to `querySelectorAll(tag)` for a plain type selector.
    pub fn query_all(&self, id: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(id)
            .filter(|&n| self.is_tag(n, tag))
            .collect()
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut result = String::new();
        if let Some(NodeKind::Text(t)) = self.get(id).map(|n| &n.kind) {
            result.push_str(&t.content);
        }
        for n in self.descendants(id) {
            if let Some(t) = self.get(n).and_then(|d| d.kind.as_text()) {
                result.push_str(&t.content);
            }
        }
        result
    }
}

// =============================================================================
// Descendants iterator
// =============================================================================

/// Pre-order traversal below a node
pub struct Descendants<'a> {
    fragment: &'a Fragment,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    fn new(fragment: &'a Fragment, id: NodeId) -> Self {
        let stack = fragment.children(id).iter().rev().copied().collect();
        Self { fragment, stack }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.fragment.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::attrs;

    /// table > tbody > (tr > td, td) , (tr > td > table > tr > td)
    fn nested() -> (Fragment, Vec<NodeId>) {
        let mut f = Fragment::new("table");
        let tbody = f.append_element(f.root(), "tbody", vec![]).unwrap();
        let tr1 = f.append_element(tbody, "tr", attrs(&[("data-row", "r1")])).unwrap();
        let td1 = f.append_element(tr1, "td", vec![]).unwrap();
        let td2 = f.append_element(tr1, "td", vec![]).unwrap();
        let tr2 = f.append_element(tbody, "tr", vec![]).unwrap();
        let td3 = f.append_element(tr2, "td", vec![]).unwrap();
        let inner = f.append_element(td3, "table", vec![]).unwrap();
        let tr3 = f.append_element(inner, "tr", vec![]).unwrap();
        (f, vec![tbody, tr1, td1, td2, tr2, td3, inner, tr3])
    }

    #[test]
    fn test_query_all_document_order() {
        let (f, ids) = nested();
        let (tr1, tr2, tr3) = (ids[1], ids[4], ids[7]);
        assert_eq!(f.query_all(f.root(), "tr"), vec![tr1, tr2, tr3]);
        assert_eq!(f.query_all(f.root(), "TR"), vec![tr1, tr2, tr3]);
        assert_eq!(f.query_all(tr1, "td"), vec![ids[2], ids[3]]);
        assert!(f.query_all(tr1, "th").is_empty());
    }

    #[test]
    fn test_ancestor_walk() {
        let (f, ids) = nested();
        let td1 = ids[2];
        assert_eq!(f.ancestor(td1, 0).unwrap(), td1);
        assert_eq!(f.ancestor(td1, 1).unwrap(), ids[1]);
        assert_eq!(f.ancestor(td1, 3).unwrap(), f.root());
        assert!(matches!(
            f.ancestor(td1, 4),
            Err(PasteError::MissingAncestor { depth: 4, .. })
        ));
    }

    #[test]
    fn test_attrs_and_tags() {
        let (f, ids) = nested();
        assert!(f.is_tag(f.root(), "TABLE"));
        assert_eq!(f.get_attr(ids[1], "data-row"), Some("r1"));
        assert!(f.has_attr(ids[1], "data-row"));
        assert!(!f.has_attr(ids[4], "data-row"));
    }

    #[test]
    fn test_text_nodes_are_leaves() {
        let mut f = Fragment::new("td");
        let text = f.append_text(f.root(), "a").unwrap();
        f.append_text(f.root(), "b").unwrap();
        assert_eq!(f.text_content(f.root()), "ab");
        assert_eq!(f.tag(text), None);
        assert!(matches!(
            f.append_element(text, "span", vec![]),
            Err(PasteError::NotAnElement(_))
        ));
    }

    #[test]
    fn test_unknown_node() {
        let f = Fragment::new("div");
        let foreign = NodeId::from_raw(99);
        assert!(f.get(foreign).is_none());
        assert!(f.children(foreign).is_empty());
        assert!(matches!(f.node(foreign), Err(PasteError::UnknownNode(_))));
    }
}
