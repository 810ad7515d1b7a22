//! Element payload - tag name and attributes

use compact_str::CompactString;

use crate::attr::{Attrs, AttrsExt};

// =============================================================================
// Element
// =============================================================================

/// HTML element as seen by the matchers
///
/// Children are not stored here; they live in the owning fragment's arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase HTML tag name
    pub tag: CompactString,
    /// Element attributes
    pub attrs: Attrs,
}

impl Element {
    /// Create an element without attributes
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self::with_attrs(tag, Vec::new())
    }

    /// Create an element with attributes. The tag is lowercased.
    pub fn with_attrs(tag: impl Into<CompactString>, attrs: Attrs) -> Self {
        let tag = tag.into();
        let tag = if tag.bytes().any(|b| b.is_ascii_uppercase()) {
            CompactString::from(tag.to_ascii_lowercase())
        } else {
            tag
        };
        Self { tag, attrs }
    }

    /// Check the tag name, ignoring ASCII case (`TR` == `tr`)
    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Get attribute value by name
    #[inline]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Check if attribute exists
    #[inline]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    /// Set attribute value (update if exists, add if not)
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.set_attr(name, value);
    }
}
