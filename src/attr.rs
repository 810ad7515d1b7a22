//! Attribute list for fragment elements
//!
//! Attributes stay a plain `Vec<(String, String)>` in source order. HTML
//! attribute names are ASCII case-insensitive, and lookups here follow that
//! (the parser already lowercases names, hand-built fragments may not).

/// Element attributes as simple key-value pairs
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<String>;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
            Some(attr) => attr.1 = value,
            None => self.push((name, value)),
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|pos| self.remove(pos).1)
    }
}

/// Build an attribute list from borrowed pairs.
///
/// ```
/// use tola_paste::attr::{attrs, AttrsExt};
///
/// let a = attrs(&[("span", "2"), ("width", "40")]);
/// assert_eq!(a.get_attr("width"), Some("40"));
/// ```
pub fn attrs(pairs: &[(&str, &str)]) -> Attrs {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
