//! Insert-only delta documents
//!
//! A pasted fragment becomes a list of insert operations, each optionally
//! carrying formatting attributes. The JSON form matches what the editor
//! expects from its clipboard:
//!
//! ```json
//! { "ops": [ { "insert": "a\n", "attributes": { "table-cell": 1 } } ] }
//! ```
//!
//! Retain and delete operations never appear in clipboard output and are
//! not modeled.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Formatting attributes of an op, in insertion order.
pub type AttributeMap = Map<String, Value>;

// =============================================================================
// Insert
// =============================================================================

/// Inserted content: a run of text or a single embed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insert {
    Text(String),
    Embed(Map<String, Value>),
}

impl Insert {
    /// Document length of the insert.
    ///
    /// Text is measured in UTF-16 code units so positions line up with the
    /// editor's; an embed always has length 1.
    pub fn len(&self) -> usize {
        match self {
            Insert::Text(s) => s.encode_utf16().count(),
            Insert::Embed(_) => 1,
        }
    }

    /// True for an empty text insert
    pub fn is_empty(&self) -> bool {
        matches!(self, Insert::Text(s) if s.is_empty())
    }

    /// Get text content, `None` for embeds
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Insert::Text(s) => Some(s),
            Insert::Embed(_) => None,
        }
    }
}

impl From<&str> for Insert {
    fn from(s: &str) -> Self {
        Insert::Text(s.to_owned())
    }
}

impl From<String> for Insert {
    fn from(s: String) -> Self {
        Insert::Text(s)
    }
}

impl From<Map<String, Value>> for Insert {
    fn from(embed: Map<String, Value>) -> Self {
        Insert::Embed(embed)
    }
}

// =============================================================================
// Op
// =============================================================================

/// A single insert operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Op {
    pub insert: Insert,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
}

impl Op {
    /// Create an op without attributes
    pub fn new(insert: impl Into<Insert>) -> Self {
        Self {
            insert: insert.into(),
            attributes: None,
        }
    }

    /// Create an op with attributes; an empty map is stored as `None`
    pub fn with_attributes(insert: impl Into<Insert>, attributes: AttributeMap) -> Self {
        Self {
            insert: insert.into(),
            attributes: (!attributes.is_empty()).then_some(attributes),
        }
    }

    /// Look up one attribute
    #[inline]
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.as_ref().and_then(|a| a.get(name))
    }

    /// Document length of this op
    #[inline]
    pub fn len(&self) -> usize {
        self.insert.len()
    }

    /// True when the op inserts nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.insert.is_empty()
    }
}

// =============================================================================
// Delta
// =============================================================================

/// Ordered list of insert operations
///
/// `push` keeps the list normalized: adjacent text inserts with equal
/// attributes are merged into one op.
///
/// ```
/// use tola_paste::delta::Delta;
/// use serde_json::json;
///
/// let mut delta = Delta::new();
/// delta.insert("a", None).insert("b", None);
/// assert_eq!(delta.ops().len(), 1);
/// assert_eq!(serde_json::to_value(&delta).unwrap(), json!({ "ops": [{ "insert": "ab" }] }));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    #[serde(default)]
    ops: Vec<Op>,
}

impl Delta {
    /// Create an empty delta
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations in order
    #[inline]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Mutable operations, for in-place attribute rewrites
    #[inline]
    pub fn ops_mut(&mut self) -> &mut [Op] {
        &mut self.ops
    }

    /// Sum of op lengths
    pub fn len(&self) -> usize {
        self.ops.iter().map(Op::len).sum()
    }

    /// True when the delta has zero length
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert content. Empty text is ignored; empty attributes are dropped.
    pub fn insert(&mut self, value: impl Into<Insert>, attributes: Option<AttributeMap>) -> &mut Self {
        let insert = value.into();
        if insert.is_empty() {
            return self;
        }
        self.push(Op::with_attributes(insert, attributes.unwrap_or_default()))
    }

    /// Append an op, merging it into the last one when both are text
    /// with equal attributes.
    pub fn push(&mut self, op: Op) -> &mut Self {
        if let Some(last) = self.ops.last_mut() {
            if last.attributes == op.attributes {
                if let (Insert::Text(prev), Insert::Text(next)) = (&mut last.insert, &op.insert) {
                    prev.push_str(next);
                    return self;
                }
            }
        }
        self.ops.push(op);
        self
    }

    /// Append another delta. Its first op may merge with our last one.
    pub fn concat(mut self, other: Delta) -> Self {
        let mut rest = other.ops.into_iter();
        if let Some(first) = rest.next() {
            self.push(first);
            self.ops.extend(rest);
        }
        self
    }
}

impl FromIterator<Op> for Delta {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        let mut delta = Delta::new();
        for op in iter {
            delta.push(op);
        }
        delta
    }
}

impl IntoIterator for Delta {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Delta {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

// =============================================================================
// Value helpers
// =============================================================================

/// JavaScript truthiness of an attribute value.
///
/// `null`, `false`, `0`, `NaN`-like numbers and `""` are falsy; arrays and
/// objects are always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Single-entry attribute map.
pub fn attribute(name: impl Into<String>, value: impl Into<Value>) -> AttributeMap {
    let mut map = AttributeMap::new();
    map.insert(name.into(), value.into());
    map
}

// =============================================================================
// Tests
// =============================================================================
