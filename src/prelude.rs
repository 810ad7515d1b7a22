//! Prelude module for common imports.
//!
//! ```
//! use tola_paste::prelude::*;
//! ```

// Node types
pub use crate::node::{Element, Fragment, NodeKind, Text};
pub use crate::id::NodeId;

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Delta
pub use crate::delta::{attribute, is_truthy, AttributeMap, Delta, Insert, Op};

// Matchers
pub use crate::matchers::{
    apply_format, apply_formats, match_table, match_table_cell, match_table_col,
    match_table_temporary, MatcherKind, TableMatchers,
};

// Config
pub use crate::config::{PasteConfig, DEFAULT_MAX_COL_SPAN, TABLE_ATTRIBUTE};

// Render
pub use crate::render::{inner_html, outer_html};

// Error
pub use crate::error::{PasteError, PasteResult};

// Converters
#[cfg(feature = "html-parser")]
pub use crate::convert::from_html;
