//! tola-paste - Clipboard table matchers for delta-based editors
//!
//! ## Core Concepts
//!
//! A paste pipeline parses clipboard HTML into a DOM fragment, walks it, and
//! asks a *matcher* per element to turn the delta built for that element's
//! content into the delta the editor stores. This crate provides the table
//! matchers, which tag content with row, cell, column and table metadata.
//!
//! ## Modules
//! - `node`: Fragment arena with parent/descendant navigation
//! - `convert`: Clipboard HTML → Fragment (`html-parser` feature)
//! - `delta`: Insert-only delta documents (Quill JSON compatible)
//! - `matchers`: `match_table`, `match_table_cell`, `match_table_col`,
//!   `match_table_temporary`, plus `apply_format`
//! - `render`: innerHTML serialization
//! - `config`: Matcher configuration
//!
//! ## Usage
//!
//! ```
//! use tola_paste::prelude::*;
//! use serde_json::json;
//!
//! let frag = from_html("<table><tr><td>a</td><td>b</td></tr></table>").unwrap();
//! let cells = frag.query_all(frag.root(), "td");
//!
//! let mut content = Delta::new();
//! content.insert("b\n", None);
//!
//! let delta = match_table_cell(&frag, cells[1], content).unwrap();
//! assert_eq!(delta.ops()[0].attr("table-cell-block"), Some(&json!(2)));
//! ```

/// Attribute types
pub mod attr;

/// Matcher configuration
pub mod config;

/// Source format converters
pub mod convert;

/// Insert-only delta documents
pub mod delta;

/// Error types
pub mod error;

/// Node identity
pub mod id;

/// Table matchers
pub mod matchers;

/// Node types: Fragment, Element, Text
pub mod node;

/// Prelude for common imports
pub mod prelude;

/// HTML serialization
pub mod render;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Element, Fragment, NodeKind, Text};

// Identity
pub use id::NodeId;

// Attribute types
pub use attr::{Attrs, AttrsExt};

// Delta
pub use delta::{AttributeMap, Delta, Insert, Op};

// Matchers
pub use matchers::{
    apply_format, apply_formats, match_table, match_table_cell, match_table_col,
    match_table_temporary, MatcherKind, TableMatchers,
};

// Config
pub use config::{PasteConfig, TABLE_ATTRIBUTE};

// Error types
pub use error::{PasteError, PasteResult};

#[cfg(feature = "html-parser")]
pub use convert::from_html;
