//! Clipboard matchers for tables
//!
//! A paste pipeline walks the parsed clipboard fragment and, for each
//! element, hands the delta built from that element's content to the
//! matcher registered for its selector. This module supplies the table
//! matchers; registering and invoking them is the host's business.
//!
//! ```
//! use tola_paste::delta::Delta;
//! use tola_paste::matchers::{match_table_temporary, MatcherKind};
//! use tola_paste::node::Fragment;
//!
//! let frag = Fragment::new("table");
//! let delta = match_table_temporary(&frag, frag.root(), Delta::new()).unwrap();
//! assert_eq!(delta.len(), 1);
//! assert_eq!(MatcherKind::for_tag("TABLE"), Some(MatcherKind::TableTemporary));
//! ```

mod format;
mod table;

pub use format::{apply_format, apply_formats};
pub use table::{
    TableMatchers, DATA_ROW, TABLE_CELL, TABLE_CELL_BLOCK, TABLE_COL, TABLE_TEMPORARY,
};

use crate::delta::Delta;
use crate::error::PasteResult;
use crate::id::NodeId;
use crate::node::Fragment;

// =============================================================================
// MatcherKind
// =============================================================================

/// Which table matcher applies to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    /// `<tr>` → [`match_table`]
    Table,
    /// `<td>` → [`match_table_cell`]
    TableCell,
    /// `<col>` → [`match_table_col`]
    TableCol,
    /// `<table>` → [`match_table_temporary`]
    TableTemporary,
}

impl MatcherKind {
    /// All matchers, in the order a host usually registers them.
    pub const ALL: [Self; 4] = [
        Self::Table,
        Self::TableCell,
        Self::TableCol,
        Self::TableTemporary,
    ];

    /// CSS selector (tag name) the matcher is registered under.
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Table => "tr",
            Self::TableCell => "td",
            Self::TableCol => "col",
            Self::TableTemporary => "table",
        }
    }

    /// Matcher name, for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Table => "match_table",
            Self::TableCell => "match_table_cell",
            Self::TableCol => "match_table_col",
            Self::TableTemporary => "match_table_temporary",
        }
    }

    /// Matcher for a tag name (ASCII case-insensitive).
    pub fn for_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.selector().eq_ignore_ascii_case(tag))
    }
}

impl TableMatchers {
    /// Run the matcher of the given kind.
    pub fn run(
        &self,
        kind: MatcherKind,
        fragment: &Fragment,
        node: NodeId,
        delta: Delta,
    ) -> PasteResult<Delta> {
        match kind {
            MatcherKind::Table => self.match_table(fragment, node, delta),
            MatcherKind::TableCell => self.match_table_cell(fragment, node, delta),
            MatcherKind::TableCol => self.match_table_col(fragment, node, delta),
            MatcherKind::TableTemporary => self.match_table_temporary(fragment, node, delta),
        }
    }
}

// =============================================================================
// Default-config entry points
// =============================================================================

/// `<tr>` matcher with the default config. See [`TableMatchers::match_table`].
pub fn match_table(fragment: &Fragment, node: NodeId, delta: Delta) -> PasteResult<Delta> {
    TableMatchers::default().match_table(fragment, node, delta)
}

/// `<td>` matcher with the default config. See [`TableMatchers::match_table_cell`].
pub fn match_table_cell(fragment: &Fragment, node: NodeId, delta: Delta) -> PasteResult<Delta> {
    TableMatchers::default().match_table_cell(fragment, node, delta)
}

/// `<col>` matcher with the default config. See [`TableMatchers::match_table_col`].
pub fn match_table_col(fragment: &Fragment, node: NodeId, delta: Delta) -> PasteResult<Delta> {
    TableMatchers::default().match_table_col(fragment, node, delta)
}

/// `<table>` matcher with the default config. See [`TableMatchers::match_table_temporary`].
pub fn match_table_temporary(fragment: &Fragment, node: NodeId, delta: Delta) -> PasteResult<Delta> {
    TableMatchers::default().match_table_temporary(fragment, node, delta)
}
