//! Table matchers
//!
//! Each matcher receives the element it was invoked on and the delta the
//! host produced for that element's content, and returns the delta with
//! table metadata attached:
//!
//! | Element   | Format added                                   |
//! |-----------|------------------------------------------------|
//! | `<tr>`    | `table-cell: <row>`                            |
//! | `<td>`    | `table-cell-block: <cell>`, `data-row` on rows |
//! | `<col>`   | `table-col: { width }` per extra spanned col   |
//! | `<table>` | leading `table-temporary: { border, … }`       |
//!
//! Row and cell positions are 1-based; 0 means "not found".

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::PasteConfig;
use crate::delta::{attribute, is_truthy, AttributeMap, Delta};
use crate::error::PasteResult;
use crate::id::NodeId;
use crate::node::Fragment;
use crate::render::{inner_html, is_blank_html, is_js_whitespace};

use super::format::apply_format;

/// Row position format set on `<tr>` content.
pub const TABLE_CELL: &str = "table-cell";
/// Cell position format set on `<td>` content.
pub const TABLE_CELL_BLOCK: &str = "table-cell-block";
/// Column format emitted for `<col>`.
pub const TABLE_COL: &str = "table-col";
/// Table-level format emitted for `<table>`.
pub const TABLE_TEMPORARY: &str = "table-temporary";
/// Row key inside the `table-cell` object.
pub const DATA_ROW: &str = "data-row";

// =============================================================================
// TableMatchers
// =============================================================================

/// The four table matchers bound to a [`PasteConfig`].
#[derive(Debug, Clone, Default)]
pub struct TableMatchers {
    config: PasteConfig,
}

impl TableMatchers {
    /// Create matchers with the given config.
    pub fn new(config: PasteConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &PasteConfig {
        &self.config
    }

    /// `<tr>`: tag content with the row's position in its table.
    ///
    /// A row whose inner HTML is only whitespace produces an empty delta.
    pub fn match_table(&self, fragment: &Fragment, row: NodeId, delta: Delta) -> PasteResult<Delta> {
        let table = table_of_row(fragment, row)?;
        let position = position_of(&fragment.query_all(table, "tr"), row);

        if is_blank_html(&inner_html(fragment, row)?) {
            debug!(%row, position, "dropping blank table row");
            return Ok(Delta::new());
        }

        trace!(%row, position, "matched table row");
        Ok(apply_format(delta, TABLE_CELL, Value::from(position)))
    }

    /// `<td>`: tag content with the cell position and stamp the row id onto
    /// every `table-cell` format.
    ///
    /// The row id is the parent row's `data-row` attribute when present and
    /// non-empty, otherwise its position in the table.
    pub fn match_table_cell(
        &self,
        fragment: &Fragment,
        cell: NodeId,
        mut delta: Delta,
    ) -> PasteResult<Delta> {
        let row = fragment.ancestor(cell, 1)?;
        let table = table_of_row(fragment, row)?;

        let row_id = match fragment.get_attr(row, DATA_ROW) {
            Some(id) if !id.is_empty() => Value::from(id),
            _ => Value::from(position_of(&fragment.query_all(table, "tr"), row)),
        };
        let position = position_of(&fragment.query_all(row, "td"), cell);

        if delta.is_empty() {
            delta.insert("\n", Some(attribute(TABLE_CELL, row_marker(&row_id))));
        }

        for attributes in delta.ops_mut().iter_mut().filter_map(|op| op.attributes.as_mut()) {
            let Some(current) = attributes.get_mut(TABLE_CELL) else {
                continue;
            };
            if !is_truthy(current) {
                continue;
            }
            let mut merged = match current.take() {
                Value::Object(map) => map,
                _ => AttributeMap::new(),
            };
            merged.insert(DATA_ROW.to_owned(), row_id.clone());
            *current = Value::Object(merged);
        }

        trace!(%cell, %row_id, position, "matched table cell");
        Ok(apply_format(delta, TABLE_CELL_BLOCK, Value::from(position)))
    }

    /// `<col>`: emit one `table-col` newline per column beyond the first
    /// that this `<col>` spans, followed by `delta`.
    pub fn match_table_col(&self, fragment: &Fragment, col: NodeId, delta: Delta) -> PasteResult<Delta> {
        let elem = fragment.element(col)?;
        let span = self.col_span(elem.get_attr("span"));
        let width = elem.get_attr("width").map_or(Value::Null, Value::from);

        let mut marker = AttributeMap::new();
        marker.insert("width".to_owned(), width);
        let marker = Value::Object(marker);

        let mut out = Delta::new();
        for _ in 1..span {
            out.insert("\n", Some(attribute(TABLE_COL, marker.clone())));
        }

        trace!(%col, col_span = span, "matched table col");
        Ok(out.concat(delta))
    }

    /// `<table>`: prepend a `table-temporary` newline carrying the table's
    /// presentational attributes.
    pub fn match_table_temporary(
        &self,
        fragment: &Fragment,
        table: NodeId,
        delta: Delta,
    ) -> PasteResult<Delta> {
        let elem = fragment.element(table)?;
        let formats: AttributeMap = self
            .config
            .table_attributes
            .iter()
            .filter_map(|name| elem.get_attr(name).map(|v| (name.clone(), Value::from(v))))
            .collect();

        trace!(%table, attrs = formats.len(), "matched table");
        let mut out = Delta::new();
        out.insert("\n", Some(attribute(TABLE_TEMPORARY, formats)));
        Ok(out.concat(delta))
    }

    /// Effective span: the attribute coerced like `~~value || 1`, clamped
    /// to the configured maximum.
    fn col_span(&self, raw: Option<&str>) -> i64 {
        let span = match raw.map_or(0, to_int32) {
            0 => 1,
            n => i64::from(n),
        };
        span.min(i64::from(self.config.max_col_span))
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// The table owning a row: its parent when that is `<table>`, otherwise the
/// grandparent (skipping `<tbody>`/`<thead>`/`<tfoot>`).
fn table_of_row(fragment: &Fragment, row: NodeId) -> PasteResult<NodeId> {
    let parent = fragment.ancestor(row, 1)?;
    if fragment.is_tag(parent, "table") {
        Ok(parent)
    } else {
        fragment.ancestor(row, 2)
    }
}

/// 1-based position of `node` in `list`, 0 when absent.
fn position_of(list: &[NodeId], node: NodeId) -> usize {
    list.iter().position(|&n| n == node).map_or(0, |i| i + 1)
}

fn row_marker(row_id: &Value) -> Value {
    Value::Object(attribute(DATA_ROW, row_id.clone()))
}

/// String-to-int32 coercion as done by `~~"value"`.
///
/// Unparseable input, `Infinity` and `NaN` all become 0; out-of-range
/// values wrap modulo 2^32.
fn to_int32(raw: &str) -> i32 {
    let trimmed = raw.trim_matches(is_js_whitespace);
    let number = if trimmed.is_empty() {
        0.0
    } else {
        parse_number(trimmed).unwrap_or(f64::NAN)
    };
    if !number.is_finite() {
        return 0;
    }
    const TWO_32: f64 = 4_294_967_296.0;
    let wrapped = number.trunc().rem_euclid(TWO_32);
    if wrapped >= TWO_32 / 2.0 {
        (wrapped - TWO_32) as i32
    } else {
        wrapped as i32
    }
}

/// Numeric literal parsing for an already trimmed, non-empty string.
fn parse_number(s: &str) -> Option<f64> {
    let lower = s.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            if digits.is_empty() {
                return None;
            }
            return digits.chars().try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            });
        }
    }
    // Rust accepts "inf"/"nan" spellings that are NaN here; both map to 0
    if lower.contains("inf") || lower.contains("nan") {
        return None;
    }
    lower.parse::<f64>().ok()
}

// =============================================================================
// Tests
// =============================================================================
