//! End-to-end: clipboard HTML through a minimal host walk and the table
//! matchers.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tola_paste::prelude::*;

/// Bottom-up walk in the shape of an editor clipboard: text becomes
/// inserts, element content is concatenated, cells end with a newline,
/// then the matcher for the element's tag (if any) runs.
fn walk(frag: &Fragment, id: NodeId, matchers: &TableMatchers) -> PasteResult<Delta> {
    let node = frag.node(id)?;
    let elem = match &node.kind {
        NodeKind::Text(t) => {
            let mut delta = Delta::new();
            delta.insert(t.content.as_str(), None);
            return Ok(delta);
        }
        NodeKind::Element(e) => e,
    };

    let mut delta = Delta::new();
    for &child in node.children() {
        delta = delta.concat(walk(frag, child, matchers)?);
    }

    let ends_with_newline = delta
        .ops()
        .last()
        .and_then(|op| op.insert.as_text())
        .is_some_and(|t| t.ends_with('\n'));
    if elem.is("td") && !delta.is_empty() && !ends_with_newline {
        delta.insert("\n", None);
    }

    match MatcherKind::for_tag(&elem.tag) {
        Some(kind) => matchers.run(kind, frag, id, delta),
        None => Ok(delta),
    }
}

fn paste(html: &str) -> Value {
    let frag = from_html(html).unwrap();
    let delta = walk(&frag, frag.root(), &TableMatchers::default()).unwrap();
    serde_json::to_value(&delta).unwrap()
}

#[test]
fn test_full_table() {
    let html = r#"<html><body><!--StartFragment--><table border="1" cellspacing="0">
<colgroup><col span="2" width="50"></colgroup>
<tr data-row="r1"><td>a</td><td>b</td></tr>
<tr><td></td><td>d</td></tr>
</table><!--EndFragment--></body></html>"#;

    let ops = paste(html)["ops"].clone();
    let ops = ops.as_array().unwrap();

    // Whitespace between table parts is kept by the parser as text; it only
    // produces plain inserts, so look at the formatted ops.
    let formatted: Vec<&Value> = ops.iter().filter(|op| op.get("attributes").is_some()).collect();
    assert_eq!(
        formatted,
        vec![
            &json!({ "insert": "\n", "attributes": { "table-temporary": { "border": "1", "cellspacing": "0" } } }),
            &json!({ "insert": "\n", "attributes": { "table-col": { "width": "50" } } }),
            &json!({ "insert": "a\n", "attributes": { "table-cell": 1, "table-cell-block": 1 } }),
            &json!({ "insert": "b\n", "attributes": { "table-cell": 1, "table-cell-block": 2 } }),
            &json!({ "insert": "\n", "attributes": { "table-cell": { "data-row": 2 }, "table-cell-block": 1 } }),
            &json!({ "insert": "d\n", "attributes": { "table-cell": 2, "table-cell-block": 2 } }),
        ]
    );
}

#[test]
fn test_compact_table_exact_output() {
    let html = "<table style=\"width:100%\"><tr><td>x</td></tr></table>";
    assert_eq!(
        paste(html),
        json!({ "ops": [
            { "insert": "\n", "attributes": { "table-temporary": { "style": "width:100%" } } },
            { "insert": "x\n", "attributes": { "table-cell": 1, "table-cell-block": 1 } },
        ]})
    );
}

#[test]
fn test_blank_row_dropped_and_positions_kept() {
    let html = "<table><tr> </tr><tr><td>x</td></tr></table>";
    assert_eq!(
        paste(html),
        json!({ "ops": [
            { "insert": "\n", "attributes": { "table-temporary": {} } },
            { "insert": "x\n", "attributes": { "table-cell": 2, "table-cell-block": 1 } },
        ]})
    );
}

#[test]
fn test_cell_inside_data_row_table() {
    let html = "<table><tbody><tr data-row=\"row-7\"><td></td></tr></tbody></table>";
    let frag = from_html(html).unwrap();
    let td = frag.query_all(frag.root(), "td")[0];

    let delta = match_table_cell(&frag, td, Delta::new()).unwrap();
    assert_eq!(
        serde_json::to_value(&delta).unwrap(),
        json!({ "ops": [{
            "insert": "\n",
            "attributes": { "table-cell": { "data-row": "row-7" }, "table-cell-block": 1 },
        }]})
    );
}

#[test]
fn test_nested_tables_count_all_rows() {
    // querySelectorAll also sees the inner table's row
    let html = "<table><tr><td><table><tr><td>in</td></tr></table></td></tr><tr><td>out</td></tr></table>";
    let frag = from_html(html).unwrap();
    let rows = frag.query_all(frag.root(), "tr");
    assert_eq!(rows.len(), 3);

    let mut content = Delta::new();
    content.insert("out\n", None);
    let delta = match_table(&frag, rows[2], content).unwrap();
    assert_eq!(delta.ops()[0].attr("table-cell"), Some(&json!(3)));
}

#[test]
fn test_cell_text_node_errors() {
    let frag = from_html("<table><tr><td>x</td></tr></table>").unwrap();
    let td = frag.query_all(frag.root(), "td")[0];
    let text = frag.children(td)[0];

    let err = match_table_col(&frag, text, Delta::new()).unwrap_err();
    assert!(matches!(err, PasteError::NotAnElement(_)));
}
