//! Format propagation over delta ops

use serde_json::Value;

use crate::delta::{is_truthy, AttributeMap, Delta};

/// Apply `format: value` to every op that does not already carry a truthy
/// value for it.
///
/// Ops are re-inserted with `{format: value}` overlaid by their own
/// attributes, so an op's existing (falsy) value for `format` still wins.
/// The result is normalized: neighbours that end up equal are merged.
pub fn apply_format(delta: Delta, format: &str, value: Value) -> Delta {
    let mut out = Delta::new();
    for op in delta {
        if op.attr(format).is_some_and(is_truthy) {
            out.push(op);
            continue;
        }
        let mut attributes = AttributeMap::new();
        attributes.insert(format.to_owned(), value.clone());
        if let Some(own) = op.attributes {
            attributes.extend(own);
        }
        out.insert(op.insert, Some(attributes));
    }
    out
}

/// Apply every entry of `formats` in turn.
pub fn apply_formats(delta: Delta, formats: &AttributeMap) -> Delta {
    formats
        .iter()
        .fold(delta, |acc, (format, value)| apply_format(acc, format, value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::attribute;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn to_json(delta: &Delta) -> Value {
        serde_json::to_value(delta).unwrap()
    }

    #[test]
    fn test_apply_to_plain_ops() {
        let mut delta = Delta::new();
        delta.insert("a", None).insert("b", Some(attribute("bold", true)));

        let formatted = apply_format(delta, "table-cell", json!(2));
        assert_eq!(
            to_json(&formatted),
            json!({ "ops": [
                { "insert": "a", "attributes": { "table-cell": 2 } },
                { "insert": "b", "attributes": { "table-cell": 2, "bold": true } },
            ]})
        );
    }

    #[test]
    fn test_existing_truthy_value_is_kept() {
        let mut delta = Delta::new();
        delta.insert("a", Some(attribute("table-cell", 1)));

        let formatted = apply_format(delta, "table-cell", json!(5));
        assert_eq!(formatted.ops()[0].attr("table-cell"), Some(&json!(1)));
    }

    #[test]
    fn test_existing_falsy_value_wins_over_new() {
        let mut delta = Delta::new();
        delta.insert("a", Some(attribute("table-cell", 0)));

        let formatted = apply_format(delta, "table-cell", json!(5));
        assert_eq!(formatted.ops()[0].attr("table-cell"), Some(&json!(0)));
    }

    #[test]
    fn test_result_is_merged() {
        let mut delta = Delta::new();
        delta.insert("a", None).insert("b", Some(attribute("x", 1)));

        // Both ops end up with { x: 1 }
        let formatted = apply_format(delta, "x", json!(1));
        assert_eq!(formatted.ops().len(), 1);
        assert_eq!(formatted.ops()[0].insert.as_text(), Some("ab"));
    }

    #[test]
    fn test_apply_formats_folds_keys() {
        let mut delta = Delta::new();
        delta.insert("a", None);
        let mut formats = attribute("table-cell", 1);
        formats.insert("table-cell-block".into(), json!(3));

        let formatted = apply_formats(delta, &formats);
        assert_eq!(
            to_json(&formatted),
            json!({ "ops": [
                { "insert": "a", "attributes": { "table-cell-block": 3, "table-cell": 1 } },
            ]})
        );
    }
}
