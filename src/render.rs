//! HTML serialization for fragments
//!
//! Renders a node's `innerHTML` / `outerHTML` the way a browser serializes
//! a fragment. The table-row matcher uses it to decide whether a row has
//! any content at all.

use crate::attr::Attrs;
use crate::error::PasteResult;
use crate::id::NodeId;
use crate::node::{Fragment, NodeKind};

// =============================================================================
// Fragment Rendering
// =============================================================================

/// Serialize the children of an element (`element.innerHTML`).
pub fn inner_html(fragment: &Fragment, id: NodeId) -> PasteResult<String> {
    let elem = fragment.element(id)?;
    let mut output = String::new();
    if is_raw_text_element(&elem.tag) {
        for &child in fragment.children(id) {
            if let Some(t) = fragment.get(child).and_then(|n| n.kind.as_text()) {
                output.push_str(&t.content);
            }
        }
        return Ok(output);
    }
    for &child in fragment.children(id) {
        render_node(fragment, child, &mut output);
    }
    Ok(output)
}

/// Serialize a node including itself (`element.outerHTML`).
pub fn outer_html(fragment: &Fragment, id: NodeId) -> PasteResult<String> {
    fragment.node(id)?;
    let mut output = String::new();
    render_node(fragment, id, &mut output);
    Ok(output)
}

/// Render a node to HTML.
fn render_node(fragment: &Fragment, id: NodeId, output: &mut String) {
    let Some(node) = fragment.get(id) else {
        return;
    };
    match &node.kind {
        NodeKind::Text(text) => {
            let raw = node
                .parent()
                .and_then(|p| fragment.tag(p))
                .is_some_and(is_raw_text_element);
            if raw {
                output.push_str(&text.content);
            } else {
                escape_text_into(&text.content, output);
            }
        }
        NodeKind::Element(elem) => {
            output.push('<');
            output.push_str(&elem.tag);
            render_attrs(&elem.attrs, output);
            output.push('>');

            if is_void_element(&elem.tag) {
                return;
            }

            for &child in node.children() {
                render_node(fragment, child, output);
            }

            output.push_str("</");
            output.push_str(&elem.tag);
            output.push('>');
        }
    }
}

/// Render attributes to HTML.
fn render_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        escape_attr_into(value, output);
        output.push('"');
    }
}

/// Escape text content. NBSP is serialized as `&nbsp;`.
fn escape_text_into(s: &str, output: &mut String) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value special characters.
fn escape_attr_into(s: &str, output: &mut String) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
}

/// Check if element is a void element (no end tag).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements whose text children are serialized without escaping.
fn is_raw_text_element(tag: &str) -> bool {
    matches!(
        tag,
        "style" | "script" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext"
    )
}

// =============================================================================
// Whitespace
// =============================================================================

/// Characters matched by the ECMAScript `\s` class.
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// True when serialized HTML has nothing but whitespace in it.
pub fn is_blank_html(html: &str) -> bool {
    html.chars().all(is_js_whitespace)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::attrs;

    #[test]
    fn test_inner_html() {
        let mut f = Fragment::new("tr");
        let td = f.append_element(f.root(), "td", attrs(&[("title", "a \"b\"")])).unwrap();
        f.append_text(td, "1 < 2 & 3").unwrap();
        f.append_element(td, "br", vec![]).unwrap();

        assert_eq!(
            inner_html(&f, f.root()).unwrap(),
            "<td title=\"a &quot;b&quot;\">1 &lt; 2 &amp; 3<br></td>"
        );
        assert_eq!(
            outer_html(&f, f.root()).unwrap(),
            "<tr><td title=\"a &quot;b&quot;\">1 &lt; 2 &amp; 3<br></td></tr>"
        );
    }

    #[test]
    fn test_nbsp_is_escaped() {
        let mut f = Fragment::new("tr");
        f.append_text(f.root(), "\u{a0}").unwrap();
        let html = inner_html(&f, f.root()).unwrap();
        assert_eq!(html, "&nbsp;");
        assert!(!is_blank_html(&html));
    }

    #[test]
    fn test_raw_text_children() {
        let mut f = Fragment::new("div");
        let style = f.append_element(f.root(), "style", vec![]).unwrap();
        f.append_text(style, "td > p { color: red }").unwrap();
        assert_eq!(inner_html(&f, style).unwrap(), "td > p { color: red }");
        assert_eq!(
            inner_html(&f, f.root()).unwrap(),
            "<style>td > p { color: red }</style>"
        );
    }

    #[test]
    fn test_inner_html_of_text_fails() {
        let mut f = Fragment::new("td");
        let text = f.append_text(f.root(), "x").unwrap();
        assert!(inner_html(&f, text).is_err());
        assert_eq!(outer_html(&f, text).unwrap(), "x");
    }

    #[test]
    fn test_blank_html() {
        assert!(is_blank_html(""));
        assert!(is_blank_html(" \n\t\r\u{0b}\u{0c}"));
        assert!(is_blank_html("\u{3000}\u{feff}\u{2009}"));
        assert!(!is_blank_html("\u{85}"));
        assert!(!is_blank_html(" <td></td> "));
    }
}
