//! Conversion from clipboard HTML to a Fragment
//!
//! Clipboard HTML is usually a full document (`<html><body>
//! <!--StartFragment-->…<!--EndFragment--></body></html>`), sometimes a bare
//! snippet. Both go through the HTML5 tree builder, so the fragment has
//! exactly the shape a browser would hand the paste pipeline: implicit
//! `<tbody>` inserted, stray cells foster-parented, and so on.
//!
//! # Flow
//!
//! ```text
//! clipboard HTML
//!         │
//!         ▼ html5ever::parse_document
//! RcDom
//!         │
//!         ▼ from_html()  (body subtree, elements + text only)
//! Fragment
//! ```

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::debug;

use crate::attr::Attrs;
use crate::error::{PasteError, PasteResult};
use crate::id::NodeId;
use crate::node::{Element, Fragment};

/// Parse clipboard HTML into a fragment rooted at `<body>`.
///
/// ```
/// use tola_paste::convert::from_html;
///
/// let frag = from_html("<table><tr><td>a</td></tr></table>").unwrap();
/// assert_eq!(frag.tag(frag.root()), Some("body"));
/// assert_eq!(frag.query_all(frag.root(), "tbody").len(), 1);
/// ```
pub fn from_html(html: &str) -> PasteResult<Fragment> {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

    let body = find_element(&dom.document, "body")
        .ok_or_else(|| PasteError::parse("document has no <body>"))?;

    let root = match &body.data {
        NodeData::Element { attrs, .. } => Element::with_attrs("body", convert_attrs(&attrs.borrow())),
        _ => Element::new("body"),
    };
    let mut fragment = Fragment::with_root(root);
    let root_id = fragment.root();
    convert_children(&body, &mut fragment, root_id)?;

    debug!(nodes = fragment.len(), "converted clipboard html");
    Ok(fragment)
}

/// Depth-first search for the first element with the given local name.
fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if &*name.local == tag {
            return Some(handle.clone());
        }
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

/// Copy element and text children of `handle` below `parent`.
///
/// Comments, doctypes and processing instructions are skipped.
fn convert_children(handle: &Handle, fragment: &mut Fragment, parent: NodeId) -> PasteResult<()> {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Element { name, attrs, .. } => {
                let attrs = convert_attrs(&attrs.borrow());
                let id = fragment.append_element(parent, &*name.local, attrs)?;
                convert_children(child, fragment, id)?;
            }
            NodeData::Text { contents } => {
                fragment.append_text(parent, &**contents.borrow())?;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Convert parser attributes: `Vec<Attribute>` -> `Vec<(String, String)>`
fn convert_attrs(attrs: &[html5ever::Attribute]) -> Attrs {
    attrs
        .iter()
        .map(|a| (String::from(&*a.name.local), String::from(&*a.value)))
        .collect()
}
