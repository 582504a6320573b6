//! Swapping an element for one with a different tag.
//!
//! Only an explicit allowlist of attributes survives the swap: the structural ones, every
//! `data-*` and `aria-*` attribute, and a fixed set of inline event handlers. Anything else is
//! dropped with a debug line rather than failing the render.

use crate::dom::{is_void, Document, Element, NodeId};
use crate::error::{Error, Result};
use tracing::{debug, warn};

/// Attributes carried over by exact name.
pub const TRANSFERRED_ATTRIBUTES: [&str; 9] = [
    "id", "class", "style", "role", "title", "lang", "dir", "tabindex", "hidden",
];

/// Inline event handlers carried over by exact name.
pub const TRANSFERRED_HANDLERS: [&str; 11] = [
    "onclick",
    "onsubmit",
    "onload",
    "oninput",
    "onchange",
    "onkeydown",
    "onkeyup",
    "onfocus",
    "onblur",
    "onmouseover",
    "onmouseout",
];

#[must_use]
/// Whether an attribute survives a retag.
pub fn is_transferable(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.starts_with("data-")
        || name.starts_with("aria-")
        || TRANSFERRED_ATTRIBUTES.contains(&name.as_str())
        || TRANSFERRED_HANDLERS.contains(&name.as_str())
}

/// Checks that `tag` can be written as an element name that keeps its children.
///
/// # Errors
///
/// Returns [`Error::InvalidTag`] unless the tag starts with an ASCII letter, continues with ASCII
/// letters, digits or `-`, and is not a void element.
pub fn validate_tag(tag: &str) -> Result<()> {
    let mut chars = tag.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
    if well_formed && !is_void(tag) {
        Ok(())
    } else {
        Err(Error::InvalidTag {
            tag: tag.to_string(),
        })
    }
}

/// Ensures `node` is a `tag` element, replacing it if needed, and returns the node now in place.
///
/// Returns `node` unchanged when it already has the tag (compared case-insensitively), is not
/// an element at all, or `tag` fails [`validate_tag`], so repeated calls with the same tag never
/// touch the tree.
pub fn retag(doc: &mut Document, node: NodeId, tag: &str) -> NodeId {
    let Some(source) = doc.element(node) else {
        return node;
    };
    if source.tag.eq_ignore_ascii_case(tag) {
        return node;
    }
    if let Err(e) = validate_tag(tag) {
        warn!(from = %source.tag, error = %e, "refusing to retag element");
        return node;
    }

    let mut element = Element::new(tag);
    for attr in &source.attributes {
        if is_transferable(&attr.name) {
            element.attributes.push(attr.clone());
        } else {
            debug!(attribute = %attr.name, from = %source.tag, to = %tag, "dropping attribute on retag");
        }
    }
    debug!(from = %source.tag, to = %tag, "retagging element");

    let replacement = doc.create_element(element);
    doc.move_children(node, replacement);
    doc.replace_with(node, replacement);
    replacement
}

#[cfg(test)]
#[path = "tests/retag.rs"]
mod tests;
