use super::{is_transferable, retag, validate_tag};
use crate::dom::{Document, Element};
use crate::error::Error;
use crate::formats::{html::HtmlFormat, Format};

#[test]
fn test_allowlist() {
    for name in ["id", "class", "style", "role", "data-foo", "aria-label", "onclick", "DATA-X"] {
        assert!(is_transferable(name), "{name} should transfer");
    }
    for name in ["href", "src", "onmouseenter", "contenteditable"] {
        assert!(!is_transferable(name), "{name} should be dropped");
    }
}

#[test]
fn test_retag_transfers_attributes_and_children() {
    let mut doc = Document::new();
    let root = doc.root();
    let before = doc.create_text("before");
    let div = doc.create_element(Element::new("div"));
    let after = doc.create_text("after");
    for node in [before, div, after] {
        doc.append_child(root, node);
    }
    for (name, value) in [
        ("id", "main"),
        ("class", "wide card"),
        ("style", "color: red"),
        ("data-track", "7"),
        ("aria-label", "Main"),
        ("role", "region"),
        ("onclick", "go()"),
        ("href", "/nowhere"),
    ] {
        doc.set_attribute(div, name, value);
    }
    let child = doc.create_text("content");
    doc.append_child(div, child);

    let article = retag(&mut doc, div, "article");

    assert_ne!(article, div);
    assert_eq!(doc.tag_name(article), Some("article"));
    assert_eq!(doc.children(root), &[before, article, after]);
    assert_eq!(doc.children(article), &[child]);
    assert_eq!(doc.attribute(article, "id"), Some("main"));
    assert_eq!(doc.attribute(article, "class"), Some("wide card"));
    assert_eq!(doc.attribute(article, "style"), Some("color: red"));
    assert_eq!(doc.attribute(article, "data-track"), Some("7"));
    assert_eq!(doc.attribute(article, "aria-label"), Some("Main"));
    assert_eq!(doc.attribute(article, "role"), Some("region"));
    assert_eq!(doc.attribute(article, "onclick"), Some("go()"));
    assert_eq!(doc.attribute(article, "href"), None);
    assert!(!doc.is_attached(div));
}

#[test]
fn test_retag_same_tag_is_noop() {
    let mut doc = Document::new();
    let root = doc.root();
    let h2 = doc.create_element(Element::new("h2"));
    doc.append_child(root, h2);

    assert_eq!(retag(&mut doc, h2, "h2"), h2);
    assert_eq!(retag(&mut doc, h2, "H2"), h2);
    assert_eq!(doc.children(root), &[h2]);
}

#[test]
fn test_retag_ignores_non_elements() {
    let mut doc = Document::new();
    let text = doc.create_text("plain");
    assert_eq!(retag(&mut doc, text, "h1"), text);
}

#[test]
fn test_validate_tag() {
    for tag in ["article", "ASIDE", "h2", "my-widget", "x"] {
        assert!(validate_tag(tag).is_ok(), "{tag} should be accepted");
    }
    for tag in ["", "2col", "-x", "div onmouseover=alert(1) x", "a>b", "sec_tion", "br", "IMG", "hr"] {
        assert!(
            matches!(validate_tag(tag), Err(Error::InvalidTag { tag: ref rejected }) if rejected == tag),
            "{tag:?} should be rejected"
        );
    }
}

#[test]
fn test_retag_refuses_invalid_tags() {
    let mut doc = Document::new();
    let root = doc.root();
    let div = doc.create_element(Element::new("div"));
    doc.append_child(root, div);

    for tag in ["", "div onmouseover=alert(1) x", "br"] {
        assert_eq!(retag(&mut doc, div, tag), div, "{tag:?}");
    }
    assert_eq!(doc.children(root), &[div]);
    assert_eq!(doc.tag_name(div), Some("div"));
}

#[test]
fn test_retag_keeps_source_quoting() {
    let html = r#"<div title='caf&eacute; "x"' href="/a">Body</div>"#;
    let mut doc = HtmlFormat.parse(html).unwrap();
    let div = doc.children(doc.root())[0];

    retag(&mut doc, div, "section");

    assert_eq!(
        HtmlFormat.serialize(&doc),
        r#"<section title='caf&eacute; "x"'>Body</section>"#
    );
}
