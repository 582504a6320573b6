//! HTML format implementation using tree-sitter-html.
//!
//! Parsing keeps everything it does not understand verbatim: whitespace between nodes, comments,
//! doctypes, script and style bodies. Only tags and attributes are interpreted, which is all the
//! outline pass needs to rewrite. Attributes nobody touched are written back exactly as they were
//! quoted in the source.

use crate::dom::{is_void, Attribute, Document, Element, NodeId, NodeKind};
use crate::error::{Error, Result};
use crate::formats::Format;
use html_escape::{decode_html_entities, encode_double_quoted_attribute};
use tree_sitter::{Node, Parser};

/// tree-sitter-html based reader and writer.
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &'static str {
        "HTML"
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_html::LANGUAGE.into()
    }

    fn parse(&self, source: &str) -> Result<Document> {
        let mut parser = Parser::new();
        parser.set_language(&self.language())?;
        let tree = parser
            .parse(source, None)
            .ok_or(Error::Parse { format: self.name() })?;

        let mut doc = Document::new();
        let root = doc.root();
        build_content(&mut doc, root, tree.root_node(), source, 0, source.len());
        Ok(doc)
    }

    fn serialize(&self, doc: &Document) -> String {
        let mut out = String::new();
        write_node(doc, doc.root(), &mut out);
        out
    }
}

fn children_of(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn is_tag(kind: &str) -> bool {
    matches!(kind, "start_tag" | "end_tag" | "self_closing_tag")
}

/// Builds the content of `node` lying between `start` and `end` under `parent`.
fn build_content(
    doc: &mut Document,
    parent: NodeId,
    node: Node<'_>,
    source: &str,
    start: usize,
    end: usize,
) {
    let mut cursor = start;
    for child in children_of(node) {
        if is_tag(child.kind()) {
            continue;
        }
        if child.start_byte() > cursor {
            let gap = doc.create_text(&source[cursor..child.start_byte()]);
            doc.append_child(parent, gap);
        }
        build_node(doc, parent, child, source);
        cursor = cursor.max(child.end_byte());
    }
    if end > cursor {
        let gap = doc.create_text(&source[cursor..end]);
        doc.append_child(parent, gap);
    }
}

fn build_node(doc: &mut Document, parent: NodeId, node: Node<'_>, source: &str) {
    let raw = &source[node.byte_range()];
    match node.kind() {
        "element" | "script_element" | "style_element" => {
            build_element(doc, parent, node, source);
        }
        "text" | "raw_text" | "entity" => {
            let id = doc.create_text(raw);
            doc.append_child(parent, id);
        }
        _ => {
            let id = doc.create_markup(raw);
            doc.append_child(parent, id);
        }
    }
}

fn build_element(doc: &mut Document, parent: NodeId, node: Node<'_>, source: &str) {
    let children = children_of(node);
    let open = children
        .iter()
        .find(|child| matches!(child.kind(), "start_tag" | "self_closing_tag"));
    let close = children.iter().find(|child| child.kind() == "end_tag");

    let mut element = open.map_or_else(|| Element::new("div"), |tag| read_tag(*tag, source));
    let self_closing = open.is_some_and(|tag| tag.kind() == "self_closing_tag");
    let void = is_void(&element.tag);
    element.self_closing = self_closing;

    let id = doc.create_element(element);
    doc.append_child(parent, id);
    let start = open.map_or(node.start_byte(), Node::end_byte);

    if self_closing || void {
        // The grammar stretches void elements over the whitespace that follows them; that text
        // belongs to the parent.
        build_content(doc, parent, node, source, start, node.end_byte());
        return;
    }

    let end = close.map_or(node.end_byte(), Node::start_byte);
    build_content(doc, id, node, source, start, end);
}

fn read_tag(tag: Node<'_>, source: &str) -> Element {
    let mut element = Element::new("");
    for child in children_of(tag) {
        match child.kind() {
            "tag_name" => element.tag = source[child.byte_range()].to_ascii_lowercase(),
            "attribute" => {
                if let Some(attr) = read_attribute(child, source) {
                    if element.attribute(&attr.name).is_none() {
                        element.attributes.push(attr);
                    }
                }
            }
            _ => {}
        }
    }
    element
}

fn read_attribute(attribute: Node<'_>, source: &str) -> Option<Attribute> {
    let mut name = None;
    let mut value = None;
    let mut raw = None;
    for part in children_of(attribute) {
        match part.kind() {
            "attribute_name" => name = Some(source[part.byte_range()].to_ascii_lowercase()),
            "attribute_value" => {
                let text = &source[part.byte_range()];
                value = Some(decode_html_entities(text).into_owned());
                raw = Some(text.to_string());
            }
            "quoted_attribute_value" => {
                let inner = children_of(part)
                    .into_iter()
                    .find(|child| child.kind() == "attribute_value")
                    .map_or("", |child| &source[child.byte_range()]);
                value = Some(decode_html_entities(inner).into_owned());
                raw = Some(source[part.byte_range()].to_string());
            }
            _ => {}
        }
    }
    name.map(|name| Attribute { name, value, raw })
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.kind(id) {
        NodeKind::Document => {
            for child in doc.children(id) {
                write_node(doc, *child, out);
            }
        }
        NodeKind::Text(text) | NodeKind::Markup(text) => out.push_str(text),
        NodeKind::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for attr in &element.attributes {
                out.push(' ');
                out.push_str(&attr.name);
                match (&attr.raw, &attr.value) {
                    (Some(raw), _) => {
                        out.push('=');
                        out.push_str(raw);
                    }
                    (None, Some(value)) => {
                        out.push_str("=\"");
                        out.push_str(&encode_double_quoted_attribute(value));
                        out.push('"');
                    }
                    (None, None) => {}
                }
            }
            let children = doc.children(id);
            if element.self_closing && children.is_empty() {
                out.push_str(" />");
                return;
            }
            out.push('>');
            if is_void(&element.tag) {
                return;
            }
            for child in children {
                write_node(doc, *child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}

#[cfg(test)]
#[path = "../tests/html.rs"]
mod tests;
