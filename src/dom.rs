//! A small arena DOM that plays the host environment for the outline pass.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]. Replacing an element never
//! frees its slot; the old node is simply unlinked from the tree, so stale ids stay valid to look
//! at but are no longer [attached](Document::is_attached).

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle to a node inside a [`Document`].
pub struct NodeId(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
/// Name/value pair on an element. Boolean attributes carry no value.
pub struct Attribute {
    /// Lowercase attribute name.
    pub name: String,
    /// Decoded attribute value, if one was written.
    pub value: Option<String>,
    /// Value exactly as it appeared in the source, quotes included. Cleared when the value is set.
    pub raw: Option<String>,
}

impl Attribute {
    #[must_use]
    /// Creates an attribute with no source text behind it.
    pub fn new(name: &str, value: Option<String>) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            value,
            raw: None,
        }
    }
}

/// Elements that never take an end tag.
pub const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[must_use]
/// Whether `tag` names a void element, ignoring case.
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag))
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Tag and attributes of an element node.
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Written as `<tag />` in the source.
    pub self_closing: bool,
}

impl Element {
    #[must_use]
    /// Creates an element with no attributes.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            self_closing: false,
        }
    }

    #[must_use]
    /// Looks up an attribute by name, ignoring case.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    /// Sets an attribute, replacing any previous value in place.
    pub fn set_attribute(&mut self, name: &str, value: Option<String>) {
        if let Some(attr) = self
            .attributes
            .iter_mut()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
        {
            attr.value = value;
            attr.raw = None;
        } else {
            self.attributes.push(Attribute::new(name, value));
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// What a node holds.
pub enum NodeKind {
    /// The root of every document.
    Document,
    /// An element with children.
    Element(Element),
    /// Character data, kept exactly as written (entities are not decoded).
    Text(String),
    /// Markup passed through untouched: comments, doctypes, stray end tags.
    Markup(String),
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
/// Arena-backed document tree.
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    /// Creates an empty document holding only its root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    #[must_use]
    /// The document root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, element: Element) -> NodeId {
        self.push(NodeKind::Element(element))
    }

    /// Creates a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    /// Creates a detached verbatim markup node.
    pub fn create_markup(&mut self, markup: &str) -> NodeId {
        self.push(NodeKind::Markup(markup.to_string()))
    }

    #[must_use]
    /// The content of a node.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    #[must_use]
    /// The element behind a node, if it is one.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.node(id).kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Mutable access to the element behind a node, if it is one.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.node_mut(id).kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    #[must_use]
    /// Tag name of an element node.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|element| element.tag.as_str())
    }

    #[must_use]
    /// Attribute value of an element. Boolean attributes read as an empty string.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)
            .and_then(|element| element.attribute(name))
            .map(|attr| attr.value.as_deref().unwrap_or(""))
    }

    /// Sets a string attribute on an element; a no-op on other node kinds.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.set_attribute(name, Some(value.to_string()));
        }
    }

    #[must_use]
    /// Children in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    #[must_use]
    /// Parent node, or `None` for the root and detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    fn unlink(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|child| *child != id);
        }
    }

    /// Takes a node out of the tree. Its subtree stays intact and can be re-inserted.
    pub fn remove(&mut self, id: NodeId) {
        self.unlink(id);
    }

    /// Appends `child` to `parent`, taking it out of its previous position first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.unlink(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Moves every child of `from` to the end of `to`, preserving order.
    pub fn move_children(&mut self, from: NodeId, to: NodeId) {
        let children = std::mem::take(&mut self.node_mut(from).children);
        for child in children {
            self.node_mut(child).parent = Some(to);
            self.node_mut(to).children.push(child);
        }
    }

    /// Puts `new` into the slot `old` occupies and detaches `old`.
    pub fn replace_with(&mut self, old: NodeId, new: NodeId) {
        self.unlink(new);
        let Some(parent) = self.node_mut(old).parent.take() else {
            return;
        };
        if let Some(slot) = self
            .node_mut(parent)
            .children
            .iter_mut()
            .find(|child| **child == old)
        {
            *slot = new;
        }
        self.node_mut(new).parent = Some(parent);
    }

    #[must_use]
    /// Whether a node is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current == self.root()
    }

    #[must_use]
    /// Concatenated text of a node and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Markup(_) => {}
            NodeKind::Document | NodeKind::Element(_) => {
                for child in self.children(id) {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    #[must_use]
    /// Attached nodes in depth-first document order, root first.
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        order
    }

    #[must_use]
    /// First attached element whose `id` attribute matches.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants()
            .into_iter()
            .find(|node| self.attribute(*node, "id") == Some(id))
    }
}

#[cfg(test)]
#[path = "tests/dom.rs"]
mod tests;
