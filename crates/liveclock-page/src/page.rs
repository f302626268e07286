//! Element arena and HTML rendering.

use html_escape::{encode_double_quoted_attribute, encode_text};
use liveclock_core::document::{Detached, Selector};

/// Elements rendered without a closing tag or content.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// An element description: tag, attributes, and own text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
}

impl Element {
    /// Create an element with no attributes and no text.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: String::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Shorthand for `attr("data-testid", value)`.
    #[must_use]
    pub fn test_id(self, value: impl Into<String>) -> Self {
        self.attr("data-testid", value)
    }

    /// Set the element's own text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of the named attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The element's own text.
    #[must_use]
    pub fn text_content(&self) -> &str {
        &self.text
    }

    fn matches(&self, selector: &Selector) -> bool {
        self.attributes
            .iter()
            .any(|(name, value)| selector.matches(name, value))
    }
}

/// Index of an element within its `Page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attached: bool,
}

/// An HTML page held in memory.
///
/// Nodes are never freed: removing an element unlinks it (and its subtree)
/// from the tree and marks it detached, so stale `NodeId`s stay valid but
/// can no longer be written.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    nodes: Vec<Node>,
}

impl Page {
    /// Create a page with an empty `<body>`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: vec![Node {
                element: Element::new("body"),
                parent: None,
                children: Vec::new(),
                attached: true,
            }],
        }
    }

    /// The `<body>` element.
    #[must_use]
    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// The page title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append `element` as the last child of `parent`.
    ///
    /// Appending under a detached or unknown parent yields a detached node.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        let attached = self.is_attached(parent);
        let parent = match self.nodes.get_mut(parent.0) {
            Some(node) => {
                node.children.push(id);
                Some(parent)
            }
            None => None,
        };
        self.nodes.push(Node {
            element,
            parent,
            children: Vec::new(),
            attached,
        });
        id
    }

    /// First attached element matching `selector`, in document order.
    #[must_use]
    pub fn find(&self, selector: &Selector) -> Option<NodeId> {
        let mut stack = vec![self.body()];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.element.matches(selector) {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// The element at `id`.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0).map(|node| &node.element)
    }

    /// The own text of the element at `id`.
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(Element::text_content)
    }

    /// Replace the own text of an attached element.
    ///
    /// # Errors
    ///
    /// Returns [`Detached`] if the element has been removed or does not
    /// belong to this page.
    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), Detached> {
        match self.nodes.get_mut(id.0) {
            Some(node) if node.attached => {
                text.clone_into(&mut node.element.text);
                Ok(())
            }
            _ => Err(Detached),
        }
    }

    /// Returns `true` if the element is reachable from `<body>`.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(|node| node.attached)
    }

    /// Unlink an element and its subtree from the page. The body cannot be
    /// removed. Returns `false` if nothing was detached.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.body() || !self.is_attached(id) {
            return false;
        }
        if let Some(parent) = self.nodes[id.0].parent {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }
        self.nodes[id.0].parent = None;

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current.0];
            node.attached = false;
            stack.extend(node.children.iter().copied());
        }
        true
    }

    /// Render the page as a complete HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n<title>");
        out.push_str(&encode_text(&self.title));
        out.push_str("</title>\n</head>\n");
        self.render_node(self.body(), &mut out);
        out.push_str("\n</html>\n");
        out
    }

    fn render_node(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        let element = &node.element;

        out.push('<');
        out.push_str(&element.tag);
        for (name, value) in &element.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(value));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&element.tag.as_str()) {
            return;
        }

        out.push_str(&encode_text(&element.text));
        for child in &node.children {
            self.render_node(*child, out);
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}
