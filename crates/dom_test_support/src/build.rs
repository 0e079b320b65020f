//! Terse node constructors for building test documents by hand.

use dom::{Id, Node};

pub fn doc(children: Vec<Node>) -> Node {
    Node::Document {
        id: Id(0),
        doctype: None,
        children,
    }
}

pub fn elem(id: u32, name: &str, attributes: Vec<(String, Option<String>)>, children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(id),
        name: name.to_string(),
        attributes,
        style: Vec::new(),
        children,
    }
}

pub fn text(id: u32, text: &str) -> Node {
    Node::Text {
        id: Id(id),
        text: text.to_string(),
    }
}

/// Attribute pair with a value.
pub fn attr(k: &str, v: &str) -> (String, Option<String>) {
    (k.to_string(), Some(v.to_string()))
}

pub fn input(id: u32, ty: &str, extra_attrs: Vec<(String, Option<String>)>) -> Node {
    let mut attributes = vec![attr("type", ty)];
    attributes.extend(extra_attrs);
    elem(id, "input", attributes, Vec::new())
}
