use crate::{Id, Node};

pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Set or replace an attribute value. Returns `true` if anything changed.
pub fn set_attr(node: &mut Node, name: &str, value: &str) -> bool {
    let Node::Element { attributes, .. } = node else {
        return false;
    };
    for (k, v) in attributes.iter_mut() {
        if k.eq_ignore_ascii_case(name) {
            if v.as_deref() == Some(value) {
                return false;
            }
            *v = Some(value.to_string());
            return true;
        }
    }
    attributes.push((name.to_string(), Some(value.to_string())));
    true
}

/// Set or replace an inline style property. Returns `true` if anything changed.
pub fn set_style(node: &mut Node, property: &str, value: &str) -> bool {
    let Node::Element { style, .. } = node else {
        return false;
    };
    for (k, v) in style.iter_mut() {
        if k.eq_ignore_ascii_case(property) {
            if v == value {
                return false;
            }
            *v = value.to_string();
            return true;
        }
    }
    style.push((property.to_string(), value.to_string()));
    true
}

pub fn style<'a>(node: &'a Node, property: &str) -> Option<&'a str> {
    match node {
        Node::Element { style, .. } => style
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(property))
            .map(|(_, v)| v.as_str()),
        _ => None,
    }
}

/// Class attribute is a whitespace-separated token list.
pub fn has_class(node: &Node, class: &str) -> bool {
    attr(node, "class")
        .map(|list| list.split_whitespace().any(|t| t == class))
        .unwrap_or(false)
}

/// Add a class token if not already present. Returns `true` if it was added.
pub fn add_class(node: &mut Node, class: &str) -> bool {
    if has_class(node, class) {
        return false;
    }
    let current = attr(node, "class").unwrap_or("").to_string();
    let updated = if current.is_empty() {
        class.to_string()
    } else {
        format!("{current} {class}")
    };
    set_attr(node, "class", &updated)
}

/// Remove a class token if present. Returns `true` if it was removed.
pub fn remove_class(node: &mut Node, class: &str) -> bool {
    if !has_class(node, class) {
        return false;
    }
    let current = attr(node, "class").unwrap_or("");
    let updated = current
        .split_whitespace()
        .filter(|t| *t != class)
        .collect::<Vec<_>>()
        .join(" ");
    set_attr(node, "class", &updated)
}

/// Find the element whose `id` attribute equals `html_id`.
pub fn find_element_by_html_id<'a>(node: &'a Node, html_id: &str) -> Option<&'a Node> {
    match node {
        Node::Element { children, .. } => {
            if attr(node, "id") == Some(html_id) {
                return Some(node);
            }
            for c in children {
                if let Some(found) = find_element_by_html_id(c, html_id) {
                    return Some(found);
                }
            }
            None
        }
        Node::Document { children, .. } => {
            for c in children {
                if let Some(found) = find_element_by_html_id(c, html_id) {
                    return Some(found);
                }
            }
            None
        }
        _ => None,
    }
}

/// Collect node ids of every element carrying the given class token, in
/// document order.
pub fn collect_elements_with_class(node: &Node, class: &str, out: &mut Vec<Id>) {
    crate::traverse::for_each_element(node, &mut |el| {
        if has_class(el, class) {
            out.push(el.id());
        }
    });
}

pub fn first_styles(style: &[(String, String)]) -> String {
    style
        .iter()
        .take(3)
        .map(|(k, v)| format!(r#"{k}: {v};"#))
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_for_outline(t: &str) -> String {
    match t.char_indices().nth(40) {
        Some((cut, _)) => format!("{}…", &t[..cut]),
        None => t.to_string(),
    }
}

pub fn outline_from_dom(root: &Node, cap: usize) -> Vec<String> {
    fn walk(node: &Node, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let indent = "  ".repeat(depth);
        match node {
            Node::Document {
                doctype, children, ..
            } => {
                if let Some(dt) = doctype {
                    out.push(format!("{indent}<!DOCTYPE {dt}>"));
                } else {
                    out.push(format!("{indent}#document"));
                }
                for c in children {
                    walk(c, depth + 1, out, left);
                }
            }
            Node::Element {
                name,
                attributes,
                children,
                style,
                ..
            } => {
                let id = attributes
                    .iter()
                    .find(|(k, _)| k == "id")
                    .and_then(|(_, v)| v.as_deref())
                    .unwrap_or("");
                let class = attributes
                    .iter()
                    .find(|(k, _)| k == "class")
                    .and_then(|(_, v)| v.as_deref())
                    .unwrap_or("");
                let styl = first_styles(style);
                let mut line = format!("{indent}<{name}");
                if !id.is_empty() {
                    line.push_str(&format!(r#" id="{id}""#));
                }
                if !class.is_empty() {
                    line.push_str(&format!(r#" class="{class}""#));
                }
                line.push('>');
                if !styl.is_empty() {
                    line.push_str(&format!("  /* {styl} */"));
                }
                out.push(line);
                for c in children {
                    walk(c, depth + 1, out, left);
                }
            }
            Node::Text { text, .. } => {
                let t = text.replace('\n', " ").trim().to_string();
                if !t.is_empty() {
                    out.push(format!("{indent}\"{}\"", truncate_for_outline(&t)));
                }
            }
            Node::Comment { text, .. } => {
                let t = text.replace('\n', " ");
                out.push(format!("{indent}<!-- {} -->", truncate_for_outline(&t)));
            }
        }
    }
    let mut out = Vec::new();
    let mut left = cap;
    walk(root, 0, &mut out, &mut left);
    out
}
