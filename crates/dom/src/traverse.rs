use crate::{Id, Node};

pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        let needs_id = node.id() == Id(0);

        if needs_id {
            let id = Id(*next);
            *next = next.wrapping_add(1);
            node.set_id(id);
        }

        match node {
            Node::Document { children, .. } | Node::Element { children, .. } => {
                for c in children {
                    walk(c, next);
                }
            }
            _ => {}
        }
    }

    let mut next = 1;
    walk(root, &mut next);
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    match node {
        Node::Document { children, .. } | Node::Element { children, .. } => {
            for c in children {
                if let Some(found) = find_node_by_id(c, id) {
                    return Some(found);
                }
            }
        }
        _ => {}
    }
    None
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    if let Some(children) = node.children_mut() {
        for c in children {
            if let Some(found) = find_node_by_id_mut(c, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Element tag names on the path from the root down to the node with `id`,
/// outermost first, excluding the node itself. `None` if `id` is not in the
/// tree.
pub fn ancestor_tags(root: &Node, id: Id) -> Option<Vec<String>> {
    fn walk<'a>(node: &'a Node, id: Id, path: &mut Vec<&'a str>) -> bool {
        if node.id() == id {
            return true;
        }
        let Some(children) = node.children() else {
            return false;
        };
        if let Node::Element { name, .. } = node {
            path.push(name.as_str());
        }
        for c in children {
            if walk(c, id, path) {
                return true;
            }
        }
        if matches!(node, Node::Element { .. }) {
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    if walk(root, id, &mut path) {
        Some(path.iter().map(|s| s.to_string()).collect())
    } else {
        None
    }
}

/// Depth-first visit of every element node, in document order.
pub fn for_each_element(node: &Node, f: &mut impl FnMut(&Node)) {
    match node {
        Node::Element { children, .. } => {
            f(node);
            for c in children {
                for_each_element(c, f);
            }
        }
        Node::Document { children, .. } => {
            for c in children {
                for_each_element(c, f);
            }
        }
        _ => {}
    }
}
