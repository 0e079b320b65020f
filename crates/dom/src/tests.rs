use crate::dom_utils::{
    add_class, attr, collect_elements_with_class, find_element_by_html_id, has_attr, has_class,
    remove_class, set_attr, set_style, style,
};
use crate::{Id, Node, ancestor_tags, assign_node_ids, find_node_by_id, find_node_by_id_mut};

fn elem(id: u32, name: &str, attributes: Vec<(String, Option<String>)>, children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(id),
        name: name.to_string(),
        attributes,
        style: Vec::new(),
        children,
    }
}

fn doc(children: Vec<Node>) -> Node {
    Node::Document {
        id: Id(0),
        doctype: None,
        children,
    }
}

fn a(k: &str, v: &str) -> (String, Option<String>) {
    (k.to_string(), Some(v.to_string()))
}

#[test]
fn assign_node_ids_skips_already_assigned() {
    let mut dom = doc(vec![elem(7, "div", Vec::new(), vec![elem(0, "span", Vec::new(), Vec::new())])]);
    assign_node_ids(&mut dom);

    let Node::Document { children, .. } = &dom else {
        panic!("not a document");
    };
    assert_eq!(children[0].id(), Id(7));
    let inner = children[0].children().unwrap();
    assert_ne!(inner[0].id(), Id(0));
}

#[test]
fn find_node_by_id_descends_into_children() {
    let dom = doc(vec![elem(
        1,
        "div",
        Vec::new(),
        vec![elem(2, "span", Vec::new(), Vec::new())],
    )]);

    assert!(find_node_by_id(&dom, Id(2)).is_some());
    assert!(find_node_by_id(&dom, Id(9)).is_none());
}

#[test]
fn ancestor_tags_excludes_the_node_itself() {
    let dom = doc(vec![elem(
        1,
        "form",
        Vec::new(),
        vec![elem(
            2,
            "button",
            Vec::new(),
            vec![elem(3, "span", Vec::new(), Vec::new())],
        )],
    )]);

    let tags = ancestor_tags(&dom, Id(3)).unwrap();
    assert_eq!(tags, vec!["form".to_string(), "button".to_string()]);

    assert_eq!(ancestor_tags(&dom, Id(1)).unwrap(), Vec::<String>::new());
    assert!(ancestor_tags(&dom, Id(9)).is_none());
}

#[test]
fn attr_lookup_is_ascii_case_insensitive() {
    let node = elem(1, "input", vec![a("Type", "hidden")], Vec::new());
    assert_eq!(attr(&node, "type"), Some("hidden"));
    assert!(has_attr(&node, "TYPE"));
    assert!(!has_attr(&node, "name"));
}

#[test]
fn set_attr_reports_changes() {
    let mut node = elem(1, "input", Vec::new(), Vec::new());
    assert!(set_attr(&mut node, "value", "3"));
    assert!(!set_attr(&mut node, "value", "3"));
    assert!(set_attr(&mut node, "value", "4"));
    assert_eq!(attr(&node, "value"), Some("4"));
}

#[test]
fn set_style_replaces_existing_property() {
    let mut node = elem(1, "span", Vec::new(), Vec::new());
    assert!(set_style(&mut node, "color", "#ddd"));
    assert!(set_style(&mut node, "color", "#f1c40f"));
    assert!(!set_style(&mut node, "color", "#f1c40f"));
    assert_eq!(style(&node, "color"), Some("#f1c40f"));

    let Node::Element { style, .. } = &node else {
        panic!("not an element");
    };
    assert_eq!(style.len(), 1);
}

#[test]
fn class_tokens_are_whitespace_separated() {
    let node = elem(1, "div", vec![a("class", "card js-star-rating")], Vec::new());
    assert!(has_class(&node, "js-star-rating"));
    assert!(has_class(&node, "card"));
    assert!(!has_class(&node, "star"));
}

#[test]
fn add_and_remove_class_round_trip() {
    let mut node = elem(1, "span", vec![a("class", "star-item")], Vec::new());

    assert!(add_class(&mut node, "active"));
    assert!(!add_class(&mut node, "active"));
    assert_eq!(attr(&node, "class"), Some("star-item active"));

    assert!(remove_class(&mut node, "active"));
    assert!(!remove_class(&mut node, "active"));
    assert_eq!(attr(&node, "class"), Some("star-item"));
}

#[test]
fn add_class_on_element_without_class_attr() {
    let mut node = elem(1, "span", Vec::new(), Vec::new());
    assert!(add_class(&mut node, "active"));
    assert_eq!(attr(&node, "class"), Some("active"));
}

#[test]
fn find_element_by_html_id_matches_attribute() {
    let dom = doc(vec![elem(
        1,
        "body",
        Vec::new(),
        vec![
            elem(2, "input", vec![a("id", "scan-input")], Vec::new()),
            elem(3, "div", vec![a("id", "book-list")], Vec::new()),
        ],
    )]);

    let found = find_element_by_html_id(&dom, "scan-input").unwrap();
    assert_eq!(found.id(), Id(2));
    assert!(find_element_by_html_id(&dom, "missing").is_none());
}

#[test]
fn collect_elements_with_class_in_document_order() {
    let dom = doc(vec![elem(
        1,
        "body",
        Vec::new(),
        vec![
            elem(2, "div", vec![a("class", "js-star-rating")], Vec::new()),
            elem(
                3,
                "section",
                Vec::new(),
                vec![elem(4, "div", vec![a("class", "js-star-rating wide")], Vec::new())],
            ),
        ],
    )]);

    let mut out = Vec::new();
    collect_elements_with_class(&dom, "js-star-rating", &mut out);
    assert_eq!(out, vec![Id(2), Id(4)]);
}

#[test]
fn mutation_through_find_node_by_id_mut() {
    let mut dom = doc(vec![elem(1, "div", Vec::new(), Vec::new())]);
    let node = find_node_by_id_mut(&mut dom, Id(1)).unwrap();
    set_attr(node, "data-value", "3");
    assert_eq!(attr(find_node_by_id(&dom, Id(1)).unwrap(), "data-value"), Some("3"));
}
