//! Demo shell: builds the circulation-desk page, mounts the widgets, and
//! replays a scan-and-rate interaction.

use dom::dom_utils::{collect_elements_with_class, find_element_by_html_id, outline_from_dom};
use dom::{Id, Node, assign_node_ids};
use widgets::star_rating::collect_form_values;
use widgets::{PageEvent, PageWidgets, WidgetConfig, from_field_id, to_field_id};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn el(name: &str, attributes: Vec<(String, Option<String>)>, children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(0),
        name: name.to_string(),
        attributes,
        style: Vec::new(),
        children,
    }
}

fn txt(text: &str) -> Node {
    Node::Text {
        id: Id(0),
        text: text.to_string(),
    }
}

fn at(k: &str, v: &str) -> (String, Option<String>) {
    (k.to_string(), Some(v.to_string()))
}

fn book_row(html_id: &str, title: &str, field: &str, initial: &str) -> Node {
    el(
        "div",
        vec![at("id", html_id), at("class", "book-row")],
        vec![
            txt(title),
            el(
                "div",
                vec![
                    at("class", "js-star-rating"),
                    at("data-name", field),
                    at("data-value", initial),
                ],
                Vec::new(),
            ),
        ],
    )
}

fn desk_page() -> Node {
    Node::Document {
        id: Id(0),
        doctype: Some("html".to_string()),
        children: vec![el(
            "body",
            Vec::new(),
            vec![
                el(
                    "form",
                    vec![at("action", "/scan"), at("method", "post")],
                    vec![
                        el("input", vec![at("id", "scan-input"), at("name", "isbn")], Vec::new()),
                        el("button", Vec::new(), vec![el("span", Vec::new(), vec![txt("Check in")])]),
                    ],
                ),
                book_row("row-hobbit", "The Hobbit", "star_rating", "0"),
                book_row("row-mushroom", "Mushrooms of the Northeast", "our_rating", "4"),
                el("textarea", vec![at("name", "review_content")], Vec::new()),
            ],
        )],
    }
}

fn print_outline(heading: &str, page_dom: &Node) {
    println!("{heading}");
    for line in outline_from_dom(page_dom, 80) {
        println!("  {line}");
    }
}

fn main() {
    let mut page_dom = desk_page();
    assign_node_ids(&mut page_dom);

    let mut page = PageWidgets::mount(&mut page_dom, WidgetConfig::default());
    print_outline("circulation desk after mount:", &page_dom);

    println!("\nmounted rating widgets:");
    for widget in page.index().widgets() {
        let value = page.ratings.value_or_default(to_field_id(widget.hidden_field));
        println!("  {:?} field {:?} = {value}", widget.container, widget.name);
    }

    // Patron clicks a book row; the scanner reclaims focus.
    if let Some(row) = find_element_by_html_id(&page_dom, "row-hobbit").map(Node::id) {
        page.dispatch(&mut page_dom, PageEvent::Click { target: row });
    }

    // Then rates The Hobbit: hovers five stars, settles on four.
    let mut containers = Vec::new();
    collect_elements_with_class(&page_dom, &page.config().rating_marker_class, &mut containers);
    let widget = containers
        .first()
        .and_then(|c| page.index().widget_for_container(*c))
        .cloned();
    if let Some(widget) = widget {
        page.dispatch(&mut page_dom, PageEvent::PointerEnter { target: widget.stars[4] });
        page.dispatch(&mut page_dom, PageEvent::PointerLeave { target: widget.stars[4] });
        page.dispatch(&mut page_dom, PageEvent::Click { target: widget.stars[3] });
    }

    print_outline("\nafter rating The Hobbit:", &page_dom);

    let mut pairs = Vec::new();
    collect_form_values(&page_dom, &page.ratings, &mut pairs);
    println!("\nform values:");
    for (name, value) in &pairs {
        println!("  {name}={value}");
    }

    if let Some(focused) = page.focus.focused() {
        println!("\nfocused node: {:?}", from_field_id(focused));
    }
}
