use crate::config::WidgetConfig;
use dom::Node;
use dom::dom_utils::attr;
use widget_core::parse_rating;

/// Hidden field name configured on a rating container; empty if absent.
pub(super) fn field_name<'a>(container: &'a Node, config: &WidgetConfig) -> &'a str {
    attr(container, &config.field_name_attr).unwrap_or("")
}

/// Initial rating configured on a container. Absent or malformed → 0.
pub(super) fn initial_value(container: &Node, config: &WidgetConfig) -> u8 {
    parse_rating(attr(container, &config.initial_value_attr))
}

pub(super) fn is_hidden_input(node: &Node) -> bool {
    node.is_element_named("input")
        && attr(node, "type").is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
}
