use crate::to_field_id;
use dom::Node;
use dom::dom_utils::attr;
use widget_core::RatingStore;

/// Collect `(name, value)` pairs for named input elements, in document
/// order, merging live widget state over markup defaults.
///
/// The pairs are what an enclosing form submission would carry: for
/// fields the store knows (hidden rating fields), the stored value wins
/// over the markup `value` attribute; everything else falls back to the
/// attribute. Inputs without a `name` attribute are skipped.
pub fn collect_form_values(node: &Node, store: &RatingStore, out: &mut Vec<(String, String)>) {
    match node {
        Node::Element { children, .. } => {
            if node.is_element_named("input")
                && let Some(name) = attr(node, "name")
            {
                let value = match store.get(to_field_id(node.id())) {
                    Some(v) => v.to_string(),
                    None => attr(node, "value").unwrap_or("").to_string(),
                };
                out.push((name.to_string(), value));
            }
            for c in children {
                collect_form_values(c, store, out);
            }
        }
        Node::Document { children, .. } => {
            for c in children {
                collect_form_values(c, store, out);
            }
        }
        _ => {}
    }
}
