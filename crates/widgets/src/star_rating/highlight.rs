use super::index::RatingWidget;
use crate::config::WidgetConfig;
use dom::{Node, find_node_by_id_mut};
use dom::dom_utils::{add_class, remove_class, set_style};

/// Recompute the highlight of one widget's stars against a target value.
///
/// Stars with ordinal ≤ `value` gain the active class and color; the rest
/// lose them. Idempotent and order-independent across the five stars.
/// Returns `true` if any class or style actually changed.
pub fn apply(dom: &mut Node, widget: &RatingWidget, config: &WidgetConfig, value: u8) -> bool {
    let mut changed = false;
    for (i, star_id) in widget.stars.iter().enumerate() {
        let ordinal = (i + 1) as u8;
        let Some(star) = find_node_by_id_mut(dom, *star_id) else {
            continue;
        };
        if ordinal <= value {
            changed |= add_class(star, &config.active_class);
            changed |= set_style(star, "color", &config.active_color);
        } else {
            changed |= remove_class(star, &config.active_class);
            changed |= set_style(star, "color", &config.inactive_color);
        }
    }
    changed
}
