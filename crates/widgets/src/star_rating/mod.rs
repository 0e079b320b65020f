mod attrs;
mod form;
mod highlight;
mod index;
mod mount;

pub use form::collect_form_values;
pub use highlight::apply as apply_highlight;
pub use index::{RatingIndex, RatingWidget};
pub use mount::mount_all;

use crate::config::WidgetConfig;
use crate::to_field_id;
use dom::Node;
use widget_core::RatingStore;

/// Pointer entered star `ordinal`: highlight the preview value.
///
/// The store is never touched; the preview is purely visual.
pub fn preview(dom: &mut Node, widget: &RatingWidget, config: &WidgetConfig, ordinal: u8) -> bool {
    log::trace!(
        target: "widgets.rating",
        "preview {ordinal} on widget {:?}",
        widget.container
    );
    highlight::apply(dom, widget, config, ordinal)
}

/// Pointer left the stars: restore the highlight for the confirmed value.
pub fn revert(dom: &mut Node, widget: &RatingWidget, config: &WidgetConfig, store: &RatingStore) -> bool {
    let value = store.value_or_default(to_field_id(widget.hidden_field));
    log::trace!(
        target: "widgets.rating",
        "revert widget {:?} to confirmed value {value}",
        widget.container
    );
    highlight::apply(dom, widget, config, value)
}

/// Click on star `ordinal`: confirm the rating, then re-highlight.
///
/// Returns `true` if the confirmed value actually changed.
pub fn confirm(
    dom: &mut Node,
    widget: &RatingWidget,
    config: &WidgetConfig,
    store: &mut RatingStore,
    ordinal: u8,
) -> bool {
    let changed = store.set(to_field_id(widget.hidden_field), ordinal);
    highlight::apply(dom, widget, config, ordinal);
    log::trace!(
        target: "widgets.rating",
        "confirm {ordinal} on widget {:?} (changed: {changed})",
        widget.container
    );
    changed
}
