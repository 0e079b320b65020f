//! Keep the scan input focused across neutral page clicks.
//!
//! The circulation desk receives barcode input as keystrokes into a
//! designated input element. Clicking empty page area, a label, or a list
//! row must hand focus back to that input so scans are never lost; clicks
//! that operate an ordinary control are never intercepted.

use crate::config::WidgetConfig;
use crate::to_field_id;
use dom::dom_utils::find_element_by_html_id;
use dom::{Id, Node, ancestor_tags, find_node_by_id};
use widget_core::FocusState;

/// Tags whose clicks always belong to the control itself.
const CONTROL_TAGS: [&str; 4] = ["input", "textarea", "button", "a"];

/// Ancestor tags that claim clicks on any nested content.
const CLAIMING_ANCESTORS: [&str; 2] = ["button", "a"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The click operates a control; leave focus alone.
    Control,
    /// Fall-through click; the scan input may reclaim focus.
    Neutral,
}

/// Classify a click target by its tag and ancestor chain.
///
/// Pure function of the DOM; `None` if the target node is not in the tree.
pub fn classify_click(dom: &Node, target: Id) -> Option<ClickTarget> {
    let node = find_node_by_id(dom, target)?;
    if let Some(tag) = node.tag()
        && CONTROL_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t))
    {
        return Some(ClickTarget::Control);
    }

    let ancestors = ancestor_tags(dom, target)?;
    let claimed = ancestors
        .iter()
        .any(|tag| CLAIMING_ANCESTORS.iter().any(|t| tag.eq_ignore_ascii_case(t)));
    if claimed {
        Some(ClickTarget::Control)
    } else {
        Some(ClickTarget::Neutral)
    }
}

/// Page-level focus behavior for the scan input.
///
/// The scan input is resolved once at mount, like the script it replaces.
/// If the element is absent, every operation is a permanent no-op.
#[derive(Clone, Copy, Debug)]
pub struct FocusGuardian {
    scan_input: Option<Id>,
}

impl FocusGuardian {
    /// Resolve the scan input and focus it immediately if present.
    pub fn mount(dom: &Node, config: &WidgetConfig, focus: &mut FocusState) -> Self {
        let scan_input = find_element_by_html_id(dom, &config.scan_input_id).map(Node::id);
        match scan_input {
            Some(id) => {
                focus.set_focus(to_field_id(id));
                log::debug!(target: "widgets.focus", "scan input {id:?} focused on mount");
            }
            None => {
                log::debug!(
                    target: "widgets.focus",
                    "no element with id {:?}; focus guardian inactive",
                    config.scan_input_id
                );
            }
        }
        Self { scan_input }
    }

    pub fn scan_input(&self) -> Option<Id> {
        self.scan_input
    }

    /// Handle a document-level click. Returns `true` if focus actually moved.
    pub fn on_click(&self, dom: &Node, focus: &mut FocusState, target: Id) -> bool {
        let Some(scan_input) = self.scan_input else {
            return false;
        };

        match classify_click(dom, target) {
            Some(ClickTarget::Neutral) => {
                let moved = focus.set_focus(to_field_id(scan_input));
                log::trace!(
                    target: "widgets.focus",
                    "neutral click on {target:?}; scan input reclaims focus (moved: {moved})"
                );
                moved
            }
            Some(ClickTarget::Control) | None => false,
        }
    }
}
