use dom::Id;
use std::collections::HashMap;
use widget_core::MAX_RATING;

/// Owned state of one mounted rating widget.
///
/// Every node here is created (or adopted) by mount and belongs to this
/// widget exclusively; no two widgets share nodes or fields.
#[derive(Clone, Debug)]
pub struct RatingWidget {
    pub container: Id,
    pub hidden_field: Id,
    pub wrapper: Id,
    /// Star node ids in ordinal order: `stars[i]` has ordinal `i + 1`.
    pub stars: [Id; MAX_RATING as usize],
    /// Hidden field name; empty when the container had no name attribute.
    pub name: String,
}

/// Lookup structure over all mounted rating widgets of one document.
#[derive(Clone, Debug, Default)]
pub struct RatingIndex {
    widgets: Vec<RatingWidget>,
    widget_by_star: HashMap<Id, (usize, u8)>,
    widget_by_container: HashMap<Id, usize>,
}

impl RatingIndex {
    pub(super) fn register(&mut self, widget: RatingWidget) -> usize {
        let slot = self.widgets.len();
        self.widget_by_container.insert(widget.container, slot);
        for (i, star) in widget.stars.iter().enumerate() {
            self.widget_by_star.insert(*star, (slot, (i + 1) as u8));
        }
        self.widgets.push(widget);
        slot
    }

    /// The widget owning this star node, with the star's ordinal (1-based).
    pub fn widget_for_star(&self, star: Id) -> Option<(&RatingWidget, u8)> {
        let (slot, ordinal) = self.widget_by_star.get(&star).copied()?;
        Some((&self.widgets[slot], ordinal))
    }

    pub fn widget_for_container(&self, container: Id) -> Option<&RatingWidget> {
        let slot = self.widget_by_container.get(&container).copied()?;
        Some(&self.widgets[slot])
    }

    pub fn is_mounted(&self, container: Id) -> bool {
        self.widget_by_container.contains_key(&container)
    }

    pub fn widgets(&self) -> impl Iterator<Item = &RatingWidget> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
