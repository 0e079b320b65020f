use crate::id::FieldId;

/// Which node currently holds keyboard focus, as far as the widget layer
/// is concerned. The host environment owns actual focus; this mirrors the
/// last focus request the widget layer made.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusState {
    focused: Option<FieldId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    pub fn is_focused(&self, id: FieldId) -> bool {
        self.focused == Some(id)
    }

    /// Request focus on a node. Returns `true` if focus actually moved.
    pub fn set_focus(&mut self, id: FieldId) -> bool {
        if self.focused == Some(id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }
}
