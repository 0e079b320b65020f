//! Central store for confirmed rating values.
//!
//! This store is UI-agnostic: it does not construct markup or apply visual
//! state. Integration layers translate pointer events into field updates
//! here and then recompute the visual highlight from the stored value.

use crate::id::FieldId;
use crate::value::clamp_rating;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
struct FieldState {
    /// The confirmed rating value. Hover previews never land here.
    value: u8,

    /// Monotonic revision counter, incremented on any value change.
    value_rev: u64,
}

/// Central store for widget field state.
///
/// Holds the confirmed rating per hidden field, keyed by [`FieldId`].
/// The stored value is what an enclosing form submission would carry;
/// transient hover previews are applied to the visual layer only and
/// never pass through this store.
///
/// # Example
///
/// ```
/// use widget_core::{FieldId, RatingStore};
///
/// let mut store = RatingStore::new();
/// let id = FieldId::from_raw(1);
///
/// store.ensure_initial(id, 3);
/// assert_eq!(store.get(id), Some(3));
///
/// store.set(id, 5);
/// assert_eq!(store.get(id), Some(5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RatingStore {
    fields: HashMap<FieldId, FieldState>,
}

impl RatingStore {
    /// Create a new, empty rating store.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Returns the confirmed value for this field, if any.
    pub fn get(&self, id: FieldId) -> Option<u8> {
        self.fields.get(&id).map(|s| s.value)
    }

    /// Returns the confirmed value, or 0 for unknown fields.
    pub fn value_or_default(&self, id: FieldId) -> u8 {
        self.get(id).unwrap_or(0)
    }

    /// Monotonic revision counter for the field's value.
    ///
    /// Increments on any value change. Useful for cache invalidation.
    pub fn value_revision(&self, id: FieldId) -> u64 {
        self.fields.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// Set/overwrite the confirmed value for this field.
    ///
    /// Out-of-range values clamp. Returns `true` if the value actually
    /// changed.
    pub fn set(&mut self, id: FieldId, value: u8) -> bool {
        let value = clamp_rating(value as i64);
        let st = self.fields.entry(id).or_default();
        if st.value == value {
            return false;
        }
        st.value = value;
        st.value_rev = st.value_rev.wrapping_add(1);
        true
    }

    /// Ensure an entry exists; if missing, inserts the provided initial value.
    ///
    /// If an entry already exists, this is a no-op: a previously confirmed
    /// value survives re-seeding.
    pub fn ensure_initial(&mut self, id: FieldId, initial: u8) {
        self.fields.entry(id).or_insert(FieldState {
            value: clamp_rating(initial as i64),
            value_rev: 0,
        });
    }

    /// Clear all stored field state.
    ///
    /// Typically called on navigation to reset document state.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Number of known fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
