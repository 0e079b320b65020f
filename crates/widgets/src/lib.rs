//! Page behaviors for the circulation-desk front-end: a focus guardian
//! that keeps the barcode scan input focused across neutral clicks, and a
//! five-star rating widget backed by a hidden form field.
//!
//! Both behaviors mount once against a ready document and then operate
//! purely reactively on [`PageEvent`]s routed through [`PageWidgets`].

pub mod config;
pub mod event;
pub mod focus_guardian;
pub mod page;
pub mod star_rating;

pub use crate::config::WidgetConfig;
pub use crate::event::PageEvent;
pub use crate::page::PageWidgets;

use widget_core::FieldId;

/// Convert a DOM node id into a widget-layer field id.
#[inline]
pub fn to_field_id(id: dom::Id) -> FieldId {
    FieldId::from_raw(id.0 as u64)
}

/// Convert a widget-layer field id back into a DOM node id.
#[inline]
pub fn from_field_id(id: FieldId) -> dom::Id {
    dom::Id(id.as_raw() as u32)
}
