/// DOM contract for the page widgets.
///
/// Names the markup hooks the behaviors look for and the hooks they
/// produce. Defaults match the circulation-desk page markup; hosts with
/// different markup override individual fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// `id` attribute of the scan input the focus guardian protects.
    pub scan_input_id: String,
    /// Marker class identifying rating containers.
    pub rating_marker_class: String,
    /// Container attribute carrying the hidden field name.
    pub field_name_attr: String,
    /// Container attribute carrying the initial rating value.
    pub initial_value_attr: String,
    /// Class of the produced stars wrapper element.
    pub stars_wrapper_class: String,
    /// Class of each produced star element.
    pub star_item_class: String,
    /// Class toggled on active stars, for external stylesheet hooks.
    pub active_class: String,
    /// Glyph rendered inside each star element.
    pub star_glyph: String,
    /// Inline color applied to active stars.
    pub active_color: String,
    /// Inline color applied to inactive stars.
    pub inactive_color: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            scan_input_id: "scan-input".to_string(),
            rating_marker_class: "js-star-rating".to_string(),
            field_name_attr: "data-name".to_string(),
            initial_value_attr: "data-value".to_string(),
            stars_wrapper_class: "stars-wrapper".to_string(),
            star_item_class: "star-item".to_string(),
            active_class: "active".to_string(),
            star_glyph: "★".to_string(),
            active_color: "#f1c40f".to_string(),
            inactive_color: "#ddd".to_string(),
        }
    }
}
