//! Page contract: the selectors, ids and class names the controller expects
//! the host markup to provide, plus the few fixed tunables.

/// Address placed on the clipboard by the copy button.
pub const COPY_ADDRESS: &str = "play.cobblemonacademy.com";

/// How long the copy confirmation stays visible.
pub const CONFIRMATION_MS: i32 = 2000;

/// Scroll offset past which the scroll indicator is hidden.
pub const INDICATOR_THRESHOLD_PX: f64 = 150.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub layer_selector: &'static str,
    pub group_selector: &'static str,
    /// Prefix of the class carrying a layer's index, e.g. `layer-7`.
    pub layer_class_prefix: &'static str,
    /// Data attribute (without `data-`) holding a layer's speed factor.
    pub speed_attribute: &'static str,
    pub indicator_id: &'static str,
    pub indicator_hidden_class: &'static str,
    pub confirmation_id: &'static str,
    pub confirmation_visible_class: &'static str,
    pub indicator_threshold_px: f64,
    pub copy_address: &'static str,
    pub confirmation_ms: i32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            layer_selector: ".parallax-layer",
            group_selector: ".parallax-group",
            layer_class_prefix: "layer-",
            speed_attribute: "speed",
            indicator_id: "scrollIndicator",
            indicator_hidden_class: "hidden",
            confirmation_id: "copiedMessage",
            confirmation_visible_class: "show",
            indicator_threshold_px: INDICATOR_THRESHOLD_PX,
            copy_address: COPY_ADDRESS,
            confirmation_ms: CONFIRMATION_MS,
        }
    }
}
