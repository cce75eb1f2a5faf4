//! Pure render step: maps scroll position and wall-clock time onto the inline
//! styles of every animated element. Nothing here touches the DOM, so the
//! whole visual state can be computed and checked off-browser.

use std::collections::BTreeMap;

mod group;
mod layer;
mod style;

pub use group::{group_progress, GroupKind};
pub use layer::{layer_index, parse_speed, scroll_progress, LayerKind, LayerSpec};
pub use style::{css_number, lerp, StyleProps, Transform};

/// Window metrics sampled alongside the scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// `window.innerHeight`
    pub height: f64,
    /// `document.body.scrollHeight`
    pub scroll_height: f64,
}

impl Viewport {
    pub fn max_scroll(&self) -> f64 {
        self.scroll_height - self.height
    }
}

/// Everything the render step needs to know about the page, resolved once
/// when the page is scanned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub layers: Vec<LayerSpec>,
    pub groups: Vec<GroupKind>,
    /// Hide threshold of the scroll indicator; `None` when the page has none.
    pub indicator_threshold: Option<f64>,
}

/// Index into the scene's layers or groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    Layer(usize),
    Group(usize),
    ScrollIndicator,
}

pub type VisualState = BTreeMap<ElementId, StyleProps>;

/// Computes the style writes for one update. Elements absent from the result
/// keep whatever inline style they already carry.
pub fn compute_visual_state(
    scene: &Scene,
    scroll_y: f64,
    time_seconds: f64,
    viewport: Viewport,
) -> VisualState {
    let scrolled = scroll_y.max(0.0);
    let mut state = VisualState::new();

    let progress = scroll_progress(scrolled, viewport.max_scroll());
    for (i, layer) in scene.layers.iter().enumerate() {
        state.insert(
            ElementId::Layer(i),
            StyleProps::transform(layer.transform(scrolled, progress)),
        );
    }

    let progress = group_progress(scrolled, viewport.height);
    for (i, group) in scene.groups.iter().enumerate() {
        if let Some(props) = group.style(progress, time_seconds) {
            state.insert(ElementId::Group(i), props);
        }
    }

    if let Some(threshold) = scene.indicator_threshold {
        state.insert(
            ElementId::ScrollIndicator,
            StyleProps::hidden(indicator_hidden(scrolled, threshold)),
        );
    }

    state
}

/// The indicator disappears once the page is scrolled past `threshold`.
pub fn indicator_hidden(scrolled: f64, threshold: f64) -> bool {
    scrolled > threshold
}
