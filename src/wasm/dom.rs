use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element, HtmlElement, Window};

use crate::config::PageConfig;
use crate::effects::{
    compute_visual_state, layer_index, parse_speed, ElementId, GroupKind, LayerKind, LayerSpec,
    Scene, StyleProps, Viewport, VisualState,
};

/// Handles to the animated elements of the page, in the same order as the
/// [`Scene`] built from them.
pub struct Page {
    layers: Vec<HtmlElement>,
    groups: Vec<HtmlElement>,
    indicator: Option<Element>,
    scene: Scene,
    config: PageConfig,
}

impl Page {
    pub fn scan(document: &Document, config: PageConfig) -> Result<Self, JsValue> {
        let layers = query_all(document, config.layer_selector)?;
        let groups = query_all(document, config.group_selector)?;
        let indicator = document.get_element_by_id(config.indicator_id);

        let layer_specs = layers
            .iter()
            .map(|el| {
                let names = class_names(el);
                let index = layer_index(names.iter().map(String::as_str), config.layer_class_prefix);
                let raw = el.get_attribute(&format!("data-{}", config.speed_attribute));
                let speed = parse_speed(raw.as_deref()).unwrap_or_else(|| {
                    console::warn_1(
                        &format!("parallax: layer {:?} has no usable speed, using 0", names)
                            .into(),
                    );
                    0.0
                });
                LayerSpec::new(LayerKind::from_index(index), speed)
            })
            .collect();
        let group_kinds = groups
            .iter()
            .map(|el| {
                let names = class_names(el);
                GroupKind::from_classes(names.iter().map(String::as_str))
            })
            .collect();

        let scene = Scene {
            layers: layer_specs,
            groups: group_kinds,
            indicator_threshold: indicator.as_ref().map(|_| config.indicator_threshold_px),
        };
        Ok(Self {
            layers,
            groups,
            indicator,
            scene,
            config,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn apply(&self, state: &VisualState) -> Result<(), JsValue> {
        for (id, props) in state {
            match *id {
                ElementId::Layer(i) => {
                    if let Some(el) = self.layers.get(i) {
                        apply_style(el, props)?;
                    }
                }
                ElementId::Group(i) => {
                    if let Some(el) = self.groups.get(i) {
                        apply_style(el, props)?;
                    }
                }
                ElementId::ScrollIndicator => {
                    if let (Some(el), Some(hidden)) = (&self.indicator, props.hidden) {
                        el.class_list()
                            .toggle_with_force(self.config.indicator_hidden_class, hidden)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn apply_style(el: &HtmlElement, props: &StyleProps) -> Result<(), JsValue> {
    let style = el.style();
    if let Some(transform) = props.transform_css() {
        style.set_property("transform", &transform)?;
    }
    if let Some(opacity) = props.opacity_css() {
        style.set_property("opacity", &opacity)?;
    }
    Ok(())
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn class_names(el: &Element) -> Vec<String> {
    let list = el.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

pub fn viewport(window: &Window) -> Result<Viewport, JsValue> {
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("innerHeight is not a number")?;
    let scroll_height = window
        .document()
        .and_then(|d| d.body())
        .map(|body| body.scroll_height() as f64)
        .unwrap_or(height);
    Ok(Viewport {
        height,
        scroll_height,
    })
}

/// Wall-clock time in seconds, the clock the bobbing waves run on.
pub fn now_seconds() -> f64 {
    js_sys::Date::now() * 0.001
}

/// Samples the window and writes one frame of styles.
pub fn update(window: &Window, page: &Page) -> Result<(), JsValue> {
    let scroll_y = window.page_y_offset()?;
    let state = compute_visual_state(page.scene(), scroll_y, now_seconds(), viewport(window)?);
    page.apply(&state)
}
