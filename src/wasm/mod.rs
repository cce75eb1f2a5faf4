//! Browser entry points: wires the render step to scroll/load events and the
//! frame loop, and exposes the copy button handler to the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{console, Document, Window};

use crate::clipboard::{copy_text, CopyOutcome};
use crate::config::PageConfig;

pub mod animation;
pub mod clipboard;
pub mod dom;
pub mod listener;

use animation::AnimationLoop;
use clipboard::{BrowserClipboard, MessageConfirmation};
use dom::Page;
use listener::Listener;

/// Everything that keeps the effects alive; dropping it tears them down.
struct Controller {
    window: Window,
    document: Document,
    page: Rc<RefCell<Page>>,
    _animation: AnimationLoop,
    _listeners: Vec<Listener>,
}

thread_local! {
    static CONTROLLER: RefCell<Option<Controller>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let page = Rc::new(RefCell::new(Page::scan(&document, PageConfig::default())?));
    log_scene(&page.borrow());

    let update = {
        let window = window.clone();
        let page = page.clone();
        move || render(&window, &page)
    };
    let reload = {
        let window = window.clone();
        let document = document.clone();
        let page = page.clone();
        move || {
            rescan(&document, &page);
            render(&window, &page);
        }
    };

    update();
    let listeners = vec![
        Listener::new(&window, "scroll", update.clone())?,
        Listener::new(&window, "load", reload.clone())?,
        Listener::new(&document, "DOMContentLoaded", reload)?,
    ];
    let animation = AnimationLoop::start(update)?;

    CONTROLLER.with(|c| {
        *c.borrow_mut() = Some(Controller {
            window,
            document,
            page,
            _animation: animation,
            _listeners: listeners,
        })
    });
    Ok(())
}

/// Copies the server address. `on_outcome`, if given, is called with `true`
/// once the copy succeeded and `false` if it failed.
#[wasm_bindgen]
pub fn copy_address(on_outcome: Option<js_sys::Function>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let config = PageConfig::default();
    let backend = BrowserClipboard::new(window.clone());
    let confirmation = Rc::new(MessageConfirmation::new(
        window,
        config.confirmation_id,
        config.confirmation_visible_class,
    ));

    copy_text(
        &backend,
        confirmation,
        config.copy_address,
        config.confirmation_ms,
        move |outcome| {
            if let CopyOutcome::Failed { error, .. } = &outcome {
                console::error_2(&"Failed to copy IP:".into(), &error.to_string().into());
            }
            if let Some(callback) = on_outcome {
                callback
                    .call1(&JsValue::NULL, &JsValue::from_bool(outcome.is_copied()))
                    .ok();
            }
        },
    );
    Ok(())
}

/// Re-reads the page's animated elements and renders one frame. For pages
/// that inject sections after start-up.
#[wasm_bindgen]
pub fn refresh_effects() {
    CONTROLLER.with(|c| {
        if let Some(controller) = c.borrow().as_ref() {
            rescan(&controller.document, &controller.page);
            render(&controller.window, &controller.page);
        }
    });
}

/// Stops the frame loop and removes the scroll/load listeners.
#[wasm_bindgen]
pub fn stop_effects() {
    let controller = CONTROLLER.with(|c| c.borrow_mut().take());
    if controller.is_some() {
        console::log_1(&"parallax: effects stopped".into());
    }
}

fn render(window: &Window, page: &RefCell<Page>) {
    if let Err(e) = dom::update(window, &page.borrow()) {
        console::error_2(&"parallax: update failed:".into(), &e);
    }
}

fn rescan(document: &Document, page: &RefCell<Page>) {
    let config = page.borrow().config().clone();
    match Page::scan(document, config) {
        Ok(scanned) => *page.borrow_mut() = scanned,
        Err(e) => console::error_2(&"parallax: page scan failed:".into(), &e),
    }
}

fn log_scene(page: &Page) {
    let scene = page.scene();
    console::log_1(
        &format!(
            "parallax: {} layers, {} groups",
            scene.layers.len(),
            scene.groups.len()
        )
        .into(),
    );
}
