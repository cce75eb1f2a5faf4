use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlDocument, HtmlTextAreaElement, Window};

use crate::clipboard::{ClipboardBackend, Confirmation, CopyError, WriteDone};

/// Clipboard access through the page's `navigator` and `document`.
pub struct BrowserClipboard {
    window: Window,
}

impl BrowserClipboard {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ClipboardBackend for BrowserClipboard {
    fn async_available(&self) -> bool {
        self.window.is_secure_context() && clipboard_api(&self.window).is_some()
    }

    fn write_async(&self, text: &str, done: WriteDone) {
        let promise = clipboard_api(&self.window)
            .ok_or_else(|| JsValue::from_str("navigator.clipboard is unavailable"))
            .and_then(|clipboard| write_text(&clipboard, text));
        let promise = match promise {
            Ok(p) => p,
            Err(e) => return done(Err(CopyError::Rejected(describe(&e)))),
        };
        spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| CopyError::Rejected(describe(&e)));
            done(result);
        });
    }

    fn copy_legacy(&self, text: &str) -> Result<(), CopyError> {
        let document = self
            .window
            .document()
            .ok_or_else(|| CopyError::Dom("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| CopyError::Dom("no body".into()))?;
        let area = document
            .create_element("textarea")
            .map_err(dom_error)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| CopyError::Dom("textarea is not an HTMLTextAreaElement".into()))?;

        area.set_value(text);
        let style = area.style();
        style.set_property("position", "fixed").map_err(dom_error)?;
        style.set_property("left", "-999999px").map_err(dom_error)?;
        body.append_child(&area).map_err(dom_error)?;
        area.focus().ok();
        area.select();

        // Only a throw is a failure; a `false` return still counts as copied.
        let result = document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| CopyError::Dom("document is not an HTMLDocument".into()))
            .and_then(|doc| {
                doc.exec_command("copy")
                    .map(|_| ())
                    .map_err(|e| CopyError::Command(describe(&e)))
            });

        area.remove();
        result
    }
}

fn clipboard_api(window: &Window) -> Option<JsValue> {
    Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn write_text(clipboard: &JsValue, text: &str) -> Result<Promise, JsValue> {
    let write: Function = Reflect::get(clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    write.call1(clipboard, &JsValue::from_str(text))?.dyn_into()
}

fn dom_error(e: JsValue) -> CopyError {
    CopyError::Dom(describe(&e))
}

fn describe(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

/// Toggles a class on the confirmation element for a fixed window.
pub struct MessageConfirmation {
    window: Window,
    element_id: &'static str,
    visible_class: &'static str,
}

impl MessageConfirmation {
    pub fn new(window: Window, element_id: &'static str, visible_class: &'static str) -> Self {
        Self {
            window,
            element_id,
            visible_class,
        }
    }
}

impl Confirmation for MessageConfirmation {
    fn flash(&self, duration_ms: i32) {
        let Some(message) = self
            .window
            .document()
            .and_then(|d| d.get_element_by_id(self.element_id))
        else {
            return;
        };
        if message.class_list().add_1(self.visible_class).is_err() {
            return;
        }

        let class = self.visible_class;
        let hide = Closure::once(move || {
            message.class_list().remove_1(class).ok();
        });
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.as_ref().unchecked_ref(),
                duration_ms,
            )
            .ok();
        hide.forget();
    }
}
