use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{console, window};

struct LoopState {
    running: Cell<bool>,
    frame_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Per-frame task that reschedules itself until stopped. Dropping the handle
/// stops it too.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start(mut tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            frame_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        // The closure only holds a weak reference so the handle owns the loop.
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        *state.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.frame_id.set(None);
            if !state.running.get() {
                return;
            }
            tick();

            // schedule next
            if state.running.get() {
                if let Err(e) = schedule(&state) {
                    console::error_2(&"animation frame request failed:".into(), &e);
                    state.running.set(false);
                }
            }
        }) as Box<dyn FnMut()>));

        schedule(&state)?;
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Cancels the pending frame. Idempotent.
    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(id) = self.state.frame_id.take() {
            if let Some(window) = window() {
                window.cancel_animation_frame(id).ok();
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(state: &LoopState) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let callback = state.callback.borrow();
    let callback = callback.as_ref().ok_or("animation callback missing")?;
    let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    state.frame_id.set(Some(id));
    Ok(())
}
