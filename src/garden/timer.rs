//! One-shot delayed callbacks.
//!
//! Thin wrapper over `setTimeout` handing back a cancellable handle: dropping
//! a [`TimerHandle`] clears the timeout, [`TimerHandle::forget`] releases the
//! callback to fire on its own. Handles are retained where a newer action
//! must supersede a pending one (counter pop, clear sweep).

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

pub(super) struct TimerHandle {
    id: i32,
    closure: Option<Closure<dyn FnMut()>>,
}

/// Run `f` once after `delay_ms` milliseconds.
pub(super) fn after(delay_ms: i32, f: impl FnOnce() + 'static) -> Result<TimerHandle, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::once(f);
    let id = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    Ok(TimerHandle {
        id,
        closure: Some(closure),
    })
}

impl TimerHandle {
    /// Let the callback fire unmanaged; the handle gives up cancellation.
    pub(super) fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        // Still holding the callback means nobody released it: cancel.
        if self.closure.is_some() {
            if let Some(win) = window() {
                win.clear_timeout_with_handle(self.id);
            }
        }
    }
}
