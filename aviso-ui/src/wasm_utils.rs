//! Browser interop for the toast viewport
//!
//! JS listeners hold a `Closure` that must outlive the listener. Instead of
//! `Closure::forget()`, the closure lives in a struct whose `Drop` removes the
//! listener again, so the listener's lifetime follows Rust ownership:
//!
//! ```ignore
//! let listener = HotkeyListener::new(document, "F8".to_string(), || focus_viewport());
//! drop(listener); // listener detached
//! ```

use wasm_bindgen_x::prelude::*;

/// A document `keydown` listener for one key that detaches itself when dropped.
pub struct HotkeyListener {
    document: web_sys_x::Document,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl HotkeyListener {
    /// Call `on_press` whenever `key` (a DOM `KeyboardEvent.key` value) is pressed
    /// without modifiers.
    pub fn new(
        document: web_sys_x::Document,
        key: String,
        mut on_press: impl FnMut() + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(move |event: JsValue| {
            let Some(event) = event.dyn_ref::<web_sys_x::KeyboardEvent>() else {
                return;
            };
            let modified =
                event.alt_key() || event.ctrl_key() || event.meta_key() || event.shift_key();
            if !modified && event.key() == key {
                event.prevent_default();
                on_press();
            }
        }));

        document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok();

        Self { document, callback }
    }
}

impl Drop for HotkeyListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

/// Move keyboard focus to the element with `id`, if it exists.
pub fn focus_element_by_id(document: &web_sys_x::Document, id: &str) {
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    if let Ok(element) = element.dyn_into::<web_sys_x::HtmlElement>() {
        let _ = element.focus();
    }
}
