use std::cell::Cell;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::EventTarget;

/// One handler subscribed to several event types on the same target.
///
/// [`disarm`](Self::disarm) removes every subscription at once and is safe to
/// call from inside the handler. Dropping the listener disarms it.
pub struct OneShotListener {
    target: EventTarget,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
    armed: Cell<bool>,
}

impl OneShotListener {
    pub fn arm(
        target: EventTarget,
        events: &'static [&'static str],
        handler: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(handler);
        let listener = Self {
            target,
            events,
            callback,
            armed: Cell::new(true),
        };
        for event in events {
            listener
                .target
                .add_event_listener_with_callback(event, listener.callback.as_ref().unchecked_ref())?;
        }
        Ok(listener)
    }

    pub fn disarm(&self) {
        if !self.armed.replace(false) {
            return;
        }
        for event in self.events {
            if let Err(e) = self
                .target
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }
    }
}

impl Drop for OneShotListener {
    fn drop(&mut self) {
        self.disarm();
    }
}
