use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// A callback scheduled for the next paint. Dropping it cancels the request.
pub struct NextFrame {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl NextFrame {
    pub fn request(callback: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut()>::new(callback);
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for NextFrame {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}
