use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlMediaElement;

#[derive(Error, Debug)]
pub enum PlaybackError {
    /// Autoplay policy or a failed fetch turned the play request down.
    #[error("Play request rejected: {0}")]
    Rejected(String),
    #[error("Media element refused the request")]
    Unavailable,
}

impl From<JsValue> for PlaybackError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => PlaybackError::Rejected(message),
            None if value.is_undefined() || value.is_null() => PlaybackError::Unavailable,
            None => PlaybackError::Rejected(format!("{:?}", value)),
        }
    }
}

/// Mutes and starts `media`. Rejections are logged and dropped; the next
/// playback sync simply asks again.
pub fn start_muted(media: &HtmlMediaElement) {
    media.set_muted(true);
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("{}", PlaybackError::from(e));
            }
        }),
        Err(e) => log::debug!("{}", PlaybackError::from(e)),
    }
}

pub fn pause(media: &HtmlMediaElement) {
    if let Err(e) = media.pause() {
        log::debug!("Pause failed: {}", PlaybackError::from(e));
    }
}

/// Swaps the source only when it differs, so a playing element is not reloaded.
pub fn ensure_source(media: &HtmlMediaElement, source: &str) {
    if media.src() != source {
        media.set_src(source);
    }
}
