//! Browser implementations of the platform capabilities.

use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;

use super::{Interaction, KeyValueStore, Timer, TimerHandle};
use crate::error::{AppError, AppResult};

fn js_error(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// `window.localStorage` through gloo-storage.
///
/// Values are kept as plain strings (`dark`, `pt`, the tracks JSON), so the
/// raw storage is used instead of gloo's JSON-encoding `get`/`set`.
pub struct LocalStore;

impl LocalStore {
    /// `None` when storage is unavailable (private mode, sandboxed frame)
    pub fn open() -> Option<Self> {
        web_sys::window()?.local_storage().ok()??;
        Some(Self)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| AppError::Storage(js_error(e)))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        LocalStorage::delete(key);
        Ok(())
    }
}

/// `window.alert`, `window.prompt` and `location.href`
pub struct BrowserInteraction {
    window: web_sys::Window,
}

impl BrowserInteraction {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Interaction for BrowserInteraction {
    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.window.prompt_with_message(message).ok().flatten()
    }

    fn navigate(&self, url: &str) -> AppResult<()> {
        self.window
            .location()
            .set_href(url)
            .map_err(|e| AppError::Interaction(js_error(e)))
    }
}

/// `setTimeout` through gloo-timers
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let id = Timeout::new(delay_ms, callback).forget();
        TimerHandle::new(move || {
            if let (Some(win), Some(id)) = (web_sys::window(), id.as_f64()) {
                win.clear_timeout_with_handle(id as i32);
            }
        })
    }
}
