//! Platform Capabilities
//!
//! The browser services controllers depend on, behind small traits so the
//! controllers run against in-memory fakes in tests.

mod browser;
mod memory;
#[cfg(test)]
pub mod testing;

pub use browser::{BrowserInteraction, BrowserTimer, LocalStore};
pub use memory::MemoryStore;

use crate::error::AppResult;

/// Flat string key-value persistence (localStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Blocking user dialogs and page navigation
pub trait Interaction {
    fn alert(&self, message: &str);
    /// `None` when the user cancels
    fn prompt(&self, message: &str) -> Option<String>;
    fn navigate(&self, url: &str) -> AppResult<()>;
}

/// Deferred callbacks
pub trait Timer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Handle to a scheduled callback. Dropping it leaves the callback scheduled.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Prevent the callback from running if it has not run yet
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
