//! Light/dark theme toggle.

use std::rc::Rc;

use log::warn;

use crate::config::THEME_KEY;
use crate::platform::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    /// Anything but `"dark"` reads as light
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => ThemeState::Dark,
            _ => ThemeState::Light,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    /// Icon offering the other mode: a sun in dark mode, a moon in light mode
    pub fn icon_class(&self) -> &'static str {
        match self {
            ThemeState::Dark => "bi bi-brightness-high",
            ThemeState::Light => "bi bi-moon-stars",
        }
    }
}

pub struct ThemeController {
    store: Rc<dyn KeyValueStore>,
    state: ThemeState,
}

impl ThemeController {
    pub fn load(store: Rc<dyn KeyValueStore>) -> Self {
        let state = store
            .get(THEME_KEY)
            .map(|s| ThemeState::from_str(&s))
            .unwrap_or_default();
        Self { store, state }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn is_dark(&self) -> bool {
        self.state == ThemeState::Dark
    }

    pub fn icon_class(&self) -> &'static str {
        self.state.icon_class()
    }

    /// Flip and persist. Returns the new state.
    pub fn toggle(&mut self) -> ThemeState {
        self.state = self.state.flipped();
        if let Err(e) = self.store.set(THEME_KEY, self.state.as_str()) {
            warn!("[THEME] Failed to persist theme: {}", e);
        }
        self.state
    }
}
