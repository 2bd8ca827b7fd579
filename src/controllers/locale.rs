//! Language dropdown for the landing page hero.

use std::rc::Rc;

use log::{debug, warn};

use crate::config::LANGUAGE_KEY;
use crate::i18n::{HeroTexts, Locale};
use crate::platform::KeyValueStore;

pub struct LocaleController {
    store: Rc<dyn KeyValueStore>,
    current: Locale,
    panel_open: bool,
}

impl LocaleController {
    /// Read the persisted language; unknown or absent codes fall back to pt.
    /// Loading never writes.
    pub fn load(store: Rc<dyn KeyValueStore>) -> Self {
        let current = store
            .get(LANGUAGE_KEY)
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or_default();
        Self {
            store,
            current,
            panel_open: false,
        }
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn texts(&self) -> &'static HeroTexts {
        self.current.texts()
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_open
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// A document click landed; clicks outside the dropdown close an open panel.
    /// Returns true when the panel was closed by this click.
    pub fn click_outside(&mut self, inside_dropdown: bool) -> bool {
        if inside_dropdown || !self.panel_open {
            return false;
        }
        self.close_panel();
        true
    }

    /// Switch to `code` and persist it. Unknown codes change nothing.
    pub fn apply(&mut self, code: &str) -> Option<&'static HeroTexts> {
        let Some(locale) = Locale::from_code(code) else {
            debug!("[LOCALE] Ignoring unknown language code {:?}", code);
            return None;
        };
        self.current = locale;
        if let Err(e) = self.store.set(LANGUAGE_KEY, locale.code()) {
            warn!("[LOCALE] Failed to persist language: {}", e);
        }
        Some(locale.texts())
    }

    /// Dropdown option picked: apply and close the panel
    pub fn select(&mut self, code: &str) -> Option<&'static HeroTexts> {
        let texts = self.apply(code);
        self.close_panel();
        texts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::MemoryStore;

    #[test]
    fn test_apply_each_locale() {
        for locale in Locale::ALL {
            let store = Rc::new(MemoryStore::default());
            let mut ctrl = LocaleController::load(store.clone());
            let texts = ctrl.apply(locale.code()).expect("known locale");
            assert_eq!(texts, locale.texts());
            assert_eq!(ctrl.current(), locale);
            assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some(locale.code()));
        }
    }

    #[test]
    fn test_unknown_code_is_ignored() {
        let store = Rc::new(MemoryStore::with(LANGUAGE_KEY, "en"));
        let mut ctrl = LocaleController::load(store.clone());

        assert!(ctrl.apply("de").is_none());
        assert_eq!(ctrl.current(), Locale::En);
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_load_falls_back_without_writing() {
        let store = Rc::new(MemoryStore::with(LANGUAGE_KEY, "klingon"));
        let ctrl = LocaleController::load(store.clone());
        assert_eq!(ctrl.current(), Locale::Pt);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_outside_click_closes_open_panel() {
        let mut ctrl = LocaleController::load(Rc::new(MemoryStore::default()));
        assert!(!ctrl.click_outside(false));

        ctrl.toggle_panel();
        assert!(!ctrl.click_outside(true));
        assert!(ctrl.panel_open());

        assert!(ctrl.click_outside(false));
        assert!(!ctrl.panel_open());
    }

    #[test]
    fn test_select_closes_panel() {
        let mut ctrl = LocaleController::load(Rc::new(MemoryStore::default()));
        assert!(ctrl.toggle_panel());
        ctrl.select("es");
        assert!(!ctrl.panel_open());
        assert_eq!(ctrl.texts().cta, "Empiece ahora gratis");

        ctrl.toggle_panel();
        ctrl.select("xx");
        assert!(!ctrl.panel_open());
        assert_eq!(ctrl.current(), Locale::Es);
    }
}
