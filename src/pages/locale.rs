//! Landing page language dropdown.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use super::dom::{by_id, listen, require, set_class, set_text};
use crate::config::{
    CTA_BUTTON_ID, HERO_SUBTITLE_ID, HERO_TITLE_ID, LANG_DROPDOWN_ID, LANG_OPTIONS_ID,
    LANG_TOGGLE_ID, LOGIN_BUTTON_ID, SHOW_CLASS,
};
use crate::controllers::LocaleController;
use crate::error::AppResult;
use crate::i18n::HeroTexts;
use crate::platform::KeyValueStore;

/// The text slots a locale writes into
struct HeroSlots {
    title: Element,
    subtitle: Option<Element>,
    cta: Option<Element>,
    login: Element,
}

impl HeroSlots {
    fn render(&self, texts: &HeroTexts) {
        set_text(&self.title, texts.title);
        if let Some(subtitle) = &self.subtitle {
            set_text(subtitle, texts.subtitle);
        }
        if let Some(cta) = &self.cta {
            set_text(cta, texts.cta);
        }
        set_text(&self.login, texts.login);
    }
}

pub fn attach(doc: &Document, store: Rc<dyn KeyValueStore>) -> AppResult<()> {
    let toggle: Element = require(doc, LANG_TOGGLE_ID)?;
    let slots = Rc::new(HeroSlots {
        title: require(doc, HERO_TITLE_ID)?,
        subtitle: by_id(doc, HERO_SUBTITLE_ID),
        cta: by_id(doc, CTA_BUTTON_ID),
        login: require(doc, LOGIN_BUTTON_ID)?,
    });
    let options: Element = require(doc, LANG_OPTIONS_ID)?;
    let dropdown: Element = require(doc, LANG_DROPDOWN_ID)?;

    let locale = Rc::new(RefCell::new(LocaleController::load(store)));
    slots.render(locale.borrow().texts());

    {
        let locale = locale.clone();
        let options = options.clone();
        listen(&toggle, "click", move |ev| {
            ev.stop_propagation();
            let open = locale.borrow_mut().toggle_panel();
            set_class(&options, SHOW_CLASS, open);
        });
    }

    {
        let locale = locale.clone();
        let options = options.clone();
        listen(doc, "click", move |ev| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .map(|node| dropdown.contains(Some(&node)))
                .unwrap_or(false);
            if locale.borrow_mut().click_outside(inside) {
                set_class(&options, SHOW_CLASS, false);
            }
        });
    }

    let panel = options.clone();
    listen(&options, "click", move |ev| {
        let Some(link) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if link.tag_name() != "A" {
            return;
        }
        ev.prevent_default();
        let code = link.get_attribute("data-lang").unwrap_or_default();
        if let Some(texts) = locale.borrow_mut().select(&code) {
            slots.render(texts);
        }
        set_class(&panel, SHOW_CLASS, false);
    });
    Ok(())
}
