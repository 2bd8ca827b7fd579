//! Theme toggle binding. Present on every page.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use super::dom::{listen, require, set_class};
use crate::config::{DARK_MODE_CLASS, THEME_ICON_ID, THEME_TOGGLE_ID};
use crate::controllers::ThemeController;
use crate::error::{AppError, AppResult};
use crate::platform::KeyValueStore;

pub fn attach(doc: &Document, store: Rc<dyn KeyValueStore>) -> AppResult<()> {
    let toggle: HtmlElement = require(doc, THEME_TOGGLE_ID)?;
    let icon: Element = require(doc, THEME_ICON_ID)?;
    let body = doc
        .body()
        .ok_or_else(|| AppError::MissingElement("body".to_string()))?;

    let theme = Rc::new(RefCell::new(ThemeController::load(store)));
    render(&body, &icon, &theme.borrow());

    listen(&toggle, "click", move |_| {
        let mut theme = theme.borrow_mut();
        theme.toggle();
        render(&body, &icon, &theme);
    });
    Ok(())
}

fn render(body: &HtmlElement, icon: &Element, theme: &ThemeController) {
    set_class(body, DARK_MODE_CLASS, theme.is_dark());
    icon.set_class_name(theme.icon_class());
}
