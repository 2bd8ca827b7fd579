//! Login page: form submits and the animated login/signup tabs.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use super::dom::{by_id, input_value, listen, query_all, require, set_class, set_text};
use crate::config::{
    ACTIVE_CLASS, ERROR_MESSAGE_ID, FORMS_WRAPPER_ID, GOOGLE_LOGIN_ID, LOGIN_EMAIL_ID,
    LOGIN_FORM_ID, LOGIN_PASSWORD_ID, SIGNUP_EMAIL_ID, SIGNUP_FORM_ID, SIGNUP_NAME_ID,
    SIGNUP_PASSWORD_ID, SWITCH_TAB_SELECTOR, TAB_BUTTON_SELECTOR, TAB_INDICATOR_ID,
};
use crate::controllers::{AuthFormController, Tab, TabController};
use crate::error::AppResult;
use crate::platform::Interaction;

pub fn attach_forms(doc: &Document, interaction: Rc<dyn Interaction>) -> AppResult<()> {
    let login_form: Element = require(doc, LOGIN_FORM_ID)?;
    let error_slot: Option<Element> = by_id(doc, ERROR_MESSAGE_ID);
    let auth = Rc::new(AuthFormController::new(interaction));

    {
        let auth = auth.clone();
        let doc = doc.clone();
        listen(&login_form, "submit", move |ev| {
            ev.prevent_default();
            let email = input_value(&doc, LOGIN_EMAIL_ID);
            let password = input_value(&doc, LOGIN_PASSWORD_ID);
            auth.submit_login(&email, &password);
            if let Some(slot) = &error_slot {
                set_text(slot, &auth.error_message());
            }
        });
    }

    if let Some(signup_form) = by_id::<Element>(doc, SIGNUP_FORM_ID) {
        let auth = auth.clone();
        let doc = doc.clone();
        listen(&signup_form, "submit", move |ev| {
            ev.prevent_default();
            auth.submit_signup(
                &input_value(&doc, SIGNUP_NAME_ID),
                &input_value(&doc, SIGNUP_EMAIL_ID),
                &input_value(&doc, SIGNUP_PASSWORD_ID),
            );
        });
    }

    if let Some(google) = by_id::<Element>(doc, GOOGLE_LOGIN_ID) {
        listen(&google, "click", move |_| auth.google_login());
    }
    Ok(())
}

/// Elements moved by a tab switch
struct TabView {
    buttons: Vec<HtmlElement>,
    wrapper: HtmlElement,
    indicator: Option<HtmlElement>,
}

impl TabView {
    fn render(&self, tabs: &TabController) {
        for button in &self.buttons {
            let tab = button.get_attribute("data-tab").and_then(|t| Tab::from_str(&t));
            set_class(button, ACTIVE_CLASS, tab.map_or(false, |t| tabs.is_active(t)));
        }
        if let Some(indicator) = &self.indicator {
            let _ = indicator.style().set_property("transform", tabs.indicator_offset());
        }
        let _ = self.wrapper.style().set_property("transform", tabs.panel_offset());
    }
}

pub fn attach_tabs(doc: &Document) -> AppResult<()> {
    let wrapper: HtmlElement = require(doc, FORMS_WRAPPER_ID)?;
    let view = Rc::new(TabView {
        buttons: query_all(doc, TAB_BUTTON_SELECTOR),
        wrapper,
        indicator: by_id(doc, TAB_INDICATOR_ID),
    });
    let tabs = Rc::new(RefCell::new(TabController::new()));
    view.render(&tabs.borrow());

    let triggers = view
        .buttons
        .iter()
        .cloned()
        .chain(query_all(doc, SWITCH_TAB_SELECTOR));
    for trigger in triggers {
        let Some(tab) = trigger.get_attribute("data-tab").and_then(|t| Tab::from_str(&t)) else {
            continue;
        };
        let tabs = tabs.clone();
        let view = view.clone();
        listen(&trigger, "click", move |ev| {
            ev.prevent_default();
            let mut tabs = tabs.borrow_mut();
            tabs.activate(tab);
            view.render(&tabs);
        });
    }
    Ok(())
}
