//! Page Bindings
//!
//! Every page loads the same bundle. Each binding looks up its elements and
//! stays inert when they are not on the current page.

mod auth;
mod dom;
mod locale;
mod quiz;
mod theme;
mod tracks;
mod upload;

use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{Document, Window};

use crate::error::{AppError, AppResult};
use crate::platform::{
    BrowserInteraction, BrowserTimer, Interaction, KeyValueStore, LocalStore, MemoryStore, Timer,
};

/// Attach every page binding once the document is parsed
pub fn init_all() {
    let Some(window) = web_sys::window() else { return };
    let Some(doc) = window.document() else { return };

    if doc.ready_state() == "loading" {
        let loaded = doc.clone();
        dom::listen(&doc, "DOMContentLoaded", move |_| attach_all(&window, &loaded));
    } else {
        attach_all(&window, &doc);
    }
}

fn attach_all(window: &Window, doc: &Document) {
    let store: Rc<dyn KeyValueStore> = match LocalStore::open() {
        Some(store) => Rc::new(store),
        None => {
            warn!("[PAGE] localStorage unavailable, preferences will not persist");
            Rc::new(MemoryStore::default())
        }
    };
    let interaction: Rc<dyn Interaction> = Rc::new(BrowserInteraction::new(window.clone()));
    let timer: Rc<dyn Timer> = Rc::new(BrowserTimer);

    report("theme", theme::attach(doc, store.clone()));
    report("locale", locale::attach(doc, store.clone()));
    report("quiz", quiz::attach(doc, timer));
    report("tracks", tracks::attach(doc, store, interaction.clone()));
    report("upload", upload::attach(doc));
    report("auth forms", auth::attach_forms(doc, interaction));
    report("auth tabs", auth::attach_tabs(doc));
    info!("[PAGE] Initialized");
}

fn report(name: &str, result: AppResult<()>) {
    match result {
        Ok(()) => debug!("[PAGE] {} attached", name),
        Err(AppError::MissingElement(id)) => debug!("[PAGE] {} inert: #{} not on this page", name, id),
        Err(e) => warn!("[PAGE] {} failed to attach: {}", name, e),
    }
}
