//! Track list page.
//!
//! Cards are rendered by Leptos from a `reactive_stores::Store`; the "new
//! track" button lives in the static page markup.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use reactive_stores::Store;
use web_sys::{Document, Element, HtmlElement};

use super::dom::{listen, require};
use crate::config::{NEW_TRACK_ID, TRACK_LIST_ID};
use crate::controllers::{TrackListController, EMPTY_LIST_MESSAGE};
use crate::error::AppResult;
use crate::models::Track;
use crate::platform::{Interaction, KeyValueStore};

/// Tracks as rendered, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TrackBoard {
    pub tracks: Vec<Track>,
}

pub fn attach(
    doc: &Document,
    store: Rc<dyn KeyValueStore>,
    interaction: Rc<dyn Interaction>,
) -> AppResult<()> {
    let list: HtmlElement = require(doc, TRACK_LIST_ID)?;
    let new_button: Element = require(doc, NEW_TRACK_ID)?;

    let controller = Rc::new(RefCell::new(TrackListController::load(store)));
    let board = Store::new(TrackBoard {
        tracks: controller.borrow().tracks().to_vec(),
    });

    listen(&new_button, "click", move |_| {
        let mut controller = controller.borrow_mut();
        if controller.create(interaction.as_ref()).is_some() {
            *board.tracks().write() = controller.tracks().to_vec();
        }
    });

    list.set_inner_html("");
    mount_to(list, move || track_list_view(board)).forget();
    Ok(())
}

fn track_list_view(board: Store<TrackBoard>) -> impl IntoView {
    move || {
        let tracks = board.tracks().get();
        if tracks.is_empty() {
            view! { <p>{EMPTY_LIST_MESSAGE}</p> }.into_any()
        } else {
            tracks
                .into_iter()
                .map(|track| view! { <TrackCard track=track /> })
                .collect_view()
                .into_any()
        }
    }
}

/// One track with its progress bar
#[component]
fn TrackCard(track: Track) -> impl IntoView {
    let percent = track.percent();
    view! {
        <div class="trilha-card">
            <h3>{track.name}</h3>
            <p class="trilha-progresso">{format!("{}% concluído", percent)}</p>
            <div class="barra-progresso">
                <div class="barra-preenchida" style=format!("width: {}%", percent)></div>
            </div>
            <button class="btn btn-login">"Abrir"</button>
        </div>
    }
}
