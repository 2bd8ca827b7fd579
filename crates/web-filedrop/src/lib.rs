//! Web FileDrop Utilities
//!
//! Native HTML5 file drop for plain DOM elements.
//! Wires dragenter/dragover/dragleave/drop on a zone, suppresses the browser's
//! default "open the file" handling and hands the dropped files to a callback.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileList, HtmlElement, Node};

/// Events bound on a drop zone
const DRAG_ACTIVATE_EVENTS: [&str; 2] = ["dragenter", "dragover"];

/// Callbacks for a drop zone
pub struct FileDropHandlers {
    /// Called with `true` when a drag hovers the zone, `false` when it leaves or drops
    pub on_active: Box<dyn Fn(bool)>,
    /// Called with the dropped files (possibly empty)
    pub on_drop: Box<dyn Fn(Vec<File>)>,
}

/// Hover state of a zone. Reports only real changes.
#[derive(Debug, Default)]
pub struct DropHover {
    active: Cell<bool>,
}

impl DropHover {
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// dragenter/dragover. `Some(true)` when the zone just lit up.
    pub fn enter(&self) -> Option<bool> {
        self.set(true)
    }

    /// dragleave. Moving onto a child of the zone is not a leave.
    pub fn leave(&self, to_inside_zone: bool) -> Option<bool> {
        if to_inside_zone {
            return None;
        }
        self.set(false)
    }

    /// drop always ends the hover
    pub fn drop(&self) -> Option<bool> {
        self.set(false)
    }

    fn set(&self, active: bool) -> Option<bool> {
        if self.active.replace(active) == active {
            None
        } else {
            Some(active)
        }
    }
}

/// Collect a `FileList` into owned `File`s, in order
pub fn files_from_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else { return Vec::new() };
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Files carried by a drag event
pub fn dropped_files(ev: &DragEvent) -> Vec<File> {
    files_from_list(ev.data_transfer().and_then(|dt| dt.files()))
}

/// Bind drop handling on `zone`. Listeners live for the lifetime of the page.
pub fn bind_file_drop(zone: &HtmlElement, handlers: FileDropHandlers) {
    let handlers = Rc::new(handlers);
    let hover = Rc::new(DropHover::default());

    for name in DRAG_ACTIVATE_EVENTS {
        let h = handlers.clone();
        let hover = hover.clone();
        let cb = Closure::<dyn FnMut(DragEvent)>::new(move |ev: DragEvent| {
            ev.prevent_default();
            if let Some(active) = hover.enter() {
                (h.on_active)(active);
            }
        });
        let _ = zone.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        cb.forget();
    }

    let h = handlers.clone();
    let leave_hover = hover.clone();
    let leave_zone = zone.clone();
    let on_leave = Closure::<dyn FnMut(DragEvent)>::new(move |ev: DragEvent| {
        let to_inside = ev
            .related_target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .map(|node| leave_zone.contains(Some(&node)))
            .unwrap_or(false);
        if let Some(active) = leave_hover.leave(to_inside) {
            (h.on_active)(active);
        }
    });
    let _ = zone.add_event_listener_with_callback("dragleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();

    let h = handlers;
    let on_drop = Closure::<dyn FnMut(DragEvent)>::new(move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(active) = DropHover::drop(&hover) {
            (h.on_active)(active);
        }
        (h.on_drop)(dropped_files(&ev));
    });
    let _ = zone.add_event_listener_with_callback("drop", on_drop.as_ref().unchecked_ref());
    on_drop.forget();
}
