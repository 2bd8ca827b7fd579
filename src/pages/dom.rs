//! DOM lookup and event helpers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlInputElement};

use crate::error::{AppError, AppResult};

/// Element by id, cast to the expected type
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Like `by_id`, but a missing element is a `MissingElement` error
pub fn require<T: JsCast>(doc: &Document, id: &str) -> AppResult<T> {
    by_id(doc, id).ok_or_else(|| AppError::MissingElement(id.to_string()))
}

/// All HTML elements matching a selector, in document order
pub fn query_all(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Current value of an input, empty when the input is absent
pub fn input_value(doc: &Document, id: &str) -> String {
    by_id::<HtmlInputElement>(doc, id)
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Attach a listener for the lifetime of the page
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

pub fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_text(el: &web_sys::Element, text: &str) {
    el.set_text_content(Some(text));
}
