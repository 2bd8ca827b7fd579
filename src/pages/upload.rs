//! Upload page: file picker and drop zone, display only.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, HtmlInputElement};
use web_filedrop::{bind_file_drop, files_from_list, FileDropHandlers};

use super::dom::{by_id, listen, require, set_class, set_text};
use crate::config::{DRAG_OVER_CLASS, DROP_ZONE_ID, FILE_INPUT_ID, FILE_NAME_ID, UPLOAD_BUTTON_ID};
use crate::controllers::UploadController;
use crate::error::AppResult;

pub fn attach(doc: &Document) -> AppResult<()> {
    let button: HtmlElement = require(doc, UPLOAD_BUTTON_ID)?;
    let input: HtmlInputElement = require(doc, FILE_INPUT_ID)?;
    let status: Element = require(doc, FILE_NAME_ID)?;

    let upload = Rc::new(RefCell::new(UploadController::new()));

    {
        let input = input.clone();
        listen(&button, "click", move |_| input.click());
    }

    {
        let upload = upload.clone();
        let status = status.clone();
        let picker = input.clone();
        listen(&input, "change", move |_| {
            let name = files_from_list(picker.files())
                .first()
                .map(|file| file.name());
            let mut upload = upload.borrow_mut();
            upload.select(name);
            set_text(&status, &upload.status_text());
        });
    }

    // the drop zone is optional; older upload pages only have the picker
    if let Some(zone) = by_id::<HtmlElement>(doc, DROP_ZONE_ID) {
        let active_upload = upload.clone();
        let highlight = zone.clone();
        bind_file_drop(
            &zone,
            FileDropHandlers {
                on_active: Box::new(move |active| {
                    let mut upload = active_upload.borrow_mut();
                    if active {
                        upload.drag_enter();
                    } else {
                        upload.drag_leave();
                    }
                    set_class(&highlight, DRAG_OVER_CLASS, upload.drop_active());
                }),
                on_drop: Box::new(move |files| {
                    let mut upload = upload.borrow_mut();
                    upload.drop(files.iter().map(|file| file.name()).collect());
                    set_text(&status, &upload.status_text());
                }),
            },
        );
    }
    Ok(())
}
