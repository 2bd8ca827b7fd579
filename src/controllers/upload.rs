//! Local file selection display. Nothing is uploaded.

use log::debug;

pub struct UploadController {
    file_name: Option<String>,
    drop_active: bool,
}

impl UploadController {
    pub fn new() -> Self {
        Self {
            file_name: None,
            drop_active: false,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn drop_active(&self) -> bool {
        self.drop_active
    }

    /// Picker changed; `None` clears the selection
    pub fn select(&mut self, file_name: Option<String>) {
        debug!("[UPLOAD] Selection changed: {:?}", file_name);
        self.file_name = file_name;
    }

    pub fn drag_enter(&mut self) {
        self.drop_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drop_active = false;
    }

    /// Files dropped on the zone; the first one becomes the selection
    pub fn drop(&mut self, file_names: Vec<String>) {
        self.drop_active = false;
        if let Some(first) = file_names.into_iter().next() {
            self.select(Some(first));
        }
    }

    pub fn status_text(&self) -> String {
        match &self.file_name {
            Some(name) => format!("Arquivo selecionado: {}", name),
            None => String::new(),
        }
    }
}

impl Default for UploadController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_and_drop_agree() {
        let mut picked = UploadController::new();
        picked.select(Some("notas.pdf".to_string()));

        let mut dropped = UploadController::new();
        dropped.drag_enter();
        dropped.drop(vec!["notas.pdf".to_string(), "outro.txt".to_string()]);

        assert_eq!(picked.status_text(), dropped.status_text());
        assert_eq!(dropped.status_text(), "Arquivo selecionado: notas.pdf");
        assert!(!dropped.drop_active());
    }

    #[test]
    fn test_clearing_selection() {
        let mut upload = UploadController::new();
        upload.select(Some("a.png".to_string()));
        upload.select(None);
        assert_eq!(upload.status_text(), "");
    }

    #[test]
    fn test_empty_drop_keeps_selection() {
        let mut upload = UploadController::new();
        upload.select(Some("a.png".to_string()));
        upload.drag_enter();
        assert!(upload.drop_active());
        upload.drop(Vec::new());
        assert_eq!(upload.file_name(), Some("a.png"));
        assert!(!upload.drop_active());
    }

    #[test]
    fn test_drag_leave_clears_highlight() {
        let mut upload = UploadController::new();
        upload.drag_enter();
        upload.drag_leave();
        assert!(!upload.drop_active());
    }
}
