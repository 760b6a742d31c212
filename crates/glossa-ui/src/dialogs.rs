use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// Native picker restricted to PDFs. `None` when cancelled.
pub fn pick_pdf() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Open PDF")
        .add_filter("PDF files", &["pdf"])
        .pick_file()
}

/// Blocking error alert
pub fn show_error(title: &str, message: &str) {
    tracing::debug!("[SLINT] Alert '{}': {}", title, message);
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
