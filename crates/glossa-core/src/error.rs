use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to open {}: {message}", .path.display())]
    Open { path: PathBuf, message: String },

    #[error("Page {page} failed: {message}")]
    Page { page: usize, message: String },

    #[error("Page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Could not read {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("{} has no pages", .path.display())]
    NoPages { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("Page index {index} out of range [0, {page_count})")]
    OutOfRange { index: usize, page_count: usize },
}
