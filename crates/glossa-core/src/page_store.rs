use std::path::Path;

use crate::document::{DocumentLoader, PdfDocument};
use crate::error::{NavError, OpenError};

/// Owns the open document and the index of the displayed page
pub struct PageStore {
    loader: Box<dyn DocumentLoader>,
    document: Option<Box<dyn PdfDocument>>,
    current: usize,
}

impl PageStore {
    pub fn new(loader: Box<dyn DocumentLoader>) -> Self {
        Self {
            loader,
            document: None,
            current: 0,
        }
    }

    /// Load `path`, replacing the open document and resetting to the first page.
    /// On failure the previous document stays open.
    pub fn open(&mut self, path: &Path) -> Result<&dyn PdfDocument, OpenError> {
        let document = self.load(path)?;
        Ok(self.replace(document))
    }

    /// Decode `path` without touching the open document
    pub fn load(&self, path: &Path) -> Result<Box<dyn PdfDocument>, OpenError> {
        let document = self
            .loader
            .load(path)
            .map_err(|e| OpenError::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if document.page_count() == 0 {
            return Err(OpenError::NoPages {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(
            "Loaded {} ({} pages)",
            path.display(),
            document.page_count()
        );
        Ok(document)
    }

    /// Make `document` the open one, at its first page
    pub fn replace(&mut self, document: Box<dyn PdfDocument>) -> &dyn PdfDocument {
        self.current = 0;
        &**self.document.insert(document)
    }

    pub fn document(&self) -> Option<&dyn PdfDocument> {
        self.document.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn page_count(&self) -> usize {
        self.document.as_ref().map_or(0, |d| d.page_count())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), NavError> {
        let page_count = self.page_count();
        if index >= page_count {
            return Err(NavError::OutOfRange { index, page_count });
        }
        self.current = index;
        Ok(())
    }

    /// Advance one page; false at the last page or with no document
    pub fn next(&mut self) -> bool {
        let next = self.current + 1;
        self.go_to(next).is_ok()
    }

    /// Go back one page; false at the first page or with no document
    pub fn prev(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(prev) => self.go_to(prev).is_ok(),
            None => false,
        }
    }
}
