use glossa_types::{PagePoint, Word};

use crate::document::PdfDocument;
use crate::error::DocumentError;
use crate::hit_test;

/// Words of the displayed page. Rebuilt from scratch on every page change.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    page: usize,
    words: Vec<Word>,
}

impl WordIndex {
    pub fn build(document: &dyn PdfDocument, page: usize) -> Result<Self, DocumentError> {
        let page_count = document.page_count();
        if page >= page_count {
            return Err(DocumentError::PageOutOfRange { page, page_count });
        }

        let words = document.words(page)?;
        tracing::debug!("Indexed {} words on page {}", words.len(), page);

        Ok(Self { page, words })
    }

    /// Index with no words, used when extraction fails
    pub fn empty(page: usize) -> Self {
        Self {
            page,
            words: Vec::new(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn locate(&self, point: PagePoint) -> Option<&Word> {
        hit_test::locate(&self.words, point)
    }
}
