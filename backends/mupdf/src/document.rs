use std::path::Path;

use glossa_core::{DocumentError, DocumentLoader, PdfDocument};
use glossa_types::{RenderedPage, Word};
use mupdf::{Document, Page};

use crate::raster::render_rgb;
use crate::words::extract_words;

/// Opens documents through MuPDF
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfLoader;

impl MupdfLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentLoader for MupdfLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn PdfDocument>, DocumentError> {
        Ok(Box::new(MupdfDocument::open(path)?))
    }
}

pub struct MupdfDocument {
    doc: Document,
    page_count: usize,
}

impl MupdfDocument {
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let open_error = |message: String| DocumentError::Open {
            path: path.to_path_buf(),
            message,
        };

        let doc = Document::open(path.to_string_lossy().as_ref())
            .map_err(|e| open_error(e.to_string()))?;

        if doc.needs_password().map_err(|e| open_error(e.to_string()))? {
            return Err(open_error("document is password protected".to_string()));
        }

        let page_count = doc.page_count().map_err(|e| open_error(e.to_string()))?;
        tracing::debug!("MuPDF opened {} with {} pages", path.display(), page_count);

        Ok(Self {
            doc,
            page_count: page_count.max(0) as usize,
        })
    }

    fn load_page(&self, page: usize) -> Result<Page, DocumentError> {
        if page >= self.page_count {
            return Err(DocumentError::PageOutOfRange {
                page,
                page_count: self.page_count,
            });
        }

        self.doc
            .load_page(page as i32)
            .map_err(|e| DocumentError::Page {
                page,
                message: e.to_string(),
            })
    }
}

impl PdfDocument for MupdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn words(&self, page: usize) -> Result<Vec<Word>, DocumentError> {
        let loaded = self.load_page(page)?;
        extract_words(&loaded).map_err(|e| DocumentError::Page {
            page,
            message: e.to_string(),
        })
    }

    fn render(&self, page: usize, zoom: f32) -> Result<RenderedPage, DocumentError> {
        let loaded = self.load_page(page)?;
        let (width, height, pixels) =
            render_rgb(&loaded, zoom).map_err(|message| DocumentError::Page { page, message })?;

        tracing::debug!("Rendered page {} at {}x{} (zoom {})", page, width, height, zoom);

        Ok(RenderedPage {
            width,
            height,
            zoom,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_open_error() {
        let err = MupdfLoader::new()
            .load(Path::new("/nonexistent/glossa/missing.pdf"))
            .err()
            .expect("loading a missing file must fail");
        match err {
            DocumentError::Open { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/glossa/missing.pdf"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
