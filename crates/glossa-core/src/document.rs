use std::path::Path;

use glossa_types::{RenderedPage, Word};

use crate::error::DocumentError;

/// A loaded PDF, as seen by the viewer.
///
/// Implementations are not required to be `Send`; the document lives on the
/// interaction thread for its whole lifetime.
pub trait PdfDocument {
    fn page_count(&self) -> usize;

    /// Words of one page in document order (block, line, word), page-space boxes
    fn words(&self, page: usize) -> Result<Vec<Word>, DocumentError>;

    /// Rasterize one page at `zoom` (1.0 = one pixel per PDF point)
    fn render(&self, page: usize, zoom: f32) -> Result<RenderedPage, DocumentError>;
}

/// Opens documents from the filesystem
pub trait DocumentLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn PdfDocument>, DocumentError>;
}
