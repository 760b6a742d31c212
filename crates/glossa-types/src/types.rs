use std::fmt;

use uuid::Uuid;

use crate::geometry::BoundingBox;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Current page changed or needs a re-render
    PageChanged(PageView),
    OpenFailed {
        message: String,
    },
    ShowError {
        title: String,
        message: String,
    },
    TranslationPending {
        request_id: Uuid,
        word: String,
    },
    ShowTranslation {
        request_id: Uuid,
        source: String,
        text: String,
        from_lang: String,
        to_lang: String,
    },
    TranslationFailed {
        request_id: Uuid,
        word: String,
        message: String,
    },
    Shutdown,
}

/// A word on a page, as segmented by the PDF text extractor
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub bbox: BoundingBox,
    pub text: String,
    pub block_no: u32,
    pub line_no: u32,
    pub word_no: u32,
}

impl Word {
    pub fn new(bbox: BoundingBox, text: impl Into<String>) -> Self {
        Self {
            bbox,
            text: text.into(),
            block_no: 0,
            line_no: 0,
            word_no: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Rasterized page, packed RGB8
#[derive(Clone)]
pub struct RenderedPage {
    pub width: u32,
    pub height: u32,
    pub zoom: f32,
    pub pixels: Vec<u8>,
}

impl fmt::Debug for RenderedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedPage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("zoom", &self.zoom)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct PageView {
    pub index: usize,
    pub page_count: usize,
    pub image: RenderedPage,
    /// False when this re-renders the page already on screen
    pub fresh: bool,
}

impl PageView {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.page_count
    }

    /// One-based label, e.g. "Page 2 / 10"
    pub fn label(&self) -> String {
        format!("Page {} / {}", self.index + 1, self.page_count)
    }
}
