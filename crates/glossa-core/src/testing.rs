//! In-memory doubles for the document and translation seams

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use glossa_translator::{
    LanguageCode, ProviderMetadata, TranslateError, Translation, Translator,
};
use glossa_types::{BoundingBox, RenderedPage, Word};

use crate::document::{DocumentLoader, PdfDocument};
use crate::error::DocumentError;

pub fn word(text: &str, x0: f32, y0: f32, x1: f32, y1: f32) -> Word {
    Word::new(BoundingBox::new(x0, y0, x1, y1), text)
}

pub fn blank_pages(count: usize) -> Vec<Vec<Word>> {
    vec![Vec::new(); count]
}

#[derive(Clone)]
pub struct FakeDocument {
    pages: Vec<Vec<Word>>,
    fail_words: bool,
    fail_render: bool,
    fail_render_on: Option<usize>,
}

impl FakeDocument {
    pub fn new(pages: Vec<Vec<Word>>) -> Self {
        Self {
            pages,
            fail_words: false,
            fail_render: false,
            fail_render_on: None,
        }
    }

    pub fn failing_words(mut self) -> Self {
        self.fail_words = true;
        self
    }

    pub fn failing_render(mut self) -> Self {
        self.fail_render = true;
        self
    }

    /// Only `page` fails to rasterize
    pub fn failing_render_on(mut self, page: usize) -> Self {
        self.fail_render_on = Some(page);
        self
    }
}

impl PdfDocument for FakeDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn words(&self, page: usize) -> Result<Vec<Word>, DocumentError> {
        if self.fail_words {
            return Err(DocumentError::Page {
                page,
                message: "text extraction failed".to_string(),
            });
        }
        Ok(self.pages[page].clone())
    }

    fn render(&self, page: usize, zoom: f32) -> Result<RenderedPage, DocumentError> {
        if self.fail_render || self.fail_render_on == Some(page) {
            return Err(DocumentError::Page {
                page,
                message: "rasterization failed".to_string(),
            });
        }
        let width = (100.0 * zoom) as u32;
        let height = (140.0 * zoom) as u32;
        Ok(RenderedPage {
            width,
            height,
            zoom,
            pixels: vec![255; (width * height * 3) as usize],
        })
    }
}

#[derive(Default)]
pub struct FakeLoader {
    documents: HashMap<PathBuf, FakeDocument>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, path: &str, pages: Vec<Vec<Word>>) -> Self {
        self.with_document(path, FakeDocument::new(pages))
    }

    pub fn with_document(mut self, path: &str, document: FakeDocument) -> Self {
        self.documents.insert(PathBuf::from(path), document);
        self
    }
}

impl DocumentLoader for FakeLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn PdfDocument>, DocumentError> {
        self.documents
            .get(path)
            .cloned()
            .map(|doc| Box::new(doc) as Box<dyn PdfDocument>)
            .ok_or_else(|| DocumentError::Open {
                path: path.to_path_buf(),
                message: "not a PDF".to_string(),
            })
    }
}

/// Translator that answers from a fixed reply and records each call
#[derive(Clone)]
pub struct FakeTranslator {
    reply: Result<String, String>,
    pub calls: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl FakeTranslator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Arc::default(),
        }
    }
}

#[async_trait::async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), from.clone(), to.clone()));

        match &self.reply {
            Ok(reply) => Ok(Translation {
                text: reply.clone(),
                from,
                to,
                provider: "fake".to_string(),
            }),
            Err(message) => Err(TranslateError::ApiError(message.clone())),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Fake".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
