use std::path::Path;

use glossa_translator::prepare_query;
use glossa_types::{AppEvent, Direction, PageView, SurfacePoint, Word};
use uuid::Uuid;

use crate::document::{DocumentLoader, PdfDocument};
use crate::error::{DocumentError, OpenError};
use crate::page_store::PageStore;
use crate::translation::{TranslationContext, TranslationRequest};
use crate::word_index::WordIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Empty,
    Loaded { page: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub from: String,
    pub to: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            from: "en".to_string(),
            to: "hi".to_string(),
        }
    }
}

/// Drives page navigation and click-to-translate on the interaction thread.
///
/// Page changes and translation results are delivered to the display layer as
/// [`AppEvent`]s; translations run on the async runtime and never touch the
/// document or the word index.
pub struct ViewController {
    store: PageStore,
    words: WordIndex,
    zoom: f32,
    languages: LanguagePair,
    translation: TranslationContext,
}

impl ViewController {
    pub fn new(
        loader: Box<dyn DocumentLoader>,
        translation: TranslationContext,
        languages: LanguagePair,
        zoom: f32,
    ) -> Self {
        Self {
            store: PageStore::new(loader),
            words: WordIndex::default(),
            zoom: if zoom > 0.0 { zoom } else { 1.0 },
            languages,
            translation,
        }
    }

    pub fn state(&self) -> ViewState {
        if self.store.is_loaded() {
            ViewState::Loaded {
                page: self.store.current_index(),
            }
        } else {
            ViewState::Empty
        }
    }

    pub fn page_count(&self) -> usize {
        self.store.page_count()
    }

    pub fn current_index(&self) -> usize {
        self.store.current_index()
    }

    pub fn words(&self) -> &WordIndex {
        &self.words
    }

    /// `None` means the user cancelled the file picker. The open document is
    /// only replaced once the first page of the new one has rendered.
    pub fn open_file(&mut self, path: Option<&Path>) -> Result<(), OpenError> {
        match self.try_open(path) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!("Open failed: {}", e);
                self.emit(AppEvent::OpenFailed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn try_open(&mut self, path: Option<&Path>) -> Result<(), OpenError> {
        let path = path.ok_or(OpenError::NoFileSelected)?;
        let document = self.store.load(path)?;

        let (words, view) =
            prepare_page(document.as_ref(), 0, self.zoom).map_err(|e| OpenError::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        self.store.replace(document);
        self.words = words;
        self.emit(AppEvent::PageChanged(view));
        Ok(())
    }

    /// Move one page; clamps at both ends. Returns whether the page changed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let current = self.store.current_index();
        let target = match direction {
            Direction::Previous => current.checked_sub(1),
            Direction::Next => Some(current + 1).filter(|i| *i < self.store.page_count()),
        };

        match target {
            Some(index) => self.show_page(index, true),
            None => {
                tracing::debug!("Navigation {:?} ignored at page {}", direction, current);
                false
            }
        }
    }

    /// Jump to `index`, clamped into the document. Returns whether the page changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        let page_count = self.store.page_count();
        if page_count == 0 {
            return false;
        }

        let target = index.min(page_count - 1);
        if target == self.store.current_index() {
            return false;
        }

        self.show_page(target, true)
    }

    /// Re-render the current page, e.g. after the surface was resized
    pub fn refresh(&mut self) {
        if self.store.is_loaded() {
            self.show_page(self.store.current_index(), false);
        }
    }

    /// Hit-test a click on the rendered page and translate the word under it.
    /// The translation result is delivered asynchronously.
    pub fn click(&self, point: SurfacePoint) -> Option<Word> {
        if !self.store.is_loaded() {
            return None;
        }

        let page_point = point.to_page(self.zoom);
        let word = self.words.locate(page_point)?.clone();
        tracing::debug!(
            "Click ({:.1}, {:.1}) hit '{}' on page {}",
            page_point.x,
            page_point.y,
            word.text,
            self.words.page()
        );

        self.request_translation(&word.text);
        Some(word)
    }

    fn request_translation(&self, text: &str) -> Option<Uuid> {
        let Some(query) = prepare_query(text) else {
            tracing::debug!("Nothing translatable in '{}'", text);
            return None;
        };

        let request_id = Uuid::new_v4();
        self.emit(AppEvent::TranslationPending {
            request_id,
            word: query.clone(),
        });

        self.translation.spawn(TranslationRequest {
            request_id,
            word: query,
            from: self.languages.from.clone(),
            to: self.languages.to.clone(),
        });

        Some(request_id)
    }

    /// Render `index` and commit it as the displayed page. On failure the
    /// page, its words and the image on screen all stay as they were.
    fn show_page(&mut self, index: usize, fresh: bool) -> bool {
        let Some(document) = self.store.document() else {
            return false;
        };

        let (words, mut view) = match prepare_page(document, index, self.zoom) {
            Ok(prepared) => prepared,
            Err(e) => {
                self.report_page_error(e);
                return false;
            }
        };

        if let Err(e) = self.store.go_to(index) {
            tracing::debug!("{}", e);
            return false;
        }

        view.fresh = fresh;
        self.words = words;
        self.emit(AppEvent::PageChanged(view));
        true
    }

    fn report_page_error(&self, error: DocumentError) {
        tracing::error!("{}", error);
        self.emit(AppEvent::ShowError {
            title: "Page error".to_string(),
            message: error.to_string(),
        });
    }

    fn emit(&self, event: AppEvent) {
        match self.translation.display_tx.try_send(event) {
            Ok(true) => {}
            Ok(false) => tracing::warn!("Display channel full, event dropped"),
            Err(e) => tracing::error!("Display channel closed: {}", e),
        }
    }
}

/// Words and image for `index`, nothing committed yet. A word extraction
/// failure still renders the page, with nothing clickable on it.
fn prepare_page(
    document: &dyn PdfDocument,
    index: usize,
    zoom: f32,
) -> Result<(WordIndex, PageView), DocumentError> {
    let words = match WordIndex::build(document, index) {
        Ok(words) => words,
        Err(e) => {
            tracing::warn!("Word extraction failed on page {}: {}", index, e);
            WordIndex::empty(index)
        }
    };

    let image = document.render(index, zoom)?;
    let view = PageView {
        index,
        page_count: document.page_count(),
        image,
        fresh: true,
    };
    Ok((words, view))
}
