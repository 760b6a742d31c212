pub mod controller;
pub mod document;
pub mod error;
pub mod hit_test;
pub mod page_store;
pub mod translation;
pub mod word_index;

#[cfg(test)]
mod testing;

pub use controller::{LanguagePair, ViewController, ViewState};
pub use document::{DocumentLoader, PdfDocument};
pub use error::{DocumentError, NavError, OpenError};
pub use hit_test::locate;
pub use page_store::PageStore;
pub use translation::{TranslationContext, TranslationRequest};
pub use word_index::WordIndex;
