use glossa_types::{AppEvent, PageView, RenderedPage};
use slint::{ComponentHandle, Image, Rgb8Pixel, SharedPixelBuffer, Weak};

use crate::ReaderWindow;
use crate::dialogs::show_error;
use crate::state::UiState;

/// Apply one display event to the window. Returns false once the loop should stop.
pub fn handle_events(event: AppEvent, window_weak: &Weak<ReaderWindow>, state: &UiState) -> bool {
    let Some(w) = window_weak.upgrade() else {
        return false;
    };

    match event {
        AppEvent::PageChanged(view) => {
            tracing::debug!("[SLINT] {} ({:?})", view.label(), view.image);
            show_page(&w, &view);
        }
        AppEvent::OpenFailed { message } => {
            show_error("Could not open document", &message);
        }
        AppEvent::ShowError { title, message } => {
            show_error(&title, &message);
        }
        AppEvent::TranslationPending { request_id, word } => {
            state.begin(request_id);
            w.set_translation_text(format!("Translating '{word}'...").into());
        }
        AppEvent::ShowTranslation {
            request_id,
            source,
            text,
            from_lang,
            to_lang,
        } => {
            if !state.finish(request_id) {
                tracing::debug!("[SLINT] Dropping stale translation of '{}'", source);
                return true;
            }
            tracing::debug!("[SLINT] Translation: {} -> {}", from_lang, to_lang);
            w.set_translation_text(translation_line(&source, &text).into());
        }
        AppEvent::TranslationFailed {
            request_id,
            word,
            message,
        } => {
            if !state.finish(request_id) {
                tracing::debug!("[SLINT] Dropping stale failure for '{}'", word);
                return true;
            }
            w.set_translation_text(format!("Could not translate '{word}'").into());
            show_error("Translation failed", &message);
        }
        AppEvent::Shutdown => {
            w.hide().ok();
            slint::quit_event_loop().ok();
            return false;
        }
    }

    true
}

/// Text shown for a finished translation
fn translation_line(source: &str, text: &str) -> String {
    format!("{source} -> {text}")
}

fn show_page(w: &ReaderWindow, view: &PageView) {
    match to_image(&view.image) {
        Some(image) => w.set_page_image(image),
        None => {
            tracing::error!(
                "[SLINT] Page {} buffer does not match {}x{}",
                view.index,
                view.image.width,
                view.image.height
            );
            return;
        }
    }

    w.set_page_label(view.label().into());
    w.set_can_go_back(!view.is_first());
    w.set_can_go_forward(!view.is_last());
    if !keeps_scroll(view) {
        w.invoke_reset_scroll();
    }
}

/// Re-renders of the page on screen (resize) keep the reader's position
fn keeps_scroll(view: &PageView) -> bool {
    !view.fresh
}

fn to_image(page: &RenderedPage) -> Option<Image> {
    if !has_rgb_layout(page) {
        return None;
    }
    let buffer =
        SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&page.pixels, page.width, page.height);
    Some(Image::from_rgb8(buffer))
}

fn has_rgb_layout(page: &RenderedPage) -> bool {
    page.pixels.len() == page.width as usize * page.height as usize * 3
}
