use std::sync::Arc;

use glossa_translator::Translator;
use glossa_types::AppEvent;
use kanal::AsyncSender;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Everything a background translation needs. Holds no document state.
#[derive(Clone)]
pub struct TranslationContext {
    pub translator: Arc<dyn Translator>,
    pub runtime: Handle,
    pub display_tx: AsyncSender<AppEvent>,
    pub cancel: CancellationToken,
}

impl TranslationContext {
    pub fn new(
        translator: Arc<dyn Translator>,
        runtime: Handle,
        display_tx: AsyncSender<AppEvent>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            translator,
            runtime,
            display_tx,
            cancel,
        }
    }

    /// Run `request` on the runtime; the result arrives on `display_tx`
    pub fn spawn(&self, request: TranslationRequest) {
        self.runtime.spawn(translate_word(self.clone(), request));
    }
}

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub request_id: Uuid,
    pub word: String,
    pub from: String,
    pub to: String,
}

pub async fn translate_word(ctx: TranslationContext, request: TranslationRequest) {
    tracing::debug!(
        "[TRANSLATE] {} '{}' {} -> {}",
        request.request_id,
        request.word,
        request.from,
        request.to
    );

    let result = tokio::select! {
        biased;
        _ = ctx.cancel.cancelled() => {
            tracing::debug!("[TRANSLATE] {} cancelled", request.request_id);
            return;
        }
        result = ctx.translator.translate(&request.word, request.from.clone(), request.to.clone()) => result,
    };

    let event = match result {
        Ok(translation) => {
            tracing::info!(
                "Translated '{}' -> '{}' via {}",
                request.word,
                translation.text,
                translation.provider
            );
            AppEvent::ShowTranslation {
                request_id: request.request_id,
                source: request.word,
                text: translation.text,
                from_lang: translation.from,
                to_lang: translation.to,
            }
        }
        Err(e) => {
            tracing::warn!("Translation of '{}' failed: {}", request.word, e);
            AppEvent::TranslationFailed {
                request_id: request.request_id,
                word: request.word,
                message: e.to_string(),
            }
        }
    };

    if let Err(e) = ctx.display_tx.send(event).await {
        tracing::error!("Failed to deliver translation result: {}", e);
    }
}
