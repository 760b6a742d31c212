use std::sync::Arc;

use glossa_config::TranslatorProvider;
use glossa_config::translator::TranslatorConfig;
use glossa_translator::{DeepLTranslator, GoogleTranslator, TranslateError, Translator};

/// Build the configured provider
pub fn build_translator(config: &TranslatorConfig) -> Result<Arc<dyn Translator>, TranslateError> {
    let translator: Arc<dyn Translator> = match config.provider {
        TranslatorProvider::Google => Arc::new(GoogleTranslator::new(
            config.api_url.clone(),
            config.timeout_seconds,
        )?),
        TranslatorProvider::DeepL => {
            if config.api_key.is_empty() {
                tracing::warn!("DeepL selected without an API key, translations will fail");
            }
            Arc::new(DeepLTranslator::new(
                config.api_key.clone(),
                config.api_url.clone(),
                config.timeout_seconds,
            )?)
        }
    };

    let metadata = translator.metadata();
    tracing::info!(
        "Translator: {} ({} -> {})",
        metadata.name,
        config.from_lang,
        config.to_lang
    );
    Ok(translator)
}
