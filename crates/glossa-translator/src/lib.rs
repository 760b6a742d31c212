pub mod preprocess;
pub mod providers;

pub use preprocess::prepare_query;
pub use providers::{DeepLTranslator, GoogleTranslator};

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Nothing to translate")]
    EmptyQuery,
}

/// Map an HTTP status to the provider-independent error set
pub(crate) fn check_status(status: reqwest::StatusCode) -> Result<(), TranslateError> {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(TranslateError::RateLimitExceeded);
    }

    if status == reqwest::StatusCode::FORBIDDEN || status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(TranslateError::AuthenticationError);
    }

    if !status.is_success() {
        return Err(TranslateError::ApiError(format!("HTTP {}", status)));
    }

    Ok(())
}

pub(crate) fn http_client(timeout_seconds: u64) -> Result<reqwest::Client, TranslateError> {
    let mut builder = reqwest::Client::builder();
    if timeout_seconds > 0 {
        builder = builder.timeout(std::time::Duration::from_secs(timeout_seconds));
    }
    Ok(builder.build()?)
}
