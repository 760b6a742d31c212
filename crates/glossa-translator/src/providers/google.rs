use async_trait::async_trait;

use crate::{
    LanguageCode, ProviderMetadata, TranslateError, Translation, Translator, check_status,
    http_client,
};

pub const DEFAULT_GOOGLE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Keyless Google Translate web endpoint (`client=gtx`)
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: Option<String>, timeout_seconds: u64) -> Result<Self, TranslateError> {
        Ok(Self {
            client: http_client(timeout_seconds)?,
            api_url: api_url.unwrap_or_else(|| DEFAULT_GOOGLE_URL.to_string()),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyQuery);
        }

        let params = [
            ("client", "gtx"),
            ("sl", from.as_str()),
            ("tl", to.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        check_status(response.status())?;

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let translated_text = parse_response(&json)?;

        Ok(Translation {
            text: translated_text,
            from,
            to,
            provider: "google".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Response shape: `[[["translated", "source", ...], ...], null, "en", ...]`.
/// Long inputs come back split into several segments.
fn parse_response(json: &serde_json::Value) -> Result<String, TranslateError> {
    let segments = json
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(TranslateError::ApiError(
            "No translation in response".to_string(),
        ));
    }

    Ok(text)
}
