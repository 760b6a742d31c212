use async_trait::async_trait;

use crate::{
    LanguageCode, ProviderMetadata, TranslateError, Translation, Translator, check_status,
    http_client,
};

pub const DEFAULT_DEEPL_URL: &str = "https://api-free.deepl.com/v2/translate";

#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeepLTranslator {
    pub fn new(
        api_key: String,
        api_url: Option<String>,
        timeout_seconds: u64,
    ) -> Result<Self, TranslateError> {
        Ok(Self {
            client: http_client(timeout_seconds)?,
            api_key,
            api_url: api_url.unwrap_or_else(|| DEFAULT_DEEPL_URL.to_string()),
        })
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        if text.trim().is_empty() {
            return Err(TranslateError::EmptyQuery);
        }

        let source_lang = from.to_uppercase();
        let target_lang = to.to_uppercase();
        let params = [
            ("text", text),
            ("source_lang", source_lang.as_str()),
            ("target_lang", target_lang.as_str()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
            .send()
            .await?;

        check_status(response.status())?;

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let translated_text = parse_response(&json)?;

        Ok(Translation {
            text: translated_text,
            from,
            to,
            provider: "deepl".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
            free_tier_available: true,
        }
    }
}

fn parse_response(json: &serde_json::Value) -> Result<String, TranslateError> {
    json["translations"]
        .get(0)
        .and_then(|t| t["text"].as_str())
        .map(str::to_string)
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))
}
