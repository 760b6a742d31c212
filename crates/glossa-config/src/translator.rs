use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorProvider {
    /// Public Google Translate web endpoint, no key required
    Google,
    DeepL,
}

impl FromStr for TranslatorProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "deepl" => Ok(Self::DeepL),
            other => Err(format!("unknown translator provider: {other}")),
        }
    }
}

impl fmt::Display for TranslatorProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Google => f.write_str("google"),
            Self::DeepL => f.write_str("deepl"),
        }
    }
}

fn default_provider() -> TranslatorProvider {
    TranslatorProvider::Google
}

fn default_from_lang() -> String {
    "en".to_string()
}

fn default_to_lang() -> String {
    "hi".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_provider")]
    pub provider: TranslatorProvider,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default)]
    pub api_key: String,
    /// Override the provider's endpoint
    #[serde(default)]
    pub api_url: Option<String>,
    /// Zero disables the request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            api_key: String::new(),
            api_url: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
