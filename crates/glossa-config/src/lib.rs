use std::env;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::translator::TranslatorConfig;
use self::viewer::ViewerConfig;

pub mod log;
pub mod translator;
pub mod viewer;

pub use translator::TranslatorProvider;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub viewer: ViewerConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with process environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply `GLOSSA_*` overrides from any key lookup. Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(provider) = lookup("GLOSSA_TRANSLATOR").and_then(|v| v.parse().ok()) {
            self.translator.provider = provider;
        }

        if let Some(from) = lookup("GLOSSA_FROM_LANG").filter(|v| !v.trim().is_empty()) {
            self.translator.from_lang = from;
        }

        if let Some(to) = lookup("GLOSSA_TO_LANG").filter(|v| !v.trim().is_empty()) {
            self.translator.to_lang = to;
        }

        if let Some(key) = lookup("GLOSSA_API_KEY") {
            self.translator.api_key = key;
        }

        if let Some(url) = lookup("GLOSSA_API_URL").filter(|v| !v.trim().is_empty()) {
            self.translator.api_url = Some(url);
        }

        if let Some(timeout) = lookup("GLOSSA_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.translator.timeout_seconds = timeout;
        }

        if let Some(zoom) = lookup("GLOSSA_ZOOM")
            .and_then(|v| v.parse::<f32>().ok())
            .filter(|z| *z > 0.0)
        {
            self.viewer.zoom = zoom;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_translate_english_to_hindi() {
        let config = Config::default();
        assert_eq!(config.translator.provider, TranslatorProvider::Google);
        assert_eq!(config.translator.from_lang, "en");
        assert_eq!(config.translator.to_lang, "hi");
        assert_eq!(config.viewer.zoom, 1.0);
        assert!(config.viewer.open_on_start);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("GLOSSA_TRANSLATOR", "DeepL"),
            ("GLOSSA_FROM_LANG", "de"),
            ("GLOSSA_TO_LANG", "fr"),
            ("GLOSSA_API_KEY", "secret"),
            ("GLOSSA_TIMEOUT_SECONDS", "5"),
            ("GLOSSA_ZOOM", "1.5"),
        ]));

        assert_eq!(config.translator.provider, TranslatorProvider::DeepL);
        assert_eq!(config.translator.from_lang, "de");
        assert_eq!(config.translator.to_lang, "fr");
        assert_eq!(config.translator.api_key, "secret");
        assert_eq!(config.translator.timeout_seconds, 5);
        assert_eq!(config.viewer.zoom, 1.5);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("GLOSSA_TRANSLATOR", "babelfish"),
            ("GLOSSA_TO_LANG", "  "),
            ("GLOSSA_ZOOM", "-2"),
            ("GLOSSA_TIMEOUT_SECONDS", "soon"),
        ]));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "translator": { "to_lang": "ta" } }"#).unwrap();

        assert_eq!(config.translator.to_lang, "ta");
        assert_eq!(config.translator.from_lang, "en");
        assert_eq!(config.viewer, ViewerConfig::default());
    }

    #[test]
    fn test_provider_serializes_lowercase() {
        let json = serde_json::to_string(&TranslatorProvider::DeepL).unwrap();
        assert_eq!(json, r#""deepl""#);
        assert_eq!("google".parse::<TranslatorProvider>(), Ok(TranslatorProvider::Google));
    }
}
