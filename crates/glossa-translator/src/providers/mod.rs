mod deepl;
mod google;

pub use deepl::DeepLTranslator;
pub use google::GoogleTranslator;
