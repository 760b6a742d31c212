use unicode_normalization::UnicodeNormalization;

/// Turn a clicked word into a translation query.
///
/// Extracted words keep adjacent punctuation ("Hello," or "(world)"), so the
/// query is NFKC-normalized and stripped of leading and trailing punctuation.
/// Returns `None` when nothing translatable is left.
pub fn prepare_query(word: &str) -> Option<String> {
    let text: String = word.trim().nfkc().collect();

    let text = text
        .trim_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation() || is_quote(c))
        .to_string();

    if text.chars().any(char::is_alphanumeric) {
        Some(text)
    } else {
        None
    }
}

fn is_quote(c: char) -> bool {
    matches!(
        c,
        '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' | '\u{00AB}' | '\u{00BB}' | '\u{2026}'
    )
}
