//! Text normalization shared by the dictionary, segmenter and matcher.
//!
//! Phrases and dictionary keys are compared in Unicode NFC so that a target
//! phrase written with combining dakuten (`か` + `゛`) still hits the
//! precomposed dictionary key (`が`). Keystrokes and spellings are compared
//! case-folded.

use unicode_normalization::UnicodeNormalization;

/// NFC-normalize a phrase or dictionary key. Surrounding whitespace is kept;
/// a space inside a target phrase is a typeable unit.
pub fn normalize_phrase(s: &str) -> String {
    s.nfc().collect()
}

/// Split a normalized phrase into the grapheme units the segmenter walks over.
pub fn units(s: &str) -> Vec<char> {
    normalize_phrase(s).chars().collect()
}

/// Case-fold a single keystroke. Multi-char lowercase expansions (e.g. `İ`)
/// keep only the first char so one key stays one char.
pub fn fold_key(key: char) -> char {
    key.to_lowercase().next().unwrap_or(key)
}

/// Case-fold a whole spelling.
pub fn fold_spelling(s: &str) -> String {
    s.chars().map(fold_key).collect()
}

/// Input boundary filter: accepts a host key name only when it is exactly one
/// non-control character. Names such as `"Shift"`, `"Escape"` or `"\u{8}"`
/// never reach the matcher.
pub fn accept_key(key_name: &str) -> Option<char> {
    let mut chars = key_name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_key_filters_named_keys() {
        assert_eq!(accept_key("a"), Some('a'));
        assert_eq!(accept_key(" "), Some(' '));
        assert_eq!(accept_key("Shift"), None);
        assert_eq!(accept_key("Enter"), None);
        assert_eq!(accept_key(""), None);
        assert_eq!(accept_key("\u{8}"), None);
        assert_eq!(accept_key("\t"), None);
    }

    #[test]
    fn test_normalize_composes_dakuten() {
        let decomposed = "\u{304B}\u{3099}"; // か + combining voiced mark
        assert_eq!(normalize_phrase(decomposed), "が");
        assert_eq!(units(decomposed), vec!['が']);
    }

    #[test]
    fn test_fold_key() {
        assert_eq!(fold_key('K'), 'k');
        assert_eq!(fold_key('k'), 'k');
        assert_eq!(fold_key('ん'), 'ん');
        assert_eq!(fold_spelling("KyA"), "kya");
    }
}
