//! Whitespace normalization and literal-period sentence splitting.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Split on every `.`; trimmed, empty pieces dropped.
///
/// Abbreviations and decimals are split too ("Art. 21" is two sentences).
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split('.').map(str::trim).filter(|s| !s.is_empty())
}

/// The first `n` sentences rejoined as `"A. B. C."`, or `""` for no sentences.
pub fn leading_sentences(text: &str, n: usize) -> String {
    let sentences: Vec<&str> = split_sentences(text).take(n).collect();
    if sentences.is_empty() {
        return String::new();
    }
    format!("{}.", sentences.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        let text = "  This is a test.\n\nMultiple lines.\tTabs   and spaces.  ";
        assert_eq!(
            normalize_whitespace(text),
            "This is a test. Multiple lines. Tabs and spaces."
        );
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_split_sentences_literal_periods() {
        let sentences: Vec<&str> = split_sentences("See Art. 21. Fee is 2.5 lakh.").collect();
        assert_eq!(sentences, vec!["See Art", "21", "Fee is 2", "5 lakh"]);
    }

    #[test]
    fn test_leading_sentences() {
        let text = "One. Two. Three. Four.";
        assert_eq!(leading_sentences(text, 3), "One. Two. Three.");
        assert_eq!(leading_sentences(text, 10), "One. Two. Three. Four.");
        assert_eq!(leading_sentences("No period at all", 3), "No period at all.");
        assert_eq!(leading_sentences("", 5), "");
        assert_eq!(leading_sentences(" . . ", 5), "");
    }
}
