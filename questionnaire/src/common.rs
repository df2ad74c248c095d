//! Identifier helpers shared by defaults and exports.

use std::sync::LazyLock;

use regex::Regex;

/// Words dropped from normalized identifiers.
const WORDS_TO_OMIT: &[&str] = &[
    "a", "be", "but", "has", "have", "in", "is", "it", "of", "on", "or", "the", "to", "when",
];

/// Identifiers keep at most this many trailing words.
const MAX_WORDS: usize = 5;

static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>|\n|\t").unwrap());
static QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"["']"#).unwrap());
static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\(.*?\)").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_]").unwrap());

/// Turn free text into an identifier-safe slug.
///
/// Markup, quotes and parenthesized asides are removed, stop-words are
/// dropped, and the last five remaining words are joined with `_`.
///
/// ```
/// use questionnaire::normalize;
///
/// assert_eq!(normalize("What is your <b>favorite</b> color?"), "what_your_favorite_color");
/// ```
pub fn normalize(text: &str) -> String {
    let text = MARKUP.replace_all(text, " ").to_lowercase();
    let text = QUOTES.replace_all(&text, "");
    let text = PARENTHESIZED.replace_all(&text, "");
    let text = NON_WORD.replace_all(&text, " ");

    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|word| !WORDS_TO_OMIT.contains(word))
        .collect();
    let start = words.len().saturating_sub(MAX_WORDS);
    words[start..].join("_")
}

/// Generate a fresh external identifier (a random UUID).
pub fn generate_api_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup_and_stop_words() {
        assert_eq!(
            normalize("What is the <em>name</em> of your\tpet?"),
            "what_name_your_pet"
        );
    }

    #[test]
    fn drops_quotes_and_asides() {
        assert_eq!(normalize("Don't count (this part) \"quoted\""), "dont_count_quoted");
    }

    #[test]
    fn keeps_last_five_words() {
        assert_eq!(
            normalize("one two three four five six seven"),
            "three_four_five_six_seven"
        );
    }

    #[test]
    fn empty_text() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("the a of"), "");
    }

    #[test]
    fn api_ids_are_unique() {
        let a = generate_api_id();
        let b = generate_api_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
