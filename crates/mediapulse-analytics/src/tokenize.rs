//! Text tokenization for word frequency analysis.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Tokens shorter than this are dropped.
const MIN_TOKEN_CHARS: usize = 3;

/// Common English function words excluded from frequency analysis.
///
/// The exact membership is not load-bearing, but the same set must be used
/// for the per-label tables and the word cloud so the two stay comparable.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "don", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s", "same", "she",
    "should", "so", "some", "such", "t", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid token cleanup regex"));

/// Split text into lowercase tokens suitable for frequency counting.
///
/// Lower-cases the text, strips every character that is neither a Unicode
/// word character nor whitespace, splits on whitespace runs, and drops
/// stop-words and tokens shorter than 3 characters. Empty text yields an
/// empty sequence. The returned iterator is finite and consumed once.
#[must_use]
pub fn tokenize(text: &str) -> impl Iterator<Item = String> {
    let cleaned = NON_WORD.replace_all(&text.to_lowercase(), "").into_owned();
    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS && !STOP_WORD_SET.contains(word))
        .map(str::to_owned)
        .collect::<Vec<_>>()
        .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        tokenize(text).collect()
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens("   ").is_empty());
    }

    #[test]
    fn stop_words_only_yields_no_tokens() {
        assert!(tokens("the and of to was").is_empty());
    }

    #[test]
    fn short_tokens_are_dropped() {
        assert_eq!(tokens("go ox run fox"), ["run", "fox"]);
    }

    #[test]
    fn text_is_lowercased() {
        assert_eq!(tokens("Nuclear POWER Plants"), ["nuclear", "power", "plants"]);
    }

    #[test]
    fn punctuation_is_stripped_inside_tokens() {
        // "don't" collapses to "dont", which is not in the stop set
        assert_eq!(tokens("don't panic!"), ["dont", "panic"]);
    }

    #[test]
    fn repeated_tokens_are_kept_in_order() {
        assert_eq!(
            tokens("Nuclear power is great great great"),
            ["nuclear", "power", "great", "great", "great"]
        );
    }

    #[test]
    fn unicode_word_characters_survive() {
        assert_eq!(tokens("café émigré"), ["café", "émigré"]);
    }

    #[test]
    fn digits_and_underscores_are_word_characters() {
        assert_eq!(tokens("reactor_4 online 2024"), ["reactor_4", "online", "2024"]);
    }

    #[test]
    fn stop_word_set_has_no_duplicates() {
        let unique: HashSet<&str> = STOP_WORDS.iter().copied().collect();
        assert_eq!(unique.len(), STOP_WORDS.len());
    }
}
