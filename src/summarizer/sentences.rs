/*!
 * Sentence splitting and word-budget helpers.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence terminators stripped from the end of a sentence
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Terminal punctuation followed by whitespace
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+\s+").unwrap()
});

/// Split text into sentences.
///
/// Terminators consumed by the boundary are not part of the returned pieces.
/// Trailing empty pieces are dropped; pieces are otherwise returned untrimmed
/// and may be blank.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces: Vec<&str> = SENTENCE_BOUNDARY.split(text).collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Trim whitespace and any terminal punctuation left on the last sentence.
pub fn clean_sentence(sentence: &str) -> &str {
    sentence.trim().trim_end_matches(TERMINATORS).trim_end()
}

/// Number of whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keep the first `max_words` words.
///
/// Text that already fits is returned trimmed but otherwise untouched.
/// Longer text is re-joined with single spaces and gets `ellipsis` glued
/// to the last kept word.
pub fn truncate_words(text: &str, max_words: usize, ellipsis: &str) -> String {
    let trimmed = text.trim();
    if count_words(trimmed) <= max_words {
        return trimmed.to_string();
    }

    let mut truncated = trimmed
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ");
    truncated.push_str(ellipsis);
    truncated
}
