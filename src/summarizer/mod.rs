/*!
 * Extractive document summarization.
 *
 * Sentences are ranked by keyword density (how often their words occur
 * across the whole document, divided by their length) and the best ones are
 * concatenated until the word budget is spent.
 *
 * - `sentences`: sentence boundaries and word-budget truncation
 * - `frequency`: stop words and the per-call frequency table
 */

pub mod frequency;
pub mod sentences;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use frequency::{StopWords, WordFrequencies};
pub use sentences::{count_words, split_sentences, truncate_words};

/// Default hard cap on summary length, in words
pub const DEFAULT_MAX_WORDS: usize = 30;

/// Tokens shorter than this never count as keywords
pub const DEFAULT_MIN_KEYWORD_CHARS: usize = 4;

/// Words that carry no topical signal
pub const DEFAULT_STOP_WORDS: [&str; 20] = [
    "the", "and", "a", "an", "in", "on", "at", "to", "for", "with", "by", "about", "as", "of",
    "that", "this", "is", "are", "was", "were",
];

/// Returned for blank input
pub const EMPTY_DOCUMENT_MESSAGE: &str =
    "This document appears to be empty or contains non-textual content.";

/// Marker glued to truncated text
pub const ELLIPSIS: &str = "...";

/// Summarizer settings, also the `summary` section of the configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizerConfig {
    /// Maximum number of words in a summary
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Minimum token length (in characters) for frequency scoring
    #[serde(default = "default_min_keyword_chars")]
    pub min_keyword_chars: usize,

    /// Words excluded from frequency scoring
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_words: default_max_words(),
            min_keyword_chars: default_min_keyword_chars(),
            stop_words: default_stop_words(),
        }
    }
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

fn default_min_keyword_chars() -> usize {
    DEFAULT_MIN_KEYWORD_CHARS
}

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|word| word.to_string()).collect()
}

/// A sentence with its ranking data
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'a> {
    /// Sentence text without terminator
    pub text: &'a str,
    /// Index of the sentence in the document
    pub position: usize,
    /// Whitespace word count
    pub word_count: usize,
    /// Keyword density
    pub score: f64,
}

/// Extractive summarizer.
///
/// Immutable after construction, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    stop_words: StopWords,
}

static DEFAULT_SUMMARIZER: Lazy<Summarizer> = Lazy::new(Summarizer::with_defaults);

/// Summarize text with the default settings.
pub fn summarize(text: &str) -> String {
    DEFAULT_SUMMARIZER.summarize(text)
}

impl Summarizer {
    /// Create a new summarizer with the given configuration.
    pub fn new(config: SummarizerConfig) -> Self {
        let stop_words = StopWords::from_list(&config.stop_words);
        Self { config, stop_words }
    }

    /// Create a summarizer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SummarizerConfig::default())
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Produce an extractive summary of at most `max_words` words.
    ///
    /// Never fails: blank input yields [`EMPTY_DOCUMENT_MESSAGE`], text
    /// without sentence boundaries is truncated as a whole.
    pub fn summarize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return EMPTY_DOCUMENT_MESSAGE.to_string();
        }

        let max_words = self.config.max_words;
        let pieces = split_sentences(text);
        if pieces.len() <= 1 {
            return truncate_words(text, max_words, ELLIPSIS);
        }

        let ranked = self.rank_pieces(&pieces);
        if ranked.is_empty() {
            return truncate_words(text, max_words, ELLIPSIS);
        }

        let mut summary = String::new();
        let mut used_words = 0;

        for (rank, sentence) in ranked.iter().enumerate() {
            if used_words + sentence.word_count > max_words {
                if rank == 0 {
                    return truncate_words(sentence.text, max_words, ELLIPSIS);
                }
                break;
            }

            summary.push_str(sentence.text);
            summary.push_str(". ");
            used_words += sentence.word_count;
        }

        debug!(
            "Summarized {} sentences into {} words",
            pieces.len(),
            used_words
        );

        summary.trim_end().to_string()
    }

    /// Score every distinct non-blank sentence and return them best first.
    ///
    /// Equal scores keep document order.
    pub fn rank_sentences<'a>(&self, text: &'a str) -> Vec<ScoredSentence<'a>> {
        self.rank_pieces(&split_sentences(text))
    }

    fn rank_pieces<'a>(&self, pieces: &[&'a str]) -> Vec<ScoredSentence<'a>> {
        let cleaned: Vec<&'a str> = pieces
            .iter()
            .map(|&piece| sentences::clean_sentence(piece))
            .collect();

        let frequencies = WordFrequencies::build(
            cleaned.iter().copied(),
            &self.stop_words,
            self.config.min_keyword_chars,
        );

        // Repeated sentences share one score, the first occurrence ranks
        let mut seen = HashSet::new();
        let mut scored: Vec<ScoredSentence<'a>> = cleaned
            .into_iter()
            .enumerate()
            .filter(|(_, text)| !text.is_empty() && seen.insert(*text))
            .map(|(position, text)| ScoredSentence {
                text,
                position,
                word_count: count_words(text),
                score: frequencies.score(text),
            })
            .collect();

        // Stable sort, ties stay in document order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
