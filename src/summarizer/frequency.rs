/*!
 * Word-frequency scoring for extractive summaries.
 *
 * The table only lives for one summarization call. Short tokens and stop
 * words never enter it, so they contribute zero to a sentence score while
 * still counting towards the sentence length.
 */

use std::collections::{HashMap, HashSet};

/// Lowercased stop words
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a stop-word set from any list of words
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Check a lowercased token
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Occurrence counts of keyword tokens across a document
#[derive(Debug, Default)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
}

impl WordFrequencies {
    /// Count every keyword token of every sentence.
    ///
    /// A token is a keyword when it has at least `min_keyword_chars`
    /// characters and is not a stop word.
    pub fn build<'a, I>(sentences: I, stop_words: &StopWords, min_keyword_chars: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for sentence in sentences {
            for token in sentence.to_lowercase().split_whitespace() {
                if token.chars().count() < min_keyword_chars || stop_words.contains(token) {
                    continue;
                }
                *counts.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    /// Count for a lowercased token, zero when absent
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct keyword tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Density score of a sentence.
    ///
    /// The sum of the counts of its lowercased tokens divided by its word
    /// count. Blank sentences score zero.
    pub fn score(&self, sentence: &str) -> f64 {
        let word_count = sentence.split_whitespace().count();
        if word_count == 0 {
            return 0.0;
        }

        let total: usize = sentence
            .to_lowercase()
            .split_whitespace()
            .map(|token| self.count(token))
            .sum();

        total as f64 / word_count as f64
    }
}
