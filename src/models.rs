/*!
 * Response envelopes for summaries and extracted text.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::summarizer::count_words;

/// A generated summary with its metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// File name of the summarized document
    pub document: String,
    /// Summary or size-based fallback description
    pub summary_text: String,
    /// Generation time
    pub generated_at: DateTime<Utc>,
    /// Words in `summary_text`
    pub word_count: usize,
    /// Whether `summary_text` is the size-based fallback
    #[serde(default)]
    pub fallback: bool,
}

impl DocumentSummary {
    /// Wrap an extracted summary
    pub fn new(document: impl Into<String>, summary_text: String) -> Self {
        Self::build(document.into(), summary_text, false)
    }

    /// Wrap a size-based fallback description
    pub fn fallback(document: impl Into<String>, description: String) -> Self {
        Self::build(document.into(), description, true)
    }

    fn build(document: String, summary_text: String, fallback: bool) -> Self {
        let word_count = count_words(&summary_text);
        Self {
            document,
            summary_text,
            generated_at: Utc::now(),
            word_count,
            fallback,
        }
    }
}

/// Result of a text extraction request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TextExtractionResponse {
    /// Extracted text, empty on failure
    pub text: String,
    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TextExtractionResponse {
    pub fn success(text: String) -> Self {
        Self { text, error: None }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self {
            text: String::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
