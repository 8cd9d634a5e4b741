/*!
 * # docsum - Extractive summaries for study documents
 *
 * A Rust library for turning uploaded documents into short extractive
 * summaries.
 *
 * ## Features
 *
 * - Extract plain text from PDF and text documents
 * - Rank sentences by keyword density and keep the best ones within a
 *   fixed word budget (30 words by default)
 * - Size-based fallback descriptions for documents without extractable text
 * - Summarize whole folders concurrently, writing JSON sidecars
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `summarizer`: The extractive summarizer:
 *   - `summarizer::sentences`: Sentence splitting and word budgets
 *   - `summarizer::frequency`: Stop words and keyword frequencies
 * - `extraction`: Document kind detection and text extraction
 * - `models`: Summary and extraction response envelopes
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod extraction;
pub mod file_utils;
pub mod models;
pub mod summarizer;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FolderReport};
pub use errors::{AppError, ExtractionError};
pub use extraction::{DocumentKind, TextExtractor, fallback_description};
pub use models::{DocumentSummary, TextExtractionResponse};
pub use summarizer::{Summarizer, SummarizerConfig, summarize};
