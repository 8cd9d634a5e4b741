use anyhow::{Context, Result, anyhow};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_config::Config;
use crate::extraction::{DocumentKind, TextExtractor, fallback_description};
use crate::file_utils::FileManager;
use crate::models::{DocumentSummary, TextExtractionResponse};
use crate::summarizer::Summarizer;

// @module: Application controller for document summarization

/// Outcome counts of a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderReport {
    /// Documents summarized and written
    pub processed: usize,
    /// Documents whose sidecar already existed
    pub skipped: usize,
    /// Documents that could not be summarized or written
    pub failed: usize,
}

/// Main application controller for document summarization
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Shared summarizer built from `config.summary`
    summarizer: Arc<Summarizer>,
    // @field: Shared extractor built from `config.extraction`
    extractor: Arc<TextExtractor>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let summarizer = Arc::new(Summarizer::new(config.summary.clone()));
        let extractor = Arc::new(TextExtractor::new(config.extraction.max_file_size_bytes));

        Ok(Self {
            config,
            summarizer,
            extractor,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Summarize one document, falling back to a size-based description
    /// when its text cannot be extracted
    pub fn describe_document<P: AsRef<Path>>(&self, path: P) -> Result<DocumentSummary> {
        describe_with(&self.summarizer, &self.extractor, path.as_ref())
    }

    /// Extract a document's text; failures are reported in the response
    pub fn extract_document<P: AsRef<Path>>(&self, path: P) -> TextExtractionResponse {
        match self.extractor.extract_file(path.as_ref()) {
            Ok(text) => TextExtractionResponse::success(text),
            Err(e) => {
                warn!("Text extraction failed for {:?}: {}", path.as_ref(), e);
                TextExtractionResponse::failure(e)
            }
        }
    }

    /// Summarize a single document file
    pub async fn run(&self, input_file: PathBuf) -> Result<DocumentSummary> {
        if !FileManager::file_exists(&input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let summarizer = Arc::clone(&self.summarizer);
        let extractor = Arc::clone(&self.extractor);
        tokio::task::spawn_blocking(move || describe_with(&summarizer, &extractor, &input_file))
            .await
            .context("Summarization task failed")?
    }

    /// Summarize every supported document below a directory.
    ///
    /// Each summary is written as a JSON sidecar next to its document.
    /// Existing sidecars are kept unless `force_overwrite` is set.
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<FolderReport> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let documents = FileManager::find_documents(&input_dir)?;
        if documents.is_empty() {
            return Err(anyhow!("No supported documents found in directory: {:?}", input_dir));
        }

        let mut report = FolderReport::default();
        let mut pending = Vec::new();
        for document in documents {
            if FileManager::file_exists(FileManager::summary_sidecar_path(&document)) && !force_overwrite {
                warn!("Skipping {:?}, summary already exists (use -f to force overwrite)", document);
                report.skipped += 1;
            } else {
                pending.push(document);
            }
        }

        let progress = ProgressBar::new(pending.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style);
        progress.set_message("Summarizing documents");

        let concurrency = self.config.extraction.concurrent_files.max(1);
        let mut results = stream::iter(pending.into_iter().map(|document| {
            let summarizer = Arc::clone(&self.summarizer);
            let extractor = Arc::clone(&self.extractor);
            async move {
                let task_path = document.clone();
                let outcome = tokio::task::spawn_blocking(move || {
                    describe_with(&summarizer, &extractor, &task_path)
                })
                .await
                .map_err(|e| anyhow!("Summarization task failed: {}", e))
                .and_then(|result| result);
                (document, outcome)
            }
        }))
        .buffer_unordered(concurrency);

        while let Some((document, outcome)) = results.next().await {
            let written = outcome.and_then(|summary| {
                let json = serde_json::to_string_pretty(&summary)
                    .context("Failed to serialize summary")?;
                FileManager::write_to_file(FileManager::summary_sidecar_path(&document), &json)
            });

            match written {
                Ok(()) => {
                    debug!("Wrote summary for {:?}", document);
                    report.processed += 1;
                }
                Err(e) => {
                    error!("Error processing file {:?}: {}", document, e);
                    report.failed += 1;
                }
            }
            progress.inc(1);
        }

        progress.finish_and_clear();
        info!(
            "Finished in {:.1}s: {} summarized, {} skipped, {} failed",
            start_time.elapsed().as_secs_f64(),
            report.processed,
            report.skipped,
            report.failed
        );

        Ok(report)
    }
}

/// Extract, summarize and wrap one document
fn describe_with(summarizer: &Summarizer, extractor: &TextExtractor, path: &Path) -> Result<DocumentSummary> {
    let document = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let size = FileManager::file_size(path)?;

    match extractor.extract_file(path) {
        Ok(text) => {
            let summary = summarizer.summarize(&text);
            debug!("Summarized {:?} into {} characters", path, summary.len());
            Ok(DocumentSummary::new(document, summary))
        }
        Err(e) => {
            warn!("Falling back to size description for {:?}: {}", path, e);
            let label = DocumentKind::from_path(path)
                .map(|kind| kind.label().to_string())
                .unwrap_or_else(|_| {
                    path.extension()
                        .map(|ext| ext.to_string_lossy().to_uppercase())
                        .unwrap_or_else(|| "UNKNOWN".to_string())
                });
            Ok(DocumentSummary::fallback(document, fallback_description(&label, size)))
        }
    }
}
