/*!
 * End-to-end tests for document summarization
 */

use anyhow::Result;
use docsum::app_controller::{Controller, FolderReport};
use docsum::file_utils::FileManager;
use docsum::models::DocumentSummary;
use docsum::summarizer::{EMPTY_DOCUMENT_MESSAGE, count_words};

use crate::common;

/// A text document is extracted and summarized
#[tokio::test]
async fn test_run_withTextDocument_shouldSummarize() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_document(temp_dir.path(), "biology.txt")?;

    let controller = Controller::new_for_test()?;
    let summary = controller.run(path).await?;

    assert_eq!(summary.document, "biology.txt");
    assert!(!summary.fallback);
    assert!(summary.summary_text.starts_with("Photosynthesis"));
    assert_eq!(summary.word_count, count_words(&summary.summary_text));
    assert!(summary.word_count <= 30);
    Ok(())
}

/// An empty text document yields the empty-document message
#[tokio::test]
async fn test_run_withEmptyDocument_shouldReturnEmptyMessage() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "blank.txt", "  \n\n ")?;

    let summary = Controller::new_for_test()?.run(path).await?;
    assert_eq!(summary.summary_text, EMPTY_DOCUMENT_MESSAGE);
    assert!(!summary.fallback);
    Ok(())
}

/// DOCX text is summarized like any other document
#[tokio::test]
async fn test_run_withDocxDocument_shouldSummarizeItsText() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_docx(
        temp_dir.path(),
        "lecture.docx",
        &[
            "Today we covered plant biology.",
            "Photosynthesis turns light into chemical energy.",
            "Without photosynthesis there would be no oxygen in the atmosphere.",
            "The lab is on Friday.",
        ],
    )?;

    let summary = Controller::new_for_test()?.run(path).await?;

    assert!(!summary.fallback);
    assert!(summary.summary_text.starts_with("Photosynthesis turns light into chemical energy."));
    assert!(summary.summary_text.contains("no oxygen in the atmosphere"));
    assert_eq!(summary.word_count, count_words(&summary.summary_text));
    Ok(())
}

/// Corrupt DOCX archives fall back to the size description
#[test]
fn test_describeDocument_withCorruptDocx_shouldUseSizeFallback() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "x".repeat(4 * 1024 + 10);
    let path = common::create_test_file(temp_dir.path(), "essay.docx", &content)?;

    let summary = Controller::new_for_test()?.describe_document(&path)?;

    assert!(summary.fallback);
    assert_eq!(summary.summary_text, "This DOCX document contains 4 KB of content");
    assert_eq!(summary.word_count, 8);
    Ok(())
}

/// A corrupt PDF also falls back instead of failing
#[test]
fn test_describeDocument_withCorruptPdf_shouldUseSizeFallback() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "scan.pdf", "definitely not a pdf")?;

    let summary = Controller::new_for_test()?.describe_document(&path)?;
    assert!(summary.fallback);
    assert!(summary.summary_text.starts_with("This PDF document contains"));
    Ok(())
}

/// Extraction responses carry either text or an error
#[test]
fn test_extractDocument_shouldReportSuccessAndFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let good = common::create_test_document(temp_dir.path(), "notes.md")?;
    let bad = common::create_test_file(temp_dir.path(), "data.csv", "a,b")?;

    let controller = Controller::new_for_test()?;

    let ok = controller.extract_document(&good);
    assert!(ok.is_success());
    assert!(ok.text.contains("photosynthesis"));

    let failed = controller.extract_document(&bad);
    assert_eq!(failed.error.as_deref(), Some("Unsupported file type: csv"));
    Ok(())
}

/// Folder runs write one sidecar per document and skip existing ones
#[tokio::test]
async fn test_runFolder_shouldWriteSidecarsAndSkipExisting() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    let notes = common::create_test_document(root, "notes.txt")?;
    let chapter = common::create_test_file(root, "chapter/one.md", "Short chapter. Nothing more to add.")?;
    common::create_test_file(root, "ignored.png", "png")?;

    let controller = Controller::new_for_test()?;

    let first = controller.run_folder(root.to_path_buf(), false).await?;
    assert_eq!(first, FolderReport { processed: 2, skipped: 0, failed: 0 });

    let sidecar = FileManager::summary_sidecar_path(&notes);
    let written: DocumentSummary = serde_json::from_str(&FileManager::read_to_string(&sidecar)?)?;
    assert_eq!(written.document, "notes.txt");
    assert!(FileManager::file_exists(FileManager::summary_sidecar_path(&chapter)));

    let second = controller.run_folder(root.to_path_buf(), false).await?;
    assert_eq!(second, FolderReport { processed: 0, skipped: 2, failed: 0 });

    let forced = controller.run_folder(root.to_path_buf(), true).await?;
    assert_eq!(forced.processed, 2);
    Ok(())
}

/// Folders without supported documents are an error
#[tokio::test]
async fn test_runFolder_withoutDocuments_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "photo.jpg", "jpg")?;

    let result = Controller::new_for_test()?
        .run_folder(temp_dir.path().to_path_buf(), false)
        .await;
    assert!(result.is_err());
    Ok(())
}
