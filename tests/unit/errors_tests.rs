/*!
 * Tests for error types and conversions
 */

use docsum::errors::{AppError, ExtractionError};

#[test]
fn test_extractionError_unsupportedFileType_shouldDisplayCorrectly() {
    let error = ExtractionError::UnsupportedFileType("exe".to_string());
    assert_eq!(format!("{}", error), "Unsupported file type: exe");
}

#[test]
fn test_extractionError_fileTooLarge_shouldDisplaySizeAndLimit() {
    let error = ExtractionError::FileTooLarge { size: 2048, limit: 1024 };
    let display = format!("{}", error);
    assert!(display.contains("2048"));
    assert!(display.contains("1024"));
}

#[test]
fn test_extractionError_fromIoError_shouldWrapAsIo() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let error: ExtractionError = io_error.into();
    assert!(matches!(error, ExtractionError::Io(_)));
    assert!(error.to_string().contains("File not found"));
}

#[test]
fn test_appError_fromExtractionError_shouldWrapCorrectly() {
    let app_error: AppError = ExtractionError::Pdf("bad xref".to_string()).into();
    let display = format!("{}", app_error);
    assert!(display.contains("Extraction error"));
    assert!(display.contains("bad xref"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("Permission denied"));
}

#[test]
fn test_appError_fromAnyhowError_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("Something went wrong").into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}

#[test]
fn test_appError_fromSerdeError_shouldWrapAsConfig() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(format!("{}", app_error).contains("Configuration error"));
}

#[test]
fn test_appError_debug_shouldBeImplemented() {
    let error = AppError::Config("test".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("Config"));
}
