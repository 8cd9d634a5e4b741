/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::Path;
use docsum::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.txt", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Sidecar names keep the full document name
#[test]
fn test_summary_sidecar_path_shouldAppendSuffix() {
    let sidecar = FileManager::summary_sidecar_path(Path::new("/tmp/course/notes.pdf"));
    assert_eq!(sidecar, Path::new("/tmp/course/notes.pdf.summary.json"));
}

/// Only supported documents are found, recursively and sorted
#[test]
fn test_find_documents_withMixedFiles_shouldReturnSupportedSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "b.txt", "b")?;
    common::create_test_file(root, "a.md", "a")?;
    common::create_test_file(root, "nested/c.pdf", "c")?;
    common::create_test_file(root, "image.png", "png")?;
    common::create_test_file(root, "a.md.summary.json", "{}")?;

    let documents = FileManager::find_documents(root)?;
    let names: Vec<String> = documents
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["a.md", "b.txt", "nested/c.pdf"]);
    Ok(())
}

/// Writing creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out/deeper/summary.json");

    FileManager::write_to_file(&target, "{}")?;

    assert_eq!(FileManager::read_to_string(&target)?, "{}");
    assert_eq!(FileManager::file_size(&target)?, 2);
    Ok(())
}

/// ensure_dir is idempotent
#[test]
fn test_ensure_dir_calledTwice_shouldSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().join("made");

    FileManager::ensure_dir(&dir)?;
    FileManager::ensure_dir(&dir)?;

    assert!(FileManager::dir_exists(&dir));
    Ok(())
}
