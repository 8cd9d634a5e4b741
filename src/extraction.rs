/*!
 * Plain-text extraction from document files.
 *
 * The document kind is chosen from the file extension:
 * - `pdf`: decoded with `pdf-extract`
 * - `txt`, `md`: read as UTF-8 (lossily when needed)
 * - `docx`: text runs of `word/document.xml`, read with `zip` and `quick-xml`
 *
 * Documents that cannot be decoded report an error and callers fall back to
 * a size-based description.
 */

use log::debug;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use crate::errors::ExtractionError;

/// Supported document kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word processing document
    Word,
    /// Plain text or markdown
    PlainText,
}

impl DocumentKind {
    /// Every extension with a known kind
    pub const SUPPORTED_EXTENSIONS: [&'static str; 4] = ["pdf", "docx", "txt", "md"];

    /// Kind for a file extension, case-insensitive
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Word),
            "txt" | "md" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Kind for a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ExtractionError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ExtractionError::InvalidFileName(path.display().to_string()))?;

        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ExtractionError::InvalidFileName(file_name.to_string()))?;

        Self::from_extension(extension)
            .ok_or_else(|| ExtractionError::UnsupportedFileType(extension.to_lowercase()))
    }

    // @returns: Short uppercase label used in descriptions
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Word => "DOCX",
            Self::PlainText => "TXT",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Default maximum document size (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Archive entry holding the body of a DOCX document
const DOCX_MAIN_PART: &str = "word/document.xml";

/// Extracts plain text from supported document files
#[derive(Debug, Clone)]
pub struct TextExtractor {
    max_file_size_bytes: u64,
}

impl TextExtractor {
    /// Create an extractor that rejects files above `max_file_size_bytes`
    pub fn new(max_file_size_bytes: u64) -> Self {
        Self { max_file_size_bytes }
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }

    /// Read a document file and return its text
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String, ExtractionError> {
        let path = path.as_ref();
        let kind = DocumentKind::from_path(path)?;

        let size = fs::metadata(path)?.len();
        if size > self.max_file_size_bytes {
            return Err(ExtractionError::FileTooLarge {
                size,
                limit: self.max_file_size_bytes,
            });
        }

        let bytes = fs::read(path)?;
        debug!("Extracting {} text from {:?} ({} bytes)", kind, path, size);
        self.extract_bytes(kind, &bytes)
    }

    /// Extract text from in-memory document content
    pub fn extract_bytes(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractionError> {
        match kind {
            DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| ExtractionError::Pdf(e.to_string())),
            DocumentKind::Word => Self::decode_docx(bytes),
            DocumentKind::PlainText => Ok(Self::decode_plain_text(bytes)),
        }
    }

    /// Collect the text runs of a DOCX main document part.
    ///
    /// Paragraphs and breaks become newlines, tabs are kept.
    fn decode_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractionError::Word(format!("Invalid DOCX archive: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name(DOCX_MAIN_PART)
            .map_err(|e| ExtractionError::Word(format!("Missing {}: {}", DOCX_MAIN_PART, e)))?
            .read_to_string(&mut xml)
            .map_err(|e| ExtractionError::Word(format!("Unreadable {}: {}", DOCX_MAIN_PART, e)))?;

        let mut reader = Reader::from_str(&xml);
        let mut text = String::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text_run = false,
                    b"w:p" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"w:tab" => text.push('\t'),
                    b"w:br" | b"w:cr" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(e)) if in_text_run => {
                    let run = e
                        .unescape()
                        .map_err(|e| ExtractionError::Word(format!("Invalid text run: {}", e)))?;
                    text.push_str(&run);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ExtractionError::Word(format!(
                        "Malformed {} at byte {}: {}",
                        DOCX_MAIN_PART,
                        reader.buffer_position(),
                        e
                    )));
                }
                _ => {}
            }
        }

        Ok(text)
    }

    /// Decode text, replacing invalid UTF-8 and normalizing line endings
    fn decode_plain_text(bytes: &[u8]) -> String {
        let text = String::from_utf8_lossy(bytes);
        let mut normalized = String::with_capacity(text.len());
        for line in text.lines() {
            normalized.push_str(line);
            normalized.push('\n');
        }
        normalized
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

/// Size-based description used when a document's text cannot be extracted
pub fn fallback_description(label: &str, size_bytes: u64) -> String {
    format!("This {} document contains {} KB of content", label, size_bytes / 1024)
}
