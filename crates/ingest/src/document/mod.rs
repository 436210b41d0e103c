pub mod chunker;
mod pdf;
mod txt;

use std::path::Path;

use localplan_core::PageLines;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("PDF extraction failed: {0}")]
    PdfError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of extracting text from a document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Original filename.
    pub filename: String,
    /// File type: "pdf", "txt"
    pub file_type: String,
    /// Pages in reading order, one entry per physical page.
    pub pages: Vec<PageLines>,
}

impl ExtractedDocument {
    /// Filename without directories or extension, used as the chunk `source`.
    pub fn source_id(&self) -> String {
        Path::new(&self.filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.filename.clone())
    }

    /// Total line count across all pages.
    pub fn total_lines(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}

/// Split decoded text into pages on form feed (`\x0C`) and pages into lines.
///
/// Blank pages are kept with no lines so numbering matches the source file.
/// A trailing form feed does not open an extra page.
pub(crate) fn split_pages(text: &str) -> Vec<PageLines> {
    let mut segments: Vec<&str> = text.split('\x0C').collect();
    while segments.len() > 1 && segments.last().is_some_and(|s| s.trim().is_empty()) {
        segments.pop();
    }
    if segments.len() == 1 && segments[0].trim().is_empty() {
        return Vec::new();
    }

    segments
        .into_iter()
        .zip(1u32..)
        .map(|(page_text, page_number)| PageLines {
            page_number,
            lines: page_text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        })
        .collect()
}

/// Extract page lines from file bytes based on file type.
pub fn extract_pages(bytes: &[u8], filename: &str) -> Result<ExtractedDocument, ExtractionError> {
    let ext = Path::new(filename)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let file_type = ext.as_str();

    let pages = match file_type {
        "pdf" => pdf::extract_pdf(bytes)?,
        "txt" | "text" => txt::extract_txt(bytes),
        other => return Err(ExtractionError::UnsupportedType(other.to_string())),
    };

    tracing::debug!(filename, pages = pages.len(), "extracted pages");

    Ok(ExtractedDocument {
        filename: filename.to_string(),
        file_type: file_type.to_string(),
        pages,
    })
}

/// Read a file from disk and extract its page lines.
pub fn extract_file(path: &Path) -> Result<ExtractedDocument, ExtractionError> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    extract_pages(&bytes, &filename)
}
