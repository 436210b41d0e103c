use localplan_core::PageLines;

use super::{split_pages, ExtractionError};

pub fn extract_pdf(bytes: &[u8]) -> Result<Vec<PageLines>, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::PdfError(e.to_string()))?;

    // pdf-extract returns all text as one string with form feeds between pages.
    let pages = split_pages(&text);
    if pages.iter().all(|p| p.lines.is_empty()) {
        // Scanned/image PDF: no text layer, nothing to chunk.
        tracing::warn!("PDF has no extractable text layer");
    }
    Ok(pages)
}
