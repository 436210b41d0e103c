use localplan_core::PageLines;

use super::split_pages;

/// Plain-text export of a plan. Form feeds, when present, separate pages.
pub fn extract_txt(bytes: &[u8]) -> Vec<PageLines> {
    // Try UTF-8 first, fall back to lossy conversion
    let text = String::from_utf8(bytes.to_vec())
        .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned());
    split_pages(&text)
}
