//! Local Plan ingestion: page extraction and section-aware chunking.

pub mod document;

pub use document::chunker::{ChunkPipeline, HeadingClassifier, HeadingMatch};
pub use document::{extract_file, extract_pages, ExtractedDocument, ExtractionError};
