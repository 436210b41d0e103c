//! Document-level entry points: normalise, classify, accumulate, assemble.

use localplan_core::{Chunk, ChunkingConfig, ConfigError, PageLines};
use rayon::prelude::*;

use super::accumulator::{ChunkAccumulator, LineOutcome};
use super::assembler::assemble;
use super::heading::HeadingClassifier;
use super::normalize::normalize_line;
use crate::document::ExtractedDocument;

/// Validated chunking setup. Cheap to share; each run owns its own state.
#[derive(Debug, Clone)]
pub struct ChunkPipeline {
    config: ChunkingConfig,
    classifier: HeadingClassifier,
}

#[derive(Debug, Default)]
struct RunStats {
    lines: usize,
    headings: usize,
    noise: usize,
    rollovers: usize,
}

impl ChunkPipeline {
    /// Fails fast on an invalid configuration, before any document is read.
    pub fn new(config: ChunkingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            classifier: HeadingClassifier::new(config.min_heading_chars, config.max_heading_chars),
            config,
        })
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    pub fn classifier(&self) -> &HeadingClassifier {
        &self.classifier
    }

    /// Chunk one document's pages, in order.
    ///
    /// Page numbers are taken as given; they are expected to be non-decreasing.
    pub fn chunk_pages(&self, pages: &[PageLines], source: &str, council: &str) -> Vec<Chunk> {
        let first_page = pages.first().map(|p| p.page_number).unwrap_or(1);
        let last_page = pages.last().map(|p| p.page_number).unwrap_or(1);

        let mut acc = ChunkAccumulator::new(&self.config, self.classifier.clone(), first_page);
        let mut stats = RunStats::default();

        for page in pages {
            for raw in &page.lines {
                let line = normalize_line(raw);
                stats.lines += 1;
                match acc.feed(&line, page.page_number) {
                    LineOutcome::Heading => {
                        stats.headings += 1;
                        let (section, section_type) = acc.section();
                        tracing::trace!(page = page.page_number, section, %section_type, "section opened");
                    }
                    LineOutcome::Noise => stats.noise += 1,
                    LineOutcome::Rolled => stats.rollovers += 1,
                    LineOutcome::Appended => {}
                }
            }
        }

        let drafts = acc.finish(last_page);
        let chunks = assemble(drafts, source, council);
        tracing::debug!(
            source,
            pages = pages.len(),
            lines = stats.lines,
            headings = stats.headings,
            noise = stats.noise,
            rollovers = stats.rollovers,
            chunks = chunks.len(),
            "chunked document"
        );
        chunks
    }

    /// Chunk an extracted file, using its filename stem as `source`.
    pub fn chunk_document(&self, doc: &ExtractedDocument, council: &str) -> Vec<Chunk> {
        let source = doc.source_id();
        let chunks = self.chunk_pages(&doc.pages, &source, council);
        tracing::info!(
            file = %doc.filename,
            pages = doc.pages.len(),
            chunks = chunks.len(),
            "document chunked"
        );
        chunks
    }

    /// Chunk independent documents in parallel. Output order matches input.
    pub fn chunk_batch(&self, docs: &[ExtractedDocument], council: &str) -> Vec<Vec<Chunk>> {
        docs.par_iter()
            .map(|doc| self.chunk_document(doc, council))
            .collect()
    }
}
