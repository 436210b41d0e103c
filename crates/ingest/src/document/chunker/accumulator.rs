//! Order-sensitive chunk state machine.
//!
//! Consumes normalised lines in document order, tracks the active section and
//! an open text buffer, and emits drafts on heading transitions, size-limit
//! crossings, and end of stream.

use localplan_core::{ChunkingConfig, SectionType};

use super::heading::HeadingClassifier;
use super::normalize::collapse_whitespace;

/// Section used until the first heading is seen.
pub const PREAMBLE_SECTION: &str = "Preamble";

/// Shortest line kept as content.
const MIN_CONTENT_LINE_CHARS: usize = 4;

/// A flushed buffer that met the minimum size, before ids and indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkDraft {
    pub section: String,
    pub section_type: SectionType,
    pub page_start: u32,
    pub text: String,
}

/// What `feed` did with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Heading,
    Noise,
    Appended,
    /// The buffer was flushed and the line opened a new one.
    Rolled,
}

/// Bare page numbers and stray fragments carry no retrievable text.
fn is_noise(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() < MIN_CONTENT_LINE_CHARS
        || trimmed.chars().all(|c| c.is_ascii_digit())
}

pub struct ChunkAccumulator {
    classifier: HeadingClassifier,
    max_chunk_chars: usize,
    min_chunk_chars: usize,
    section_text: String,
    section_type: SectionType,
    buffer: String,
    buffer_chars: usize,
    buffer_start_page: u32,
    drafts: Vec<ChunkDraft>,
}

impl ChunkAccumulator {
    /// Start a document whose first page is `first_page`, under the preamble.
    pub fn new(config: &ChunkingConfig, classifier: HeadingClassifier, first_page: u32) -> Self {
        Self {
            classifier,
            max_chunk_chars: config.max_chunk_chars,
            min_chunk_chars: config.min_chunk_chars,
            section_text: PREAMBLE_SECTION.to_string(),
            section_type: SectionType::SupportingText,
            buffer: String::new(),
            buffer_chars: 0,
            buffer_start_page: first_page,
            drafts: Vec::new(),
        }
    }

    /// Active section text and type.
    pub(crate) fn section(&self) -> (&str, SectionType) {
        (&self.section_text, self.section_type)
    }

    #[cfg(test)]
    pub(crate) fn buffer(&self) -> &str {
        &self.buffer
    }

    #[cfg(test)]
    pub(crate) fn buffer_start_page(&self) -> u32 {
        self.buffer_start_page
    }

    #[cfg(test)]
    pub(crate) fn drafts(&self) -> &[ChunkDraft] {
        &self.drafts
    }

    /// Consume one normalised line found on `page`.
    pub fn feed(&mut self, line: &str, page: u32) -> LineOutcome {
        if let Some(heading) = self.classifier.classify(line) {
            self.flush(page);
            self.section_text = heading.text;
            self.section_type = heading.section_type;
            self.buffer_start_page = page;
            return LineOutcome::Heading;
        }

        if is_noise(line) {
            return LineOutcome::Noise;
        }

        let line_chars = line.chars().count();
        let projected = if self.buffer.is_empty() {
            line_chars
        } else {
            self.buffer_chars + 1 + line_chars
        };

        if projected > self.max_chunk_chars {
            self.flush(page);
            self.append(line, line_chars);
            LineOutcome::Rolled
        } else {
            self.append(line, line_chars);
            LineOutcome::Appended
        }
    }

    fn append(&mut self, line: &str, line_chars: usize) {
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
            self.buffer_chars += 1;
        }
        self.buffer.push_str(line);
        self.buffer_chars += line_chars;
    }

    /// Close the open buffer. It becomes a draft when long enough, otherwise
    /// it is dropped. The next buffer starts at `next_page` either way.
    pub fn flush(&mut self, next_page: u32) -> Option<&ChunkDraft> {
        let text = collapse_whitespace(&self.buffer);
        let page_start = self.buffer_start_page;
        self.buffer.clear();
        self.buffer_chars = 0;
        self.buffer_start_page = next_page;

        let chars = text.chars().count();
        if chars < self.min_chunk_chars {
            if chars > 0 {
                tracing::trace!(chars, page_start, "discarding short buffer");
            }
            return None;
        }

        tracing::trace!(chars, page_start, section = %self.section_text, "flushing chunk");
        self.drafts.push(ChunkDraft {
            section: self.section_text.clone(),
            section_type: self.section_type,
            page_start,
            text,
        });
        self.drafts.last()
    }

    /// Final flush at end of stream; `last_page` is the last page seen.
    pub fn finish(mut self, last_page: u32) -> Vec<ChunkDraft> {
        self.flush(last_page);
        self.drafts
    }
}
