use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique chunk identifier.
pub type ChunkId = Uuid;

/// One decoded page: its 1-based number and its text lines in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLines {
    pub page_number: u32,
    pub lines: Vec<String>,
}

impl PageLines {
    pub fn new<I, S>(page_number: u32, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            page_number,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Coarse structural role of the heading currently in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    Policy,
    Appendix,
    Chapter,
    SupportingText,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Policy => "policy",
            SectionType::Appendix => "appendix",
            SectionType::Chapter => "chapter",
            SectionType::SupportingText => "supporting-text",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A retrieval-ready unit of plan text with section and page attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub chunk_id: ChunkId,
    /// 0-based position in the emitted sequence.
    pub chunk_index: usize,
    /// Filename-derived document identifier, passed through unchanged.
    pub source: String,
    /// Owning authority identifier, passed through unchanged.
    pub council: String,
    /// Heading text active when the chunk was opened.
    pub section: String,
    pub section_type: SectionType,
    /// Page recorded when the chunk's buffer was opened.
    pub page_start: u32,
    pub text: String,
    /// Length of `text` in characters.
    pub char_count: usize,
}
