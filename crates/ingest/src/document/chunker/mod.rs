//! Section-aware chunking engine for Local Plan documents.
//!
//! Lines flow through normalisation, heading classification, and an ordered
//! accumulator that cuts chunks at section boundaries and size limits. The
//! assembler then stamps ids and dense indices onto the surviving drafts.

mod accumulator;
mod assembler;
mod heading;
mod normalize;
mod pipeline;

pub use accumulator::{ChunkAccumulator, ChunkDraft, LineOutcome, PREAMBLE_SECTION};
pub use assembler::assemble;
pub use heading::{HeadingClassifier, HeadingMatch, HeadingRule};
pub use normalize::{collapse_whitespace, normalize_line};
pub use pipeline::ChunkPipeline;
