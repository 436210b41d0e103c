//! Turns emitted drafts into final, identified chunks.

use localplan_core::Chunk;
use uuid::Uuid;

use super::accumulator::ChunkDraft;

/// Assign ids and dense 0-based indices in emission order.
pub fn assemble(drafts: Vec<ChunkDraft>, source: &str, council: &str) -> Vec<Chunk> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(chunk_index, draft)| Chunk {
            chunk_id: Uuid::new_v4(),
            chunk_index,
            source: source.to_string(),
            council: council.to_string(),
            section: draft.section,
            section_type: draft.section_type,
            page_start: draft.page_start,
            char_count: draft.text.chars().count(),
            text: draft.text,
        })
        .collect()
}
