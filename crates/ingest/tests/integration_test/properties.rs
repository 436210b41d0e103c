//! Property-based checks of the chunk stream invariants.

use localplan_core::{ChunkingConfig, PageLines};
use localplan_ingest::ChunkPipeline;
use proptest::prelude::*;

use crate::helpers::{content_lines, default_pipeline};

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z]{1,10}( [a-z]{1,10}){0,25}",
        1 => "[0-9]{1,3}",
        1 => "[a-z]{1,3}",
        1 => " {0,3}[a-z]{2,8}\u{2014}[a-z]{2,8}  [a-z]{2,8} {0,3}",
        1 => prop::sample::select(vec![
            "Policy H1:",
            "Policy SA(BE) 1: Site Allocations",
            "Appendix B",
            "1 INTRODUCTION",
            "PART C",
            "2.1 Context",
        ])
        .prop_map(String::from),
    ]
}

/// Pages with strictly increasing numbers starting at 1 or later.
fn pages_strategy() -> impl Strategy<Value = Vec<PageLines>> {
    prop::collection::vec(
        (0u32..3, prop::collection::vec(line_strategy(), 0..12)),
        0..8,
    )
    .prop_map(|raw| {
        let mut page = 0u32;
        raw.into_iter()
            .map(|(gap, lines)| {
                page += 1 + gap;
                PageLines { page_number: page, lines }
            })
            .collect()
    })
}

/// Index just past the run of `lines` starting at or after `from` whose
/// space-joined text equals `text`.
fn match_run(text: &str, lines: &[String], from: usize) -> Option<usize> {
    for start in from..lines.len() {
        let mut joined = String::new();
        for (k, line) in lines[start..].iter().enumerate() {
            if k > 0 {
                joined.push(' ');
            }
            joined.push_str(line);
            if joined == text {
                return Some(start + k + 1);
            }
            if joined.len() >= text.len() {
                break;
            }
        }
    }
    None
}

/// Property: indices are dense and sizes stay within bounds.
#[test]
fn proptest_indices_and_sizes() {
    let pipeline = default_pipeline();
    proptest!(ProptestConfig::with_cases(128), |(pages in pages_strategy())| {
        let chunks = pipeline.chunk_pages(&pages, "plan", "york");
        for (i, c) in chunks.iter().enumerate() {
            prop_assert_eq!(c.chunk_index, i);
            prop_assert_eq!(c.char_count, c.text.chars().count());
            prop_assert!(c.char_count >= 60);
            prop_assert!(c.char_count <= 900);
            prop_assert!(!c.text.contains("  "));
            prop_assert_eq!(c.text.trim(), c.text.as_str());
        }
    });
}

/// Property: chunks are consecutive runs of content lines, in input order.
#[test]
fn proptest_chunks_follow_input_order() {
    let pipeline = default_pipeline();
    proptest!(ProptestConfig::with_cases(128), |(pages in pages_strategy())| {
        let lines = content_lines(&pipeline, &pages);
        let chunks = pipeline.chunk_pages(&pages, "plan", "york");
        let mut cursor = 0;
        for c in &chunks {
            let next = match_run(&c.text, &lines, cursor);
            prop_assert!(next.is_some(), "chunk {} is not a run of content lines", c.chunk_index);
            cursor = next.unwrap();
        }
    });
}

/// Property: page_start never goes backwards and stays within the document.
#[test]
fn proptest_page_start_is_monotonic() {
    let pipeline = default_pipeline();
    proptest!(ProptestConfig::with_cases(128), |(pages in pages_strategy())| {
        let chunks = pipeline.chunk_pages(&pages, "plan", "york");
        let first = pages.first().map(|p| p.page_number).unwrap_or(1);
        let last = pages.last().map(|p| p.page_number).unwrap_or(1);
        let mut prev = first;
        for c in &chunks {
            prop_assert!(c.page_start >= prev);
            prop_assert!(c.page_start <= last);
            prev = c.page_start;
        }
    });
}

/// Property: re-running on identical input reproduces everything but ids.
#[test]
fn proptest_rerun_is_stable() {
    let pipeline = default_pipeline();
    proptest!(ProptestConfig::with_cases(64), |(pages in pages_strategy())| {
        let a = pipeline.chunk_pages(&pages, "plan", "york");
        let b = pipeline.chunk_pages(&pages, "plan", "york");
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(&x.section, &y.section);
            prop_assert_eq!(x.section_type, y.section_type);
            prop_assert_eq!(x.page_start, y.page_start);
            prop_assert_eq!(&x.text, &y.text);
        }
    });
}

/// Property: custom limits are honoured for lines no longer than the limit.
#[test]
fn proptest_custom_limits() {
    proptest!(ProptestConfig::with_cases(64), |(pages in pages_strategy(), max in 300usize..1200, min in 10usize..120)| {
        let pipeline = ChunkPipeline::new(ChunkingConfig {
            max_chunk_chars: max,
            min_chunk_chars: min,
            ..ChunkingConfig::default()
        })
        .unwrap();
        for c in pipeline.chunk_pages(&pages, "plan", "york") {
            prop_assert!(c.char_count >= min);
            prop_assert!(c.char_count <= max);
        }
    });
}
