use localplan_core::{PageLines, SectionType};
use localplan_ingest::{extract_file, extract_pages, ExtractedDocument};

use crate::helpers::{content_lines, default_pipeline, sample_plan, test_data_dir};

#[test]
fn sample_plan_sections_in_order() {
    let pipeline = default_pipeline();
    let chunks = pipeline.chunk_pages(&sample_plan(), "york-local-plan", "york");

    let summary: Vec<(&str, SectionType, u32)> = chunks
        .iter()
        .map(|c| (c.section.as_str(), c.section_type, c.page_start))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Preamble", SectionType::SupportingText, 1),
            ("1 INTRODUCTION", SectionType::Chapter, 2),
            ("1.1 Background", SectionType::SupportingText, 2),
            ("Policy H1: Housing Requirement", SectionType::Policy, 3),
            ("Appendix A", SectionType::Appendix, 3),
        ]
    );
    assert!(chunks[0].text.starts_with("York Local Plan Publication Draft 2040"));
    assert!(chunks[0].text.contains("council's vision"));
    assert!(chunks.iter().all(|c| c.source == "york-local-plan" && c.council == "york"));
}

#[test]
fn every_content_line_lands_in_a_chunk_when_long_enough() {
    let pipeline = default_pipeline();
    let pages = sample_plan();
    let chunks = pipeline.chunk_pages(&pages, "plan", "york");
    let joined: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
    let all = joined.join(" ");
    assert_eq!(all, content_lines(&pipeline, &pages).join(" "));
}

#[test]
fn batch_preserves_document_order() {
    let pipeline = default_pipeline();
    let docs: Vec<ExtractedDocument> = (0..8)
        .map(|i| ExtractedDocument {
            filename: format!("plan-{i}.pdf"),
            file_type: "pdf".into(),
            pages: if i % 2 == 0 { sample_plan() } else { Vec::new() },
        })
        .collect();

    let batches = pipeline.chunk_batch(&docs, "york");
    assert_eq!(batches.len(), 8);
    for (i, chunks) in batches.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(chunks.len(), 5);
            assert!(chunks.iter().all(|c| c.source == format!("plan-{i}")));
            assert_eq!(chunks[0].chunk_index, 0);
        } else {
            assert!(chunks.is_empty());
        }
    }
}

#[test]
fn text_file_round_trip_through_extraction() {
    let dir = test_data_dir();
    let path = dir.join("Harrogate Plan.txt");
    let body = "Policy GS1: Providing New Homes\n\
                The plan makes provision for new homes across the district over the plan period.\n\
                \x0C\
                14\n\
                Appendix 2\n\
                Housing trajectory figures are set out in the table that accompanies this appendix.\n";
    std::fs::write(&path, body).unwrap();

    let doc = extract_file(&path).unwrap();
    assert_eq!(doc.file_type, "txt");
    assert_eq!(doc.source_id(), "Harrogate Plan");
    assert_eq!(doc.pages.len(), 2);

    let chunks = default_pipeline().chunk_document(&doc, "harrogate");
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].section_type, SectionType::Policy);
    assert_eq!(chunks[0].page_start, 1);
    assert_eq!(chunks[1].section, "Appendix 2");
    assert_eq!(chunks[1].page_start, 2);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_file_is_io_error() {
    let dir = test_data_dir();
    let err = extract_file(&dir.join("absent.pdf")).unwrap_err();
    assert!(matches!(err, localplan_ingest::ExtractionError::Io(_)));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn chunks_serialize_for_indexing() {
    let doc = extract_pages(
        b"Chapter 3\nEconomic growth will be focused on the existing employment areas of the city.",
        "plan.txt",
    )
    .unwrap();
    let chunks = default_pipeline().chunk_document(&doc, "york");
    let json = serde_json::to_value(&chunks[0]).unwrap();
    assert_eq!(json["section_type"], "chapter");
    assert_eq!(json["section"], "Chapter 3");
    assert_eq!(json["chunk_index"], 0);
    assert_eq!(json["char_count"], chunks[0].text.chars().count());
    assert!(json["chunk_id"].is_string());
}

#[test]
fn empty_page_list_is_not_an_error() {
    let pages: Vec<PageLines> = Vec::new();
    assert!(default_pipeline().chunk_pages(&pages, "plan", "york").is_empty());
}
