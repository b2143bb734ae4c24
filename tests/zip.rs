//! Container-level parsing tests: entry listing, extraction, EOCD search.

mod common;

use std::sync::Arc;

use common::ZipBuilder;
use docgap::{MemoryReader, ReadAt, ZipExtractor};

fn extractor_for(archive: Vec<u8>) -> ZipExtractor<MemoryReader> {
    ZipExtractor::new(Arc::new(MemoryReader::new(archive)))
}

#[tokio::test]
async fn lists_entries_in_central_directory_order() {
    let archive = ZipBuilder::new()
        .dir("analysis/")
        .file("analysis/report.xlsx", b"0123456789")
        .file("score.json", b"{}")
        .build();

    let entries = extractor_for(archive).list_files().await.unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].file_name, "analysis/");
    assert!(entries[0].is_directory);
    assert_eq!(entries[1].file_name, "analysis/report.xlsx");
    assert!(!entries[1].is_directory);
    assert_eq!(entries[1].uncompressed_size, 10);
    assert_eq!(entries[1].basename(), "report.xlsx");
    assert_eq!(entries[2].basename(), "score.json");
}

#[tokio::test]
async fn extracts_stored_and_deflated_entries() {
    let text = b"the quick brown fox jumps over the lazy dog\n".repeat(32);
    let archive = ZipBuilder::new()
        .file("stored.txt", b"plain bytes")
        .deflated("deflated.txt", &text)
        .build();

    let extractor = extractor_for(archive);
    let entries = extractor.list_files().await.unwrap();

    let stored = extractor.extract_to_memory(&entries[0]).await.unwrap();
    assert_eq!(stored, b"plain bytes");

    let deflated = extractor.extract_to_memory(&entries[1]).await.unwrap();
    assert_eq!(deflated, text);
    // Worth checking the entry really was compressed
    assert!(entries[1].compressed_size < entries[1].uncompressed_size);
}

#[tokio::test]
async fn finds_eocd_behind_an_archive_comment() {
    let archive = ZipBuilder::new()
        .file("summary/overview.pdf", b"pdf")
        .build_with_comment("generated by analysis service");

    let entries = extractor_for(archive).list_files().await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name, "summary/overview.pdf");
}

#[tokio::test]
async fn truncated_archive_fails_to_list() {
    let mut archive = ZipBuilder::new()
        .file("analysis/report.xlsx", b"bytes")
        .build();
    archive.truncate(archive.len() - 10);

    assert!(extractor_for(archive).list_files().await.is_err());
}

#[tokio::test]
async fn out_of_range_reads_are_errors() {
    let reader = MemoryReader::new(vec![0u8; 8]);
    let mut buf = [0u8; 4];

    assert!(reader.read_at(4, &mut buf).await.is_ok());
    assert!(reader.read_at(6, &mut buf).await.is_err());
    // Offsets near u64::MAX come from corrupt metadata and must error,
    // not wrap around
    assert!(reader.read_at(u64::MAX - 2, &mut buf).await.is_err());
}

#[tokio::test]
async fn extract_to_string_is_lossy() {
    let archive = ZipBuilder::new()
        .file("notes.txt", &[0x68, 0x69, 0xFF, 0x21])
        .build();

    let extractor = extractor_for(archive);
    let entries = extractor.list_files().await.unwrap();
    let text = extractor.extract_to_string(&entries[0]).await.unwrap();

    assert_eq!(text, "hi\u{FFFD}!");
}
