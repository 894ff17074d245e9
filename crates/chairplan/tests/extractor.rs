//! Integration tests for reading plans and rendering reports.

use std::io::{Cursor, Write};

use chairplan::prelude::*;
use tempfile::NamedTempFile;

// =========================================================================
// Helpers
// =========================================================================

const FLAT: &str = "\
+---------+--------+
| kitchen | (den)  |
|  W   W  |   S    |
|         +--+     |
|  C         |  P  |
+------------+-----+
";

/// Writes `contents` to a temp file that is removed on drop.
fn temp_plan(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =========================================================================
// Reading
// =========================================================================

#[test]
fn test_extract_from_str() {
    let inventory = ChairDataExtractor::new().extract_from_str(FLAT).unwrap();

    assert_eq!(inventory.get("kitchen"), Some(&ChairCounts::new(2, 0, 0, 1)));
    assert_eq!(inventory.get("den"), Some(&ChairCounts::new(0, 1, 1, 0)));
    assert_eq!(inventory.len(), 2);
}

#[test]
fn test_extract_from_reader_matches_str() {
    let extractor = ChairDataExtractor::new();
    let from_reader = extractor
        .extract_from_reader(Cursor::new(FLAT.as_bytes()))
        .unwrap();
    let from_str = extractor.extract_from_str(FLAT).unwrap();
    assert_eq!(from_reader, from_str);
}

#[test]
fn test_extract_from_file() {
    let plan = temp_plan(FLAT);

    let inventory = ChairDataExtractor::new()
        .extract_from_file(plan.path())
        .unwrap();

    assert!(inventory.contains("kitchen"));
    assert!(inventory.contains("den"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = ChairDataExtractor::new().extract_from_file(&path).unwrap_err();
    assert!(matches!(err, ChairplanError::Io(_)));
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let bytes: &[u8] = b"+--+\n|\xff |\n+--+\n";
    let err = ChairDataExtractor::new()
        .extract_from_reader(Cursor::new(bytes))
        .unwrap_err();
    assert!(matches!(err, ChairplanError::Io(_)));
}

#[test]
fn test_plan_error_surfaces_kind() {
    let err = ChairDataExtractor::new()
        .extract_from_str("+---+\n| W |\n+---+")
        .unwrap_err();
    assert_eq!(
        err.as_plan_error().map(PlanError::kind),
        Some(PlanErrorKind::ChairsOutsideRoom)
    );
}

#[test]
fn test_builder_config_reaches_scan() {
    let extractor = ChairDataExtractor::builder().max_width(10).build();
    let err = extractor.extract_from_str(FLAT).unwrap_err();
    assert!(matches!(
        err,
        ChairplanError::Plan(PlanError::RowWidthMismatch { expected: 10, actual: 20, .. })
    ));
}

// =========================================================================
// Reports
// =========================================================================

#[test]
fn test_text_report() {
    let inventory = ChairDataExtractor::new().extract_from_str(FLAT).unwrap();

    let report = String::from_utf8(TextCodec.encode(&inventory).unwrap()).unwrap();

    assert_eq!(
        report,
        "total:\n\
         W: 2, P: 1, S: 1, C: 1\n\
         den:\n\
         W: 0, P: 1, S: 1, C: 0\n\
         kitchen:\n\
         W: 2, P: 0, S: 0, C: 1\n"
    );
}

#[test]
fn test_json_report() {
    let inventory = ChairDataExtractor::new().extract_from_str(FLAT).unwrap();

    let bytes = JsonCodec.encode(&inventory).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["kitchen"], serde_json::json!([2, 0, 0, 1]));
    assert_eq!(value["den"], serde_json::json!([0, 1, 1, 0]));
    assert_eq!(JsonCodec.decode(&bytes).unwrap(), inventory);
}
