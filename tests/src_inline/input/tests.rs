use std::io::Cursor;

use tempfile::tempdir;

use super::*;

#[test]
fn test_parse_rows_skips_blank_lines() {
    let data = "{\"response\":\"a\"}\n\n  \n{\"response\":\"b\",\"query\":\"q\"}\n";
    let rows = parse_rows(Cursor::new(data)).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["query"], "q");
}

#[test]
fn test_parse_rows_reports_line_number() {
    let data = "{\"response\":\"a\"}\n{not json\n";
    let err = parse_rows(Cursor::new(data)).unwrap_err();
    match err {
        InputError::Parse(msg) => assert!(msg.starts_with("line 2:"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_rows_rejects_non_objects() {
    let err = parse_rows(Cursor::new("[1,2,3]\n")).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn test_load_dataset_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_dataset(&dir.path().join("nope.jsonl")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_load_dataset_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rows.jsonl");
    std::fs::write(&path, "{\"response\":\"hello\"}\n").unwrap();
    let rows = load_dataset(&path).unwrap();
    assert_eq!(rows.len(), 1);
}
