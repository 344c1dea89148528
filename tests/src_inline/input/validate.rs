use std::io::Cursor;

use super::*;

#[test]
fn test_complete_rows_have_no_issues() {
    let data = r#"{"query":"q","response":"r","context":"c","ground_truth":"g"}"#;
    let report = validate_rows(Cursor::new(data)).unwrap();
    assert_eq!(report.rows_checked, 1);
    assert!(report.issues.is_empty());
    assert!(report.is_valid());
}

#[test]
fn test_missing_fields_reported_per_line() {
    let data = "{\"query\":\"q\",\"response\":\"r\",\"context\":\"c\",\"ground_truth\":\"g\"}\n{\"query\":\"q\"}\n";
    let report = validate_rows(Cursor::new(data)).unwrap();
    assert_eq!(
        report.issues,
        vec![ValidationIssue {
            line: 2,
            kind: IssueKind::MissingFields(vec![
                "response".to_string(),
                "context".to_string(),
                "ground_truth".to_string()
            ]),
        }]
    );
    assert!(report.is_valid());
    assert_eq!(report.warnings().count(), 1);
}

#[test]
fn test_timestamp_like_values_flagged() {
    let data = r#"{"query":"q","response":"r","context":"c","ground_truth":"g","created":"2024-05-01T12:30:00.000Z"}"#;
    let report = validate_rows(Cursor::new(data)).unwrap();
    assert_eq!(
        report.issues,
        vec![ValidationIssue {
            line: 1,
            kind: IssueKind::TimestampLike {
                field: "created".to_string()
            },
        }]
    );
}

#[test]
fn test_looks_like_timestamp() {
    assert!(looks_like_timestamp("2024-05-01T12:30:00.000Z"));
    assert!(!looks_like_timestamp("2024-05-01T12:30"));
    assert!(!looks_like_timestamp("note: a sentence that is long enough"));
}

#[test]
fn test_stops_at_invalid_json() {
    let data = "{\"query\":\"q\"}\n{broken\n{\"query\":\"q\"}\n";
    let report = validate_rows(Cursor::new(data)).unwrap();
    assert!(!report.is_valid());
    assert_eq!(report.rows_checked, 1);
    let last = report.issues.last().unwrap();
    assert_eq!(last.line, 2);
    assert!(matches!(last.kind, IssueKind::InvalidJson(_)));
}
