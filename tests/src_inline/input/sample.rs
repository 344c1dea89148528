use tempfile::tempdir;

use super::*;
use crate::input::load_dataset;
use crate::input::validate::validate_dataset;

#[test]
fn test_sample_dataset_is_valid_and_complete() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("test_queries.jsonl");
    let n = write_sample_dataset(&path).unwrap();
    assert_eq!(n, sample_rows().len());

    let rows = load_dataset(&path).unwrap();
    assert_eq!(rows.len(), n);

    let report = validate_dataset(&path).unwrap();
    assert!(report.is_valid());
    assert!(report.issues.is_empty());
}
