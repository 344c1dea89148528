use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::input::InputError;

pub const REQUIRED_FIELDS: &[&str] = &["query", "response", "context", "ground_truth"];

const TIMESTAMP_MIN_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    MissingFields(Vec<String>),
    TimestampLike { field: String },
    InvalidJson(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub line: usize,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub rows_checked: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    // Only malformed JSON invalidates a file.
    pub fn is_valid(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|i| matches!(i.kind, IssueKind::InvalidJson(_)))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| !matches!(i.kind, IssueKind::InvalidJson(_)))
    }
}

pub fn validate_dataset(path: &Path) -> Result<ValidationReport, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "dataset not found: {}",
            path.display()
        )));
    }
    let reader = BufReader::new(File::open(path)?);
    validate_rows(reader)
}

pub fn validate_rows(reader: impl BufRead) -> Result<ValidationReport, InputError> {
    let mut report = ValidationReport::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let row = match serde_json::from_str::<Value>(&line) {
            Ok(Value::Object(row)) => row,
            Ok(_) => {
                report.issues.push(ValidationIssue {
                    line: line_no,
                    kind: IssueKind::InvalidJson("expected a JSON object".to_string()),
                });
                return Ok(report);
            }
            Err(e) => {
                report.issues.push(ValidationIssue {
                    line: line_no,
                    kind: IssueKind::InvalidJson(e.to_string()),
                });
                return Ok(report);
            }
        };
        report.rows_checked += 1;

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|f| !row.contains_key(**f))
            .map(|f| f.to_string())
            .collect();
        if !missing.is_empty() {
            report.issues.push(ValidationIssue {
                line: line_no,
                kind: IssueKind::MissingFields(missing),
            });
        }

        for (key, value) in &row {
            if let Value::String(s) = value {
                if looks_like_timestamp(s) {
                    report.issues.push(ValidationIssue {
                        line: line_no,
                        kind: IssueKind::TimestampLike { field: key.clone() },
                    });
                }
            }
        }
    }
    Ok(report)
}

pub fn looks_like_timestamp(s: &str) -> bool {
    s.contains('T') && s.contains(':') && s.chars().count() > TIMESTAMP_MIN_LEN
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/validate.rs"]
mod tests;
