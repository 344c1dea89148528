use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::{Map, Value};

pub mod mapping;
pub mod sample;
pub mod validate;

pub type DatasetRow = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn load_dataset(path: &Path) -> Result<Vec<DatasetRow>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "dataset not found: {}",
            path.display()
        )));
    }
    let reader = BufReader::new(File::open(path)?);
    let rows = parse_rows(reader)?;
    tracing::info!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn parse_rows(reader: impl BufRead) -> Result<Vec<DatasetRow>, InputError> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)
            .map_err(|e| InputError::Parse(format!("line {line_no}: {e}")))?;
        match value {
            Value::Object(row) => rows.push(row),
            _ => {
                return Err(InputError::Parse(format!(
                    "line {line_no}: expected a JSON object"
                )));
            }
        }
    }
    Ok(rows)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
