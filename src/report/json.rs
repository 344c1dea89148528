use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::EvalError;
use crate::input::InputError;
use crate::pipeline::run::EvaluationRun;
use crate::report::{MetricStats, ResultsSummary};

pub const ROWS_FILE: &str = "eval_results.jsonl";
pub const SUMMARY_FILE: &str = "eval_results.json";

pub const SUMMARY_CANDIDATES: &[&str] = &[SUMMARY_FILE, "results.json", "evaluation_results.json"];

#[derive(Debug, Clone)]
pub struct WrittenResults {
    pub rows_path: PathBuf,
    pub summary_path: PathBuf,
}

pub fn write_results(run: &EvaluationRun, out_dir: &Path) -> Result<WrittenResults, EvalError> {
    fs::create_dir_all(out_dir)?;

    let rows_path = out_dir.join(ROWS_FILE);
    let mut writer = BufWriter::new(File::create(&rows_path)?);
    for row in &run.rows {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    let summary_path = out_dir.join(SUMMARY_FILE);
    let json = render_summary_json(&run.summary())?;
    fs::write(&summary_path, json)?;

    tracing::info!(
        "wrote {} row results to {} and aggregates to {}",
        run.rows.len(),
        rows_path.display(),
        summary_path.display()
    );

    Ok(WrittenResults {
        rows_path,
        summary_path,
    })
}

pub fn render_summary_json(summary: &ResultsSummary) -> Result<String, EvalError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn load_results(results_dir: &Path) -> Result<ResultsSummary, EvalError> {
    for name in SUMMARY_CANDIDATES {
        let path = results_dir.join(name);
        if path.is_file() {
            tracing::debug!("reading results from {}", path.display());
            let contents = fs::read_to_string(&path)?;
            return parse_summary(&contents);
        }
    }
    Err(InputError::MissingInput(format!(
        "no results file found in {}",
        results_dir.display()
    ))
    .into())
}

pub fn parse_summary(contents: &str) -> Result<ResultsSummary, EvalError> {
    let value: Value = serde_json::from_str(contents)?;
    let Value::Object(root) = value else {
        return Err(InputError::Parse("results root must be a JSON object".to_string()).into());
    };

    let row_count = root
        .get("row_count")
        .and_then(Value::as_u64)
        .map(|n| n as usize);

    let mut metrics = BTreeMap::new();
    let mut unrated = BTreeSet::new();
    if let Some(Value::Object(entries)) = root.get("metrics") {
        for (name, entry) in entries {
            let Value::Object(fields) = entry else {
                tracing::debug!("skipping non-object metric {name}");
                continue;
            };
            if !fields.contains_key("mean") {
                unrated.insert(name.clone());
            }
            metrics.insert(name.clone(), stats_from_fields(fields));
        }
    }

    Ok(ResultsSummary {
        row_count,
        metrics,
        unrated,
    })
}

// Absent or non-numeric fields read as 0; `count` may be written as a float.
fn stats_from_fields(fields: &Map<String, Value>) -> MetricStats {
    let num = |key: &str| fields.get(key).and_then(Value::as_f64).unwrap_or(0.0);
    let count = num("count");
    MetricStats {
        mean: num("mean"),
        std: num("std"),
        min: num("min"),
        max: num("max"),
        count: if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
