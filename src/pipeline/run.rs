use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::evaluators::EvaluatorSet;
use crate::input::DatasetRow;
use crate::input::mapping::MappingSet;
use crate::report::{MetricStats, ResultsSummary};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowResult {
    pub columns: BTreeMap<String, Value>,
}

#[derive(Debug, Clone)]
pub struct EvaluationRun {
    pub rows: Vec<RowResult>,
    pub metrics: BTreeMap<String, MetricStats>,
    pub failures: usize,
}

impl EvaluationRun {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn summary(&self) -> ResultsSummary {
        ResultsSummary {
            row_count: Some(self.rows.len()),
            metrics: self.metrics.clone(),
            unrated: Default::default(),
        }
    }
}

pub fn run_evaluation(
    rows: &[DatasetRow],
    evaluators: &EvaluatorSet,
    mappings: &MappingSet,
) -> EvaluationRun {
    let mut results = Vec::with_capacity(rows.len());
    let mut samples: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    let mut failures = 0usize;

    for (idx, row) in rows.iter().enumerate() {
        let mut out = RowResult::default();
        for (column, value) in row {
            out.columns.insert(format!("inputs.{column}"), value.clone());
        }

        for evaluator in evaluators.iter() {
            let name = evaluator.name();
            let input = mappings.input_for(name, row);
            match evaluator.evaluate(&input) {
                Ok(record) => {
                    for (metric, value) in record.iter() {
                        let key = format!("{name}.{metric}");
                        samples.entry(key.clone()).or_default().push(value.as_f64());
                        out.columns.insert(format!("outputs.{key}"), Value::from(value));
                    }
                }
                Err(e) => {
                    failures += 1;
                    tracing::warn!("row {}: evaluator {name} failed: {e}", idx + 1);
                    out.columns.insert(
                        format!("outputs.{name}.error"),
                        Value::String(e.to_string()),
                    );
                }
            }
        }
        results.push(out);
    }

    let metrics = samples
        .iter()
        .map(|(name, values)| (name.clone(), MetricStats::from_values(values)))
        .collect();

    tracing::debug!(
        "evaluated {} rows with {} evaluators ({} failures)",
        results.len(),
        evaluators.len(),
        failures
    );

    EvaluationRun {
        rows: results,
        metrics,
        failures,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/run.rs"]
mod tests;
