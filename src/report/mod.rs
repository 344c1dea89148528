use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MetricStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,
    pub metrics: BTreeMap<String, MetricStats>,
    // Loaded metrics that carried no `mean`; they get no quality status.
    #[serde(skip)]
    pub unrated: BTreeSet<String>,
}

impl ResultsSummary {
    pub fn rated(&self) -> impl Iterator<Item = (&String, &MetricStats)> {
        self.metrics
            .iter()
            .filter(|(name, _)| !self.unrated.contains(*name))
    }
}

impl MetricStats {
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }
        Self {
            mean: mean(values),
            std: sample_std(values),
            min,
            max,
            count: values.len(),
        }
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
