use std::sync::OnceLock;

use regex::Regex;

use crate::error::EvalError;
use crate::evaluators::Evaluator;
use crate::model::config::CitationThresholds;
use crate::model::record::{ScoreRecord, round2};

pub const COUNT: &str = "citation_count";
pub const SUFFICIENT: &str = "has_sufficient_citations";
pub const SCORE: &str = "citation_score";

const METRICS: &[&str] = &[COUNT, SUFFICIENT, SCORE];

static CITATION_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn citation_patterns() -> &'static [Regex] {
    CITATION_PATTERNS.get_or_init(|| {
        vec![
            Regex::new(r"Document\s+\d+").expect("valid regex"),
            Regex::new(r"\[\d+\]").expect("valid regex"),
            Regex::new(r"\(Source\s+\d+\)").expect("valid regex"),
            Regex::new(r"\(Document\s+\d+\)").expect("valid regex"),
        ]
    })
}

#[derive(Debug, Clone)]
pub struct CitationCountEvaluator {
    thresholds: CitationThresholds,
}

impl CitationCountEvaluator {
    pub fn new(thresholds: CitationThresholds) -> Result<Self, EvalError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> CitationThresholds {
        self.thresholds
    }
}

impl Evaluator for CitationCountEvaluator {
    fn name(&self) -> &str {
        "citation_count"
    }

    fn metric_names(&self) -> &'static [&'static str] {
        METRICS
    }

    fn score(&self, response: &str) -> ScoreRecord {
        let count = count_citations(response);
        let min = self.thresholds.min_citations;

        let mut out = ScoreRecord::new();
        out.insert(COUNT, count);
        out.insert(SUFFICIENT, count >= min);
        out.insert(SCORE, round2(citation_score(count, min)));
        out
    }
}

// Patterns are not deduplicated: `(Document 4)` counts twice.
pub fn count_citations(text: &str) -> u64 {
    citation_patterns()
        .iter()
        .map(|re| re.find_iter(text).count() as u64)
        .sum()
}

pub fn citation_score(count: u64, min_citations: u64) -> f64 {
    if count == 0 {
        0.0
    } else if count < min_citations {
        3.0 * count as f64 / min_citations as f64
    } else {
        (3.0 + 0.5 * (count - min_citations) as f64).min(5.0)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/evaluators/citation_count.rs"]
mod tests;
