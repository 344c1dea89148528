use crate::error::EvalError;
use crate::evaluators::Evaluator;
use crate::model::config::LengthThresholds;
use crate::model::record::{ScoreRecord, round2};

pub const CHARS: &str = "response_length_chars";
pub const WORDS: &str = "response_length_words";
pub const WITHIN_RANGE: &str = "response_length_within_range";
pub const SCORE: &str = "response_length_score";

const METRICS: &[&str] = &[CHARS, WORDS, WITHIN_RANGE, SCORE];

#[derive(Debug, Clone)]
pub struct ResponseLengthEvaluator {
    thresholds: LengthThresholds,
}

impl ResponseLengthEvaluator {
    pub fn new(thresholds: LengthThresholds) -> Result<Self, EvalError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> LengthThresholds {
        self.thresholds
    }
}

impl Evaluator for ResponseLengthEvaluator {
    fn name(&self) -> &str {
        "response_length"
    }

    fn metric_names(&self) -> &'static [&'static str] {
        METRICS
    }

    fn score(&self, response: &str) -> ScoreRecord {
        let length = response.chars().count();
        let words = response.split_whitespace().count();
        let LengthThresholds {
            min_length,
            max_length,
        } = self.thresholds;

        let within_range = min_length <= length && length <= max_length;

        let mut out = ScoreRecord::new();
        out.insert(CHARS, length as u64);
        out.insert(WORDS, words as u64);
        out.insert(WITHIN_RANGE, within_range);
        out.insert(SCORE, round2(length_score(length, min_length, max_length)));
        out
    }
}

pub fn length_score(length: usize, min_length: usize, max_length: usize) -> f64 {
    let len = length as f64;
    if length < min_length {
        (3.0 * len / min_length as f64).clamp(0.0, 3.0)
    } else if length > max_length {
        let max = max_length as f64;
        (5.0 - 2.0 * (len - max) / max).max(0.0)
    } else {
        5.0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/evaluators/response_length.rs"]
mod tests;
