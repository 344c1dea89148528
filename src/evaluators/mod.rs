pub mod citation_count;
pub mod response_length;

use serde_json::{Map, Value};

use crate::error::EvalError;
use crate::model::config::EvalConfig;
use crate::model::record::ScoreRecord;

use citation_count::CitationCountEvaluator;
use response_length::ResponseLengthEvaluator;

pub type EvaluatorInput = Map<String, Value>;

pub const RESPONSE_FIELD: &str = "response";

pub trait Evaluator: Send + Sync {
    fn name(&self) -> &str;

    fn metric_names(&self) -> &'static [&'static str];

    fn score(&self, response: &str) -> ScoreRecord;

    fn evaluate(&self, input: &EvaluatorInput) -> Result<ScoreRecord, EvalError> {
        let response = response_field(input)?;
        Ok(self.score(response))
    }
}

pub fn response_field(input: &EvaluatorInput) -> Result<&str, EvalError> {
    match input.get(RESPONSE_FIELD) {
        None | Some(Value::Null) => Err(EvalError::MissingField(RESPONSE_FIELD.to_string())),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(EvalError::InvalidField {
            field: RESPONSE_FIELD.to_string(),
            reason: format!("expected a string, got {}", value_kind(other)),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub struct EvaluatorSet {
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl EvaluatorSet {
    pub fn new() -> Self {
        Self {
            evaluators: Vec::new(),
        }
    }

    pub fn from_config(config: &EvalConfig) -> Result<Self, EvalError> {
        let mut set = Self::new();
        set.add(ResponseLengthEvaluator::new(config.length)?)?;
        set.add(CitationCountEvaluator::new(config.citations)?)?;
        Ok(set)
    }

    pub fn add(&mut self, evaluator: impl Evaluator + 'static) -> Result<(), EvalError> {
        if self.evaluators.iter().any(|e| e.name() == evaluator.name()) {
            return Err(EvalError::InvalidConfiguration(format!(
                "duplicate evaluator name: {}",
                evaluator.name()
            )));
        }
        self.evaluators.push(Box::new(evaluator));
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.evaluators.iter().map(|e| e.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Evaluator> {
        self.evaluators.iter().map(|e| e.as_ref())
    }

    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }

    pub fn evaluate_all(
        &self,
        input: &EvaluatorInput,
    ) -> Vec<(&str, Result<ScoreRecord, EvalError>)> {
        self.evaluators
            .iter()
            .map(|e| (e.name(), e.evaluate(input)))
            .collect()
    }
}

impl Default for EvaluatorSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/evaluators/mod.rs"]
mod tests;
