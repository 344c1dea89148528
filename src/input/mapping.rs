use std::collections::BTreeMap;

use crate::evaluators::{EvaluatorInput, RESPONSE_FIELD};
use crate::input::{DatasetRow, InputError};

const TEMPLATE_PREFIX: &str = "${data.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    fields: BTreeMap<String, String>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    pub fn response_default() -> Self {
        let mut mapping = Self::new();
        mapping
            .fields
            .insert(RESPONSE_FIELD.to_string(), RESPONSE_FIELD.to_string());
        mapping
    }

    pub fn insert(&mut self, field: &str, template: &str) -> Result<(), InputError> {
        let column = parse_template(template)?;
        self.fields.insert(field.to_string(), column.to_string());
        Ok(())
    }

    pub fn column_for(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|s| s.as_str())
    }

    pub fn apply(&self, row: &DatasetRow) -> EvaluatorInput {
        let mut input = row.clone();
        for (field, column) in &self.fields {
            match row.get(column) {
                Some(value) => {
                    input.insert(field.clone(), value.clone());
                }
                None => {
                    input.remove(field);
                }
            }
        }
        input
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::response_default()
    }
}

pub fn parse_template(template: &str) -> Result<&str, InputError> {
    let column = template
        .trim()
        .strip_prefix(TEMPLATE_PREFIX)
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| {
            InputError::InvalidInput(format!(
                "column template must look like ${{data.<column>}}, got {template:?}"
            ))
        })?;
    if column.is_empty() || column.contains(['{', '}']) {
        return Err(InputError::InvalidInput(format!(
            "empty or malformed column in template {template:?}"
        )));
    }
    Ok(column)
}

#[derive(Debug, Clone, Default)]
pub struct MappingSet {
    by_evaluator: BTreeMap<String, ColumnMapping>,
}

impl MappingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_spec(&mut self, spec: &str) -> Result<(), InputError> {
        let (target, template) = spec.split_once('=').ok_or_else(|| {
            InputError::InvalidInput(format!(
                "column override must be <evaluator>.<field>=${{data.<column>}}, got {spec:?}"
            ))
        })?;
        let (evaluator, field) = target.trim().split_once('.').ok_or_else(|| {
            InputError::InvalidInput(format!("missing evaluator prefix in {target:?}"))
        })?;
        if evaluator.is_empty() || field.is_empty() {
            return Err(InputError::InvalidInput(format!(
                "empty evaluator or field in {target:?}"
            )));
        }
        self.by_evaluator
            .entry(evaluator.to_string())
            .or_default()
            .insert(field, template)
    }

    pub fn evaluators(&self) -> impl Iterator<Item = &str> {
        self.by_evaluator.keys().map(|s| s.as_str())
    }

    pub fn for_evaluator(&self, name: &str) -> ColumnMapping {
        self.by_evaluator.get(name).cloned().unwrap_or_default()
    }

    pub fn input_for(&self, name: &str, row: &DatasetRow) -> EvaluatorInput {
        match self.by_evaluator.get(name) {
            Some(mapping) => mapping.apply(row),
            None => ColumnMapping::response_default().apply(row),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mapping.rs"]
mod tests;
