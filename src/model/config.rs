use crate::error::EvalError;
use crate::model::status::QualityThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthThresholds {
    pub min_length: usize,
    pub max_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CitationThresholds {
    pub min_citations: u64,
}

#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub length: LengthThresholds,
    pub citations: CitationThresholds,
    pub quality: QualityThresholds,
}

impl LengthThresholds {
    pub fn default_v1() -> Self {
        Self {
            min_length: 50,
            max_length: 1000,
        }
    }

    pub fn validate(&self) -> Result<(), EvalError> {
        if self.min_length == 0 {
            return Err(EvalError::InvalidConfiguration(
                "min_length must be greater than 0".to_string(),
            ));
        }
        if self.max_length == 0 {
            return Err(EvalError::InvalidConfiguration(
                "max_length must be greater than 0".to_string(),
            ));
        }
        if self.max_length < self.min_length {
            return Err(EvalError::InvalidConfiguration(format!(
                "max_length ({}) must not be below min_length ({})",
                self.max_length, self.min_length
            )));
        }
        Ok(())
    }
}

impl CitationThresholds {
    pub fn default_v1() -> Self {
        Self { min_citations: 1 }
    }

    pub fn validate(&self) -> Result<(), EvalError> {
        if self.min_citations == 0 {
            return Err(EvalError::InvalidConfiguration(
                "min_citations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LengthThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl Default for CitationThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl EvalConfig {
    pub fn default_v1() -> Self {
        Self {
            length: LengthThresholds::default_v1(),
            citations: CitationThresholds::default_v1(),
            quality: QualityThresholds::default_v1(),
        }
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/config.rs"]
mod tests;
