pub mod error;
pub mod evaluators;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod tracing;

pub use error::EvalError;
pub use evaluators::citation_count::CitationCountEvaluator;
pub use evaluators::response_length::ResponseLengthEvaluator;
pub use evaluators::{Evaluator, EvaluatorInput, EvaluatorSet};
pub use model::config::{CitationThresholds, EvalConfig, LengthThresholds};
pub use model::record::{MetricValue, ScoreRecord};
