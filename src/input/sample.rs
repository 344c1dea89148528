use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::input::InputError;

#[derive(Debug, Clone, Serialize)]
pub struct SampleRow {
    pub query: &'static str,
    pub response: &'static str,
    pub context: &'static str,
    pub ground_truth: &'static str,
}

pub fn sample_rows() -> Vec<SampleRow> {
    vec![
        SampleRow {
            query: "What is a unified AI development platform?",
            response: "A unified AI development platform brings model catalogs, prompt tooling, evaluation and deployment into one workspace (Document 1). Teams use it to build, evaluate and ship generative AI applications with enterprise controls [2].",
            context: "A unified AI development platform is a comprehensive environment for building AI applications...",
            ground_truth: "A unified platform for AI application development offering tools for building, evaluating and deploying generative AI solutions with enterprise features.",
        },
        SampleRow {
            query: "How do I implement RAG?",
            response: "Combine a retrieval system with a language model: retrieve documents relevant to the query and pass them to the model as grounding context (Source 1).",
            context: "RAG combines information retrieval with generation...",
            ground_truth: "Implement RAG by combining a retrieval system with a language model, retrieving relevant documents for a query, and using them as context for response generation.",
        },
        SampleRow {
            query: "Why cite sources in generated answers?",
            response: "Citations let readers verify claims.",
            context: "Grounded answers reference the documents they were generated from...",
            ground_truth: "Citations make generated answers verifiable and help detect ungrounded claims.",
        },
    ]
}

pub fn write_sample_dataset(path: &Path) -> Result<usize, InputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let rows = sample_rows();
    let mut writer = BufWriter::new(File::create(path)?);
    for row in &rows {
        let line = serde_json::to_string(row)
            .map_err(|e| InputError::InvalidInput(format!("cannot encode sample row: {e}")))?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    tracing::info!("wrote {} sample rows to {}", rows.len(), path.display());
    Ok(rows.len())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/sample.rs"]
mod tests;
