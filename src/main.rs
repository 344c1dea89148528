use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use ragqc::error::EvalError;
use ragqc::evaluators::{EvaluatorSet, RESPONSE_FIELD};
use ragqc::input::load_dataset;
use ragqc::input::mapping::MappingSet;
use ragqc::input::sample::write_sample_dataset;
use ragqc::input::validate::{IssueKind, validate_dataset};
use ragqc::model::config::{CitationThresholds, EvalConfig, LengthThresholds};
use ragqc::pipeline::run::run_evaluation;
use ragqc::report::json::{load_results, write_results};
use ragqc::report::text::{render_analysis, render_markdown, render_run_summary};

const SUMMARY_MD: &str = "evaluation_summary.md";

/// Code-based quality scoring for RAG responses.
#[derive(Parser, Debug)]
#[command(name = "ragqc")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every row of a JSONL dataset and write row-level and aggregate results
    Evaluate {
        /// JSONL dataset with at least a `response` column
        #[arg(long, short = 'd')]
        data: PathBuf,

        /// Output directory for eval_results.jsonl / eval_results.json
        #[arg(long, short = 'o', default_value = "evaluation_results")]
        out: PathBuf,

        #[arg(long, default_value_t = LengthThresholds::default_v1().min_length)]
        min_length: usize,

        #[arg(long, default_value_t = LengthThresholds::default_v1().max_length)]
        max_length: usize,

        #[arg(long, default_value_t = CitationThresholds::default_v1().min_citations)]
        min_citations: u64,

        /// Column override, e.g. `citation_count.response=${data.answer}` (repeatable)
        #[arg(long = "column", value_name = "EVALUATOR.FIELD=${data.COLUMN}")]
        columns: Vec<String>,
    },
    /// Print a quality assessment of saved results and write a Markdown summary
    Analyze {
        /// Directory holding eval_results.json (or results.json)
        #[arg(long, short = 'r', default_value = "evaluation_results")]
        results: PathBuf,

        /// Markdown output path (defaults to <results>/evaluation_summary.md)
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Check a JSONL dataset for malformed lines, missing fields and timestamps
    Validate {
        path: PathBuf,
    },
    /// Write a small sample dataset
    Generate {
        #[arg(long, short = 'o', default_value = "data/test_queries.jsonl")]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    ragqc::tracing::init(cli.verbose);
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, EvalError> {
    match command {
        Command::Evaluate {
            data,
            out,
            min_length,
            max_length,
            min_citations,
            columns,
        } => {
            let mut config = EvalConfig::default_v1();
            config.length = LengthThresholds {
                min_length,
                max_length,
            };
            config.citations = CitationThresholds { min_citations };
            evaluate(&data, &out, &config, &columns)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Analyze { results, summary } => {
            let summary_path = summary.unwrap_or_else(|| results.join(SUMMARY_MD));
            analyze(&results, &summary_path, &EvalConfig::default_v1())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { path } => validate(&path),
        Command::Generate { out } => {
            let n = write_sample_dataset(&out)?;
            println!("Generated {n} test cases in {}", out.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn evaluate(
    data: &Path,
    out_dir: &Path,
    config: &EvalConfig,
    columns: &[String],
) -> Result<(), EvalError> {
    let evaluators = EvaluatorSet::from_config(config)?;
    let mappings = parse_mappings(columns, &evaluators)?;
    tracing::info!("evaluators: {}", evaluators.names().join(", "));
    for line in describe_mappings(&evaluators, &mappings) {
        tracing::debug!("{line}");
    }

    let rows = load_dataset(data)?;
    let run = run_evaluation(&rows, &evaluators, &mappings);
    if run.failures > 0 {
        tracing::warn!("{} evaluator calls failed; see outputs.*.error", run.failures);
    }

    write_results(&run, out_dir)?;
    print!(
        "{}",
        render_run_summary(&run.summary(), &out_dir.display().to_string())
    );
    Ok(())
}

fn parse_mappings(columns: &[String], evaluators: &EvaluatorSet) -> Result<MappingSet, EvalError> {
    let mut mappings = MappingSet::new();
    for spec in columns {
        mappings.add_spec(spec)?;
    }
    let known = evaluators.names();
    for name in mappings.evaluators() {
        if !known.contains(&name) {
            return Err(EvalError::InvalidConfiguration(format!(
                "column override for unknown evaluator {name}; known: {}",
                known.join(", ")
            )));
        }
    }
    Ok(mappings)
}

fn describe_mappings(evaluators: &EvaluatorSet, mappings: &MappingSet) -> Vec<String> {
    evaluators
        .names()
        .into_iter()
        .map(|name| {
            let mapping = mappings.for_evaluator(name);
            match mapping.column_for(RESPONSE_FIELD) {
                Some(column) => format!("{name}.{RESPONSE_FIELD} <- ${{data.{column}}}"),
                None => format!("{name}.{RESPONSE_FIELD} <- (unmapped)"),
            }
        })
        .collect()
}

fn analyze(results_dir: &Path, summary_path: &Path, config: &EvalConfig) -> Result<(), EvalError> {
    let summary = load_results(results_dir)?;
    print!("{}", render_analysis(&summary, &config.quality));

    let markdown = render_markdown(&summary, &config.quality);
    if let Some(parent) = summary_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(summary_path, markdown)?;
    println!();
    println!("Summary saved to: {}", summary_path.display());
    Ok(())
}

fn validate(path: &Path) -> Result<ExitCode, EvalError> {
    let report = validate_dataset(path)?;
    for issue in &report.issues {
        match &issue.kind {
            IssueKind::MissingFields(fields) => {
                tracing::warn!("line {}: missing fields: {}", issue.line, fields.join(", "))
            }
            IssueKind::TimestampLike { field } => tracing::warn!(
                "line {}: field '{field}' appears to contain a timestamp",
                issue.line
            ),
            IssueKind::InvalidJson(reason) => {
                tracing::error!("line {}: invalid JSON - {reason}", issue.line)
            }
        }
    }
    if report.is_valid() {
        println!(
            "Validation complete: {} rows, {} warnings",
            report.rows_checked,
            report.warnings().count()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
