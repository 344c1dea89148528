use crate::model::status::{QualityStatus, QualityThresholds};
use crate::report::{ResultsSummary, format_f64_3};

const RULE: &str = "================================================================================";

pub fn render_run_summary(summary: &ResultsSummary, out_dir: &str) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str("Evaluation Results Summary\n");
    out.push_str(RULE);
    out.push_str("\n\n");

    out.push_str(&format!("{:<45} {:<10} {:<10}\n", "Metric", "Mean", "Std Dev"));
    out.push_str(&"-".repeat(65));
    out.push('\n');
    for (name, stats) in &summary.metrics {
        out.push_str(&format!(
            "{:<45} {:<10.3} {:<10.3}\n",
            name, stats.mean, stats.std
        ));
    }
    out.push('\n');
    out.push_str(&format!("Results saved to: {out_dir}\n"));
    out
}

pub fn render_analysis(summary: &ResultsSummary, thresholds: &QualityThresholds) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str("EVALUATION RESULTS ANALYSIS\n");
    out.push_str(RULE);
    out.push_str("\n\n");

    if let Some(n) = summary.row_count {
        out.push_str(&format!("Total Queries Evaluated: {n}\n\n"));
    }

    out.push_str(&format!("{:<45} {:<10} {:<10}\n", "Metric", "Mean", "Status"));
    out.push_str(&"-".repeat(70));
    out.push('\n');
    for (name, stats) in summary.rated() {
        let status = thresholds.status(name, stats.mean);
        out.push_str(&format!(
            "{:<45} {:<10.3} {:<10}\n",
            name,
            stats.mean,
            status.symbol()
        ));
    }
    out
}

pub fn render_markdown(summary: &ResultsSummary, thresholds: &QualityThresholds) -> String {
    let mut out = String::new();
    out.push_str("# Evaluation Results Summary\n\n");

    if let Some(n) = summary.row_count {
        out.push_str(&format!("**Total Queries Evaluated**: {n}\n\n"));
    }

    out.push_str("## Metrics Overview\n\n");
    out.push_str("| Metric | Mean | Std Dev | Min | Max |\n");
    out.push_str("|--------|------|---------|-----|-----|\n");
    for (name, stats) in &summary.metrics {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            name,
            format_f64_3(stats.mean),
            format_f64_3(stats.std),
            format_f64_3(stats.min),
            format_f64_3(stats.max)
        ));
    }
    out.push('\n');

    out.push_str("## Quality Assessment\n\n");
    out.push_str("| Metric | Score | Status |\n");
    out.push_str("|--------|-------|--------|\n");
    for (name, stats) in summary.rated() {
        let status = thresholds.status(name, stats.mean);
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            name,
            format_f64_3(stats.mean),
            status.symbol()
        ));
    }
    out.push('\n');
    out.push_str(&legend(thresholds));
    out
}

fn legend(thresholds: &QualityThresholds) -> String {
    let band = thresholds.fallback;
    format!(
        "**Legend**: {} {} (≥{:.1}) | {} {} (≥{:.1}) | {} {} (<{:.1})\n",
        QualityStatus::Excellent.symbol(),
        QualityStatus::Excellent.label(),
        band.good,
        QualityStatus::Acceptable.symbol(),
        QualityStatus::Acceptable.label(),
        band.acceptable,
        QualityStatus::NeedsImprovement.symbol(),
        QualityStatus::NeedsImprovement.label(),
        band.acceptable
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
