use std::collections::BTreeMap;

use super::*;
use crate::report::MetricStats;

fn summary() -> ResultsSummary {
    let mut metrics = BTreeMap::new();
    metrics.insert(
        "response_length.response_length_score".to_string(),
        MetricStats {
            mean: 4.25,
            std: 0.5,
            min: 3.5,
            max: 5.0,
            count: 4,
        },
    );
    metrics.insert(
        "citation_count.citation_score".to_string(),
        MetricStats {
            mean: 1.5,
            std: 1.0,
            min: 0.0,
            max: 3.0,
            count: 4,
        },
    );
    ResultsSummary {
        row_count: Some(4),
        metrics,
        unrated: Default::default(),
    }
}

#[test]
fn test_markdown_tables_sorted_and_flagged() {
    let md = render_markdown(&summary(), &QualityThresholds::default_v1());
    assert!(md.contains("**Total Queries Evaluated**: 4"));
    assert!(
        md.contains("| citation_count.citation_score | 1.500 | 1.000 | 0.000 | 3.000 |")
    );
    assert!(md.contains("| response_length.response_length_score | 4.250 | ✅ |"));
    assert!(md.contains("| citation_count.citation_score | 1.500 | ❌ |"));
    let citation = md.find("| citation_count").unwrap();
    let length = md.find("| response_length").unwrap();
    assert!(citation < length);
    assert!(md.contains("**Legend**: ✅ Excellent (≥4.0) | ⚠️ Acceptable (≥3.0)"));
}

#[test]
fn test_analysis_lists_status() {
    let text = render_analysis(&summary(), &QualityThresholds::default_v1());
    assert!(text.contains("Total Queries Evaluated: 4"));
    assert!(text.lines().any(|l| {
        l.starts_with("response_length.response_length_score")
            && l.contains("4.250")
            && l.contains('✅')
    }));
}

#[test]
fn test_run_summary_table() {
    let text = render_run_summary(&summary(), "out");
    assert!(text.contains("Metric"));
    assert!(text.lines().any(|l| {
        l.starts_with("citation_count.citation_score") && l.contains("1.500") && l.contains("1.000")
    }));
    assert!(text.ends_with("Results saved to: out\n"));
}

#[test]
fn test_without_row_count() {
    let mut s = summary();
    s.row_count = None;
    let md = render_markdown(&s, &QualityThresholds::default_v1());
    assert!(!md.contains("Total Queries"));
}
