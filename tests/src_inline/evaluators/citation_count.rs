use rstest::rstest;

use super::*;

fn evaluator(min_citations: u64) -> CitationCountEvaluator {
    CitationCountEvaluator::new(CitationThresholds { min_citations }).unwrap()
}

#[test]
fn test_mixed_citation_forms() {
    let record = evaluator(1).score("See Document 1 and [2] for details (Source 3)");
    assert_eq!(record.get_u64(COUNT), Some(3));
    assert_eq!(record.get_bool(SUFFICIENT), Some(true));
    assert_eq!(record.get_f64(SCORE), Some(4.0));
}

#[test]
fn test_no_citations() {
    let record = evaluator(1).score("No sources were consulted for this answer.");
    assert_eq!(record.get_u64(COUNT), Some(0));
    assert_eq!(record.get_bool(SUFFICIENT), Some(false));
    assert_eq!(record.get_f64(SCORE), Some(0.0));
}

#[test]
fn test_empty_response() {
    let record = evaluator(1).score("");
    assert_eq!(record.get_u64(COUNT), Some(0));
    assert_eq!(record.get_f64(SCORE), Some(0.0));
}

#[test]
fn test_parenthesised_document_counts_twice() {
    assert_eq!(count_citations("(Document 4)"), 2);
    assert_eq!(count_citations("as shown in (Document 4) and Document 5"), 3);
}

#[rstest]
#[case::bracket("[12]", 1)]
#[case::bracket_letters("[a]", 0)]
#[case::empty_bracket("[]", 0)]
#[case::no_space("Document1", 0)]
#[case::multiple_spaces("Document   7", 1)]
#[case::newline_separator("Document\n7", 1)]
#[case::lowercase("document 1", 0)]
#[case::source_without_parens("Source 2", 0)]
#[case::source_with_parens("(Source 2)", 1)]
#[case::adjacent_brackets("[1][2][3]", 3)]
fn test_pattern_matching(#[case] text: &str, #[case] expected: u64) {
    assert_eq!(count_citations(text), expected);
}

#[rstest]
#[case::zero(0, 1, 0.0)]
#[case::below_min(2, 4, 1.5)]
#[case::one_of_three(1, 3, 1.0)]
#[case::rounded(1, 7, 0.43)]
#[case::tie_rounds_to_even(1, 24, 0.12)]
#[case::at_min(3, 3, 3.0)]
#[case::above_min(3, 1, 4.0)]
#[case::capped(10, 1, 5.0)]
fn test_score_table(#[case] count: u64, #[case] min: u64, #[case] expected: f64) {
    let text = "[1] ".repeat(count as usize);
    let record = evaluator(min).score(&text);
    assert_eq!(record.get_u64(COUNT), Some(count));
    assert_eq!(record.get_f64(SCORE), Some(expected));
    assert_eq!(record.get_bool(SUFFICIENT), Some(count >= min));
}

#[test]
fn test_score_always_in_range() {
    for min in 1..6 {
        for count in 0..30 {
            let s = citation_score(count, min);
            assert!((0.0..=5.0).contains(&s), "count={count} min={min} -> {s}");
        }
    }
}

#[test]
fn test_idempotent() {
    let eval = evaluator(2);
    let text = "Per [1] and (Source 2), see Document 3.";
    assert_eq!(eval.score(text), eval.score(text));
}

#[test]
fn test_rejects_zero_min_citations() {
    let err = CitationCountEvaluator::new(CitationThresholds { min_citations: 0 }).unwrap_err();
    assert!(matches!(err, EvalError::InvalidConfiguration(_)));
}
