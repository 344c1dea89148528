use super::*;

#[test]
fn test_round2() {
    assert_eq!(round2(1.5), 1.5);
    assert_eq!(round2(0.428571), 0.43);
    assert_eq!(round2(2.0 / 3.0), 0.67);
    assert_eq!(round2(0.0), 0.0);
}

#[test]
fn test_round2_ties_follow_exact_binary_value() {
    assert_eq!(round2(0.125), 0.12);
    assert_eq!(round2(0.375), 0.38);
    assert_eq!(round2(3.0 / 24.0), 0.12);
    assert_eq!(round2(2.675), 2.67);
}

#[test]
fn test_metric_value_into_json() {
    assert_eq!(Value::from(MetricValue::Int(3)), serde_json::json!(3));
    assert_eq!(Value::from(MetricValue::Float(4.5)), serde_json::json!(4.5));
    assert_eq!(Value::from(MetricValue::Bool(true)), Value::Bool(true));
}

#[test]
fn test_numeric_view() {
    assert_eq!(MetricValue::Bool(true).as_f64(), 1.0);
    assert_eq!(MetricValue::Bool(false).as_f64(), 0.0);
    assert_eq!(MetricValue::Int(7).as_f64(), 7.0);
    assert_eq!(MetricValue::Float(2.5).as_f64(), 2.5);
}

#[test]
fn test_record_serializes_flat() {
    let mut record = ScoreRecord::new();
    record.insert("citation_count", 3u64);
    record.insert("has_sufficient_citations", true);
    record.insert("citation_score", 4.0);
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r#"{"citation_count":3,"citation_score":4.0,"has_sufficient_citations":true}"#
    );
}

#[test]
fn test_record_deserializes_scalar_kinds() {
    let record: ScoreRecord = serde_json::from_str(r#"{"a":3,"b":1.25,"c":false}"#).unwrap();
    assert_eq!(record.get_u64("a"), Some(3));
    assert_eq!(record.get_f64("b"), Some(1.25));
    assert_eq!(record.get_bool("c"), Some(false));
    assert_eq!(record.get_f64("a"), None);
}
