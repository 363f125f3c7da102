use serde_json::Value;

use super::*;
use crate::baseline::Rating;

fn sample_findings() -> Vec<Finding> {
    vec![
        Finding {
            header: "X-Frame-Options".to_string(),
            value: ObservedValue::Present("DENY".to_string()),
            rating: Rating::Good,
            explanations: vec!["Frames are denied.".to_string()],
            references: vec!["https://example.org/xfo".to_string()],
        },
        Finding {
            header: "Strict-Transport-Security".to_string(),
            value: ObservedValue::Absent,
            rating: Rating::Bad,
            explanations: vec!["The header is absent.".to_string()],
            references: Vec::new(),
        },
    ]
}

#[test]
fn json_output_is_valid() {
    let output = JsonFormatter.format(&sample_findings()).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total"], 2);
    assert_eq!(parsed["summary"]["good"], 1);
    assert_eq!(parsed["summary"]["medium"], 0);
    assert_eq!(parsed["summary"]["bad"], 1);
}

#[test]
fn json_findings_fields() {
    let output = JsonFormatter.format(&sample_findings()).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();

    let first = &parsed["findings"][0];
    assert_eq!(first["header"], "X-Frame-Options");
    assert_eq!(first["value"], "DENY");
    assert_eq!(first["rating"], "good");
    assert_eq!(first["explanations"][0], "Frames are denied.");
    assert_eq!(first["references"][0], "https://example.org/xfo");
}

#[test]
fn absent_value_is_null() {
    let output = JsonFormatter.format(&sample_findings()).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();

    assert!(parsed["findings"][1]["value"].is_null());
    assert_eq!(parsed["findings"][1]["references"], Value::Array(Vec::new()));
}

#[test]
fn empty_value_is_empty_string() {
    let findings = vec![Finding {
        header: "Server".to_string(),
        value: ObservedValue::Present(String::new()),
        rating: Rating::Medium,
        explanations: Vec::new(),
        references: Vec::new(),
    }];
    let output = JsonFormatter.format(&findings).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["findings"][0]["value"], "");
}

#[test]
fn to_value_matches_formatted_output() {
    let findings = sample_findings();
    let value = JsonFormatter.to_value(&findings).unwrap();
    let parsed: Value = serde_json::from_str(&JsonFormatter.format(&findings).unwrap()).unwrap();
    assert_eq!(value, parsed);
}
