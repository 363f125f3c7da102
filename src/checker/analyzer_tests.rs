use super::*;
use crate::baseline::Rating;
use crate::checker::{DEFAULT_ABSENT_EXPLANATION, RatingSummary};
use crate::error::DocumentSource;

const BASELINE: &str = r#"{
    "headers": [
        {
            "name": "X-Frame-Options",
            "description": "Controls framing.",
            "validation_pattern": ".+",
            "rating_patterns": [{"pattern": "^DENY$|^SAMEORIGIN$", "rating": "good"}],
            "explanation_patterns": [
                {"pattern": "ALLOW-FROM (.*)", "present": "Allows \\1."}
            ],
            "absent_explanation": "No framing protection.",
            "final_explanation": "See also CSP frame-ancestors.",
            "references": ["https://example.org/xfo"]
        },
        {
            "name": "Server",
            "validation_pattern": ".*",
            "default_rating": "medium",
            "absent_rating": "good",
            "absent_or_invalid_explanation": "Nothing disclosed."
        },
        {
            "name": "Strict-Transport-Security",
            "validation_pattern": "max-age=\\d+",
            "invalid_explanation": "Broken max-age.",
            "references": ["https://example.org/hsts"]
        }
    ]
}"#;

fn baseline() -> Baseline {
    Baseline::from_json_str(BASELINE, DocumentSource::BuiltIn, true).unwrap()
}

#[test]
fn findings_follow_baseline_order_and_ignore_unknown_headers() {
    let observed: ObservedHeaders = [
        ("Strict-Transport-Security", "max-age=300"),
        ("X-Unrelated", "1"),
        ("server", "nginx"),
    ]
    .into_iter()
    .collect();

    let findings = analyze(&observed, &baseline(), false);
    let headers: Vec<_> = findings.iter().map(|f| f.header.as_str()).collect();
    assert_eq!(
        headers,
        vec!["X-Frame-Options", "Server", "Strict-Transport-Security"]
    );
}

#[test]
fn absent_header_uses_absent_path() {
    let findings = analyze(&ObservedHeaders::new(), &baseline(), false);

    let xfo = &findings[0];
    assert_eq!(xfo.value, ObservedValue::Absent);
    assert_eq!(xfo.rating, Rating::Bad);
    assert_eq!(
        xfo.explanations,
        vec![
            "Controls framing.",
            "No framing protection.",
            "See also CSP frame-ancestors.",
        ]
    );
    assert_eq!(xfo.references, vec!["https://example.org/xfo"]);

    let server = &findings[1];
    assert_eq!(server.rating, Rating::Good);
    assert_eq!(
        server.explanations,
        vec![DEFAULT_ABSENT_EXPLANATION, "Nothing disclosed."]
    );
}

#[test]
fn present_header_is_evaluated() {
    let observed: ObservedHeaders = [("x-frame-options", "ALLOW-FROM evil.example")]
        .into_iter()
        .collect();
    let findings = analyze(&observed, &baseline(), false);

    let xfo = &findings[0];
    assert_eq!(
        xfo.value,
        ObservedValue::Present("ALLOW-FROM evil.example".to_string())
    );
    assert_eq!(xfo.rating, Rating::Bad);
    assert_eq!(
        xfo.explanations,
        vec![
            "Controls framing.",
            "Allows evil.example.",
            "See also CSP frame-ancestors.",
        ]
    );
}

#[test]
fn good_value_is_rated_good() {
    let observed: ObservedHeaders = [("X-Frame-Options", "SAMEORIGIN")].into_iter().collect();
    let findings = analyze(&observed, &baseline(), true);
    assert_eq!(findings[0].rating, Rating::Good);
}

#[test]
fn invalid_value_uses_invalid_explanation() {
    let observed: ObservedHeaders = [("Strict-Transport-Security", "max-age=potato")]
        .into_iter()
        .collect();
    let findings = analyze(&observed, &baseline(), true);

    let hsts = &findings[2];
    assert_eq!(hsts.rating, Rating::Bad);
    assert_eq!(hsts.explanations, vec!["Broken max-age."]);
}

#[test]
fn empty_value_is_not_absent() {
    let observed: ObservedHeaders = [("Server", "")].into_iter().collect();
    let findings = analyze(&observed, &baseline(), true);

    let server = &findings[1];
    assert_eq!(server.value, ObservedValue::Present(String::new()));
    assert_eq!(server.rating, Rating::Medium);
}

#[test]
fn short_mode_drops_descriptions_and_references() {
    let findings = analyze(&ObservedHeaders::new(), &baseline(), true);

    for finding in &findings {
        assert!(finding.references.is_empty());
        assert!(!finding.explanations.iter().any(|e| e == "Controls framing."));
    }
    assert_eq!(
        findings[0].explanations,
        vec!["No framing protection.", "See also CSP frame-ancestors."]
    );
}

#[test]
fn analyze_is_idempotent() {
    let observed: ObservedHeaders = [
        ("X-Frame-Options", "DENY"),
        ("Server", "Apache/2.4.1"),
    ]
    .into_iter()
    .collect();
    let baseline = baseline();

    let first = analyze(&observed, &baseline, false);
    let second = analyze(&observed, &baseline, false);
    assert_eq!(first, second);
}

#[test]
fn builtin_baseline_rates_sample_values() {
    let baseline = Baseline::builtin(true).unwrap();
    let cases = [
        ("Strict-Transport-Security", "max-age=31536000; includeSubDomains", Rating::Good),
        ("Strict-Transport-Security", "max-age=212; includeSubDomains; preload", Rating::Medium),
        ("Strict-Transport-Security", "max-age=0", Rating::Bad),
        ("Strict-Transport-Security", "max-age=potato; includeSubDomains", Rating::Bad),
        ("X-Frame-Options", "DENY", Rating::Good),
        ("X-Frame-Options", "SAMEORIGIN", Rating::Good),
        ("X-Frame-Options", "ALLOW-FROM china", Rating::Bad),
        ("X-Content-Type-Options", "nosniff", Rating::Good),
    ];

    for (name, value, expected) in cases {
        let rule = baseline.find_rule(name).unwrap();
        let finding = analyze_rule(rule, ObservedValue::Present(value.to_string()), true);
        assert_eq!(finding.rating, expected, "{name}: {value}");
    }
}

#[test]
fn builtin_baseline_invalid_value_gets_malformed_text() {
    let baseline = Baseline::builtin(true).unwrap();
    let rule = baseline.find_rule("X-Frame-Options").unwrap();
    let finding = analyze_rule(rule, ObservedValue::Present("DENIS".to_string()), true);

    assert_eq!(finding.rating, Rating::Bad);
    assert!(!finding.explanations.is_empty());
}

#[test]
fn summary_counts_ratings() {
    let observed: ObservedHeaders = [("X-Frame-Options", "DENY")].into_iter().collect();
    let findings = analyze(&observed, &baseline(), true);
    let summary = RatingSummary::from_findings(&findings);

    assert_eq!(summary.total, 3);
    assert_eq!(summary.good, 2);
    assert_eq!(summary.bad, 1);
    assert!(summary.has_bad());
}
