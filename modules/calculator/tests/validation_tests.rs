//! Validation-layer tests: the same rules the interactive client applies
//! pre-submit and the serving boundary applies to query parameters.

use calculator::domain::ops::{BinaryOp, UnaryOp};
use calculator::domain::validation::{
    parse_binary_fields, parse_field, parse_unary_field, validate_binary, validate_unary, Field,
    Severity,
};

#[test]
fn empty_and_whitespace_fields_are_required() {
    for raw in ["", " ", "\t  "] {
        let finding = parse_field(Field::A, raw).unwrap_err();
        assert_eq!(finding.message, "a is required");
        assert_eq!(finding.severity, Severity::Error);
    }
}

#[test]
fn unparseable_fields_must_be_valid_numbers() {
    for raw in ["abc", "12x", "--4", "1,5"] {
        let finding = parse_field(Field::B, raw).unwrap_err();
        assert_eq!(finding.message, "b must be a valid number");
    }
}

#[test]
fn non_finite_fields_must_be_finite() {
    for raw in ["inf", "-inf", "Infinity", "NaN", "1e999"] {
        let finding = parse_field(Field::A, raw).unwrap_err();
        assert_eq!(finding.message, "a must be a finite number", "input {raw:?}");
    }
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(parse_field(Field::A, " -2.5 ").unwrap(), -2.5);
    assert_eq!(parse_field(Field::B, "1e3").unwrap(), 1000.0);
}

#[test]
fn pair_parsing_reports_all_failures_in_field_order() {
    let findings = parse_binary_fields("", "nope").unwrap_err();
    let messages: Vec<&str> = findings.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(messages, ["a is required", "b must be a valid number"]);

    assert_eq!(parse_binary_fields("2", "3").unwrap(), (2.0, 3.0));
    assert_eq!(parse_unary_field("4").unwrap(), 4.0);
    assert!(parse_unary_field("").is_err());
}

#[test]
fn divide_by_zero_is_caught_eagerly() {
    let findings = validate_binary(BinaryOp::Divide, "10", "0");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].field, Field::B);
    assert_eq!(findings[0].message, "cannot divide by zero");

    assert!(validate_binary(BinaryOp::Divide, "10", "2").is_empty());
}

#[test]
fn root_checks_mirror_the_evaluator() {
    let findings = validate_binary(BinaryOp::Root, "16", "0");
    assert_eq!(findings[0].message, "cannot calculate 0th root");

    let findings = validate_binary(BinaryOp::Root, "-16", "2");
    assert_eq!(
        findings[0].message,
        "cannot calculate even root of negative number"
    );

    // The parity quirk applies here too: 2.5 routes to the even-root error.
    let findings = validate_binary(BinaryOp::Root, "-8", "2.5");
    assert_eq!(
        findings[0].message,
        "cannot calculate even root of negative number"
    );

    assert!(validate_binary(BinaryOp::Root, "-27", "3").is_empty());
}

#[test]
fn unary_checks_mirror_the_evaluator() {
    let findings = validate_unary(UnaryOp::Sqrt, "-4");
    assert_eq!(
        findings[0].message,
        "cannot calculate square root of negative number"
    );

    let findings = validate_unary(UnaryOp::Inverse, "0");
    assert_eq!(findings[0].message, "cannot calculate inverse of zero");

    assert!(validate_unary(UnaryOp::Sqrt, "4").is_empty());
    assert!(validate_unary(UnaryOp::Negative, "-4").is_empty());
}

#[test]
fn operation_checks_wait_for_parsed_fields() {
    // An unparseable divisor yields only the field-level finding; the
    // divide-by-zero check needs a parsed value.
    let findings = validate_binary(BinaryOp::Divide, "10", "zero");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "b must be a valid number");
}

#[test]
fn power_advisory_fires_only_past_both_thresholds() {
    assert!(validate_binary(BinaryOp::Power, "1000", "11").is_empty());
    assert!(validate_binary(BinaryOp::Power, "1001", "10").is_empty());

    let findings = validate_binary(BinaryOp::Power, "1001", "11");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Advisory);
    assert!(!findings[0].is_blocking());

    // Magnitudes count, not signs.
    let findings = validate_binary(BinaryOp::Power, "-1001", "-11");
    assert_eq!(findings.len(), 1);
}
