//! Pre-flight validation of raw string-form inputs.
//!
//! Classifies a candidate input pair/singleton before the operation set is
//! invoked. The same rules run on two boundaries: the REST GET path (query
//! parameters arrive as text) and the interactive client (form fields). The
//! evaluator in [`crate::domain::ops`] remains the single source of truth
//! and re-checks every domain condition.

use crate::domain::error::DomainError;
use crate::domain::ops::{BinaryOp, UnaryOp};

/// Which request field a finding refers to.
///
/// Findings are reported in field order: `a` before `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    A,
    B,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

/// Severity of a validation finding.
///
/// `Error` findings block submission; `Advisory` findings are soft warnings
/// shown to the user only (the authoritative evaluator does not mirror them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Advisory,
}

/// One validation finding: the offending field plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub field: Field,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn advisory(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            severity: Severity::Advisory,
            message: message.into(),
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// The `power` advisory threshold: |a| > 1000 and |b| > 10 is flagged as
/// likely to overflow the displayable range.
const POWER_ADVISORY_BASE: f64 = 1000.0;
const POWER_ADVISORY_EXPONENT: f64 = 10.0;

/// Parse one raw field into a finite f64.
///
/// Rejections, in order of precedence: empty/whitespace-only ("required"),
/// unparseable ("valid number"), parses but non-finite ("finite number").
pub fn parse_field(field: Field, raw: &str) -> Result<f64, Finding> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Finding::error(
            field,
            format!("{} is required", field.name()),
        ));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(Finding::error(
            field,
            format!("{} must be a finite number", field.name()),
        )),
        Err(_) => Err(Finding::error(
            field,
            format!("{} must be a valid number", field.name()),
        )),
    }
}

/// Parse a raw input pair, or report every field that failed (in field
/// order). This is the authoritative check the serving boundary runs on
/// query-parameter input.
pub fn parse_binary_fields(a_raw: &str, b_raw: &str) -> Result<(f64, f64), Vec<Finding>> {
    let mut findings = Vec::new();
    let a = collect(parse_field(Field::A, a_raw), &mut findings);
    let b = collect(parse_field(Field::B, b_raw), &mut findings);
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(findings),
    }
}

/// Parse a raw input singleton, or report the failure.
pub fn parse_unary_field(a_raw: &str) -> Result<f64, Vec<Finding>> {
    let mut findings = Vec::new();
    match collect(parse_field(Field::A, a_raw), &mut findings) {
        Some(a) => Ok(a),
        None => Err(findings),
    }
}

/// Validate a raw input pair against a binary operation.
///
/// Returns zero or more findings, `a` before `b`, field-level checks before
/// operation-specific ones. Operation-specific checks only fire for fields
/// that already parsed.
pub fn validate_binary(op: BinaryOp, a_raw: &str, b_raw: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    let a = collect(parse_field(Field::A, a_raw), &mut findings);
    let b = collect(parse_field(Field::B, b_raw), &mut findings);

    match op {
        BinaryOp::Divide => {
            if b == Some(0.0) {
                findings.push(Finding::error(
                    Field::B,
                    DomainError::DivisionByZero.to_string(),
                ));
            }
        }
        BinaryOp::Root => {
            if b == Some(0.0) {
                findings.push(Finding::error(
                    Field::B,
                    DomainError::ZerothRoot.to_string(),
                ));
            } else if let (Some(a), Some(b)) = (a, b) {
                // Mirrors the evaluator's parity quirk: only an odd integer
                // exponent admits a negative radicand.
                if a < 0.0 && b % 2.0 != 1.0 {
                    findings.push(Finding::error(
                        Field::A,
                        DomainError::EvenRootOfNegative.to_string(),
                    ));
                }
            }
        }
        BinaryOp::Power => {
            if let (Some(a), Some(b)) = (a, b) {
                if a.abs() > POWER_ADVISORY_BASE && b.abs() > POWER_ADVISORY_EXPONENT {
                    findings.push(Finding::advisory(
                        Field::B,
                        "result may be too large to represent",
                    ));
                }
            }
        }
        _ => {}
    }

    findings
}

/// Validate a raw input singleton against a unary operation.
pub fn validate_unary(op: UnaryOp, a_raw: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    let a = collect(parse_field(Field::A, a_raw), &mut findings);

    match op {
        UnaryOp::Sqrt => {
            if a.is_some_and(|a| a < 0.0) {
                findings.push(Finding::error(
                    Field::A,
                    DomainError::NegativeSqrt.to_string(),
                ));
            }
        }
        UnaryOp::Inverse => {
            if a == Some(0.0) {
                findings.push(Finding::error(
                    Field::A,
                    DomainError::InverseOfZero.to_string(),
                ));
            }
        }
        UnaryOp::Negative => {}
    }

    findings
}

fn collect(parsed: Result<f64, Finding>, findings: &mut Vec<Finding>) -> Option<f64> {
    match parsed {
        Ok(value) => Some(value),
        Err(finding) => {
            findings.push(finding);
            None
        }
    }
}
