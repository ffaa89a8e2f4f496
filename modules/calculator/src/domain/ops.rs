//! The numeric operation set.
//!
//! Ten named operations over IEEE-754 f64: seven binary, three unary.
//! There is no overflow detection beyond what IEEE-754 gives; `power` and
//! friends silently saturate to ±infinity.

use tracing::debug;

use crate::domain::error::DomainError;

/// Binary operations (two operands `a`, `b`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percentage,
    Power,
    Root,
}

/// Unary operations (one operand `a`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sqrt,
    Inverse,
    Negative,
}

impl BinaryOp {
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Percentage,
        Self::Power,
        Self::Root,
    ];

    /// Wire/route name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Percentage => "percentage",
            Self::Power => "power",
            Self::Root => "root",
        }
    }

    /// Evaluate the operation on a pair of operands.
    pub fn evaluate(self, a: f64, b: f64) -> Result<f64, DomainError> {
        debug!(operation = self.name(), a, b, "evaluating binary operation");
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Subtract => Ok(subtract(a, b)),
            Self::Multiply => Ok(multiply(a, b)),
            Self::Divide => divide(a, b),
            Self::Percentage => Ok(percentage(a, b)),
            Self::Power => Ok(power(a, b)),
            Self::Root => root(a, b),
        }
    }
}

impl UnaryOp {
    pub const ALL: [Self; 3] = [Self::Sqrt, Self::Inverse, Self::Negative];

    /// Wire/route name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Inverse => "inverse",
            Self::Negative => "negative",
        }
    }

    /// Evaluate the operation on a single operand.
    pub fn evaluate(self, a: f64) -> Result<f64, DomainError> {
        debug!(operation = self.name(), a, "evaluating unary operation");
        match self {
            Self::Sqrt => sqrt(a),
            Self::Inverse => inverse(a),
            Self::Negative => Ok(negative(a)),
        }
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, DomainError> {
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}

/// `b` percent of `a`.
pub fn percentage(a: f64, b: f64) -> f64 {
    a * (b / 100.0)
}

/// `a` raised to `b`. No overflow guard; may yield ±infinity.
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

pub fn sqrt(a: f64) -> Result<f64, DomainError> {
    if a < 0.0 {
        return Err(DomainError::NegativeSqrt);
    }
    Ok(a.sqrt())
}

/// The `b`-th root of `a`.
///
/// For a negative radicand the parity test is `b % 2.0 == 1.0`, which only
/// holds for odd integers: a non-integer exponent such as 2.5 is therefore
/// rejected as an even root. This matches the reference behavior and is
/// pinned by tests; do not "fix" it without an API version bump.
pub fn root(a: f64, b: f64) -> Result<f64, DomainError> {
    if b == 0.0 {
        return Err(DomainError::ZerothRoot);
    }
    if a < 0.0 {
        if b % 2.0 == 1.0 {
            // Odd root of a negative number: root the magnitude, negate.
            return Ok(-((-a).powf(1.0 / b)));
        }
        return Err(DomainError::EvenRootOfNegative);
    }
    Ok(a.powf(1.0 / b))
}

pub fn inverse(a: f64) -> Result<f64, DomainError> {
    if a == 0.0 {
        return Err(DomainError::InverseOfZero);
    }
    Ok(1.0 / a)
}

pub fn negative(a: f64) -> f64 {
    -a
}
