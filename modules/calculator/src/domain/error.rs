use thiserror::Error;

/// A mathematically undefined or disallowed input combination for an
/// otherwise well-formed numeric request.
///
/// The message text is part of the API contract: the transport layer
/// surfaces it verbatim under the `error` key, so these strings must not
/// change without versioning the API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("cannot calculate square root of negative number")]
    NegativeSqrt,

    #[error("cannot calculate 0th root")]
    ZerothRoot,

    #[error("cannot calculate even root of negative number")]
    EvenRootOfNegative,

    #[error("cannot calculate inverse of zero")]
    InverseOfZero,
}
