//! Error mapping for the REST boundary.
//!
//! Exactly two failure kinds cross this boundary: malformed input (a field
//! is missing, non-numeric, or non-finite) and domain rejections (zero
//! divisor, negative square root, ...). Both surface as
//! `{"error": "<message>"}` with a client-error status; all failures are
//! caused by invalid input, so a 5xx is never produced here and no internal
//! detail leaks to the caller.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use tracing::warn;

use crate::api::rest::dto::ErrorResponse;
use crate::domain::error::DomainError;
use crate::domain::validation::Finding;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required numeric field is missing, non-numeric, or non-finite.
    #[error("{0}")]
    MalformedInput(String),

    /// A numerically valid input the operation cannot evaluate.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// Collapse validation findings into a single malformed-input rejection.
    /// Messages keep field order and are joined with "; ".
    pub fn from_findings(findings: &[Finding]) -> Self {
        let joined = findings
            .iter()
            .filter(|f| f.is_blocking())
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        debug_assert!(
            !joined.is_empty(),
            "from_findings requires at least one blocking finding"
        );
        Self::MalformedInput(joined)
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Self::Domain(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Body binding failures (invalid JSON, wrong field types) are malformed
/// input like any other: the rejection text becomes the `error` message.
impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        Self::MalformedInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "rejecting calculator request");
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
