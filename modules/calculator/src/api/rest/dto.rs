//! REST DTOs for the calculator module.
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::display::format_result;

/// Request body for binary operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BinaryOperationRequest {
    /// First operand
    pub a: f64,
    /// Second operand
    pub b: f64,
}

/// Request body for unary operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnaryOperationRequest {
    /// The operand
    pub a: f64,
}

/// Query parameters for GET operation requests.
///
/// Kept as raw strings so the validation layer can classify missing,
/// unparseable, and non-finite values separately.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationParams {
    pub a: Option<String>,
    pub b: Option<String>,
}

/// Successful operation response.
///
/// `result` is a JSON number for every finite value. JSON has no encoding
/// for infinities or NaN, so non-finite results (reachable through `power`
/// overflow, for example) are carried as their display strings: `"Infinity"`,
/// `"-Infinity"`, `"NaN"`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OperationResponse {
    /// The computed value
    #[serde(serialize_with = "serialize_result")]
    #[schema(value_type = f64)]
    pub result: f64,
}

fn serialize_result<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format_result(*value))
    }
}

/// Failure response: a single human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}
