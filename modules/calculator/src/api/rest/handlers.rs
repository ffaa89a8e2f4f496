//! Axum handlers for the calculator REST surface.
//!
//! Each operation is exposed twice, mirroring the route table: POST with a
//! JSON body of already-numeric fields, and GET with raw query-parameter
//! strings that run through the validation layer before evaluation. The
//! handlers stay thin; everything interesting happens in `domain::ops`.

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::JsonRejection;
use tracing::info;

use crate::api::rest::dto::{
    BinaryOperationRequest, ErrorResponse, HealthResponse, OperationParams, OperationResponse,
    UnaryOperationRequest,
};
use crate::api::rest::error::ApiError;
use crate::domain::ops::{BinaryOp, UnaryOp};
use crate::domain::validation::{parse_binary_fields, parse_unary_field};

type OperationResult = Result<Json<OperationResponse>, ApiError>;

fn evaluate_binary(op: BinaryOp, a: f64, b: f64) -> OperationResult {
    info!(operation = op.name(), a, b, "processing binary operation");
    let result = op.evaluate(a, b)?;
    info!(operation = op.name(), a, b, result, "binary operation succeeded");
    Ok(Json(OperationResponse { result }))
}

fn evaluate_unary(op: UnaryOp, a: f64) -> OperationResult {
    info!(operation = op.name(), a, "processing unary operation");
    let result = op.evaluate(a)?;
    info!(operation = op.name(), a, result, "unary operation succeeded");
    Ok(Json(OperationResponse { result }))
}

fn binary_query(op: BinaryOp, params: &OperationParams) -> OperationResult {
    let (a, b) = parse_binary_fields(
        params.a.as_deref().unwrap_or_default(),
        params.b.as_deref().unwrap_or_default(),
    )
    .map_err(|findings| ApiError::from_findings(&findings))?;
    evaluate_binary(op, a, b)
}

fn unary_query(op: UnaryOp, params: &OperationParams) -> OperationResult {
    let a = parse_unary_field(params.a.as_deref().unwrap_or_default())
        .map_err(|findings| ApiError::from_findings(&findings))?;
    evaluate_unary(op, a)
}

/// `GET /health`
#[utoipa::path(get, path = "/health", tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse)))]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(post, path = "/api/v1/add", tag = "calculator",
    request_body = BinaryOperationRequest,
    responses(
        (status = 200, description = "a + b", body = OperationResponse),
        (status = 400, description = "Malformed input", body = ErrorResponse),
    ))]
pub async fn add_post(
    payload: Result<Json<BinaryOperationRequest>, JsonRejection>,
) -> OperationResult {
    let Json(req) = payload?;
    evaluate_binary(BinaryOp::Add, req.a, req.b)
}

#[utoipa::path(get, path = "/api/v1/add", tag = "calculator",
    params(("a" = String, Query, description = "First operand"),
           ("b" = String, Query, description = "Second operand")),
    responses(
        (status = 200, description = "a + b", body = OperationResponse),
        (status = 400, description = "Malformed input", body = ErrorResponse),
    ))]
pub async fn add_get(Query(params): Query<OperationParams>) -> OperationResult {
    binary_query(BinaryOp::Add, &params)
}

#[utoipa::path(post, path = "/api/v1/subtract", tag = "calculator",
    request_body = BinaryOperationRequest,
    responses((status = 200, description = "a - b", body = OperationResponse)))]
pub async fn subtract_post(
    payload: Result<Json<BinaryOperationRequest>, JsonRejection>,
) -> OperationResult {
    let Json(req) = payload?;
    evaluate_binary(BinaryOp::Subtract, req.a, req.b)
}

#[utoipa::path(get, path = "/api/v1/subtract", tag = "calculator",
    params(("a" = String, Query, description = "First operand"),
           ("b" = String, Query, description = "Second operand")),
    responses((status = 200, description = "a - b", body = OperationResponse)))]
pub async fn subtract_get(Query(params): Query<OperationParams>) -> OperationResult {
    binary_query(BinaryOp::Subtract, &params)
}

#[utoipa::path(post, path = "/api/v1/multiply", tag = "calculator",
    request_body = BinaryOperationRequest,
    responses((status = 200, description = "a * b", body = OperationResponse)))]
pub async fn multiply_post(
    payload: Result<Json<BinaryOperationRequest>, JsonRejection>,
) -> OperationResult {
    let Json(req) = payload?;
    evaluate_binary(BinaryOp::Multiply, req.a, req.b)
}

#[utoipa::path(get, path = "/api/v1/multiply", tag = "calculator",
    params(("a" = String, Query, description = "First operand"),
           ("b" = String, Query, description = "Second operand")),
    responses((status = 200, description = "a * b", body = OperationResponse)))]
pub async fn multiply_get(Query(params): Query<OperationParams>) -> OperationResult {
    binary_query(BinaryOp::Multiply, &params)
}

#[utoipa::path(post, path = "/api/v1/divide", tag = "calculator",
    request_body = BinaryOperationRequest,
    responses(
        (status = 200, description = "a / b", body = OperationResponse),
        (status = 422, description = "Division by zero", body = ErrorResponse),
    ))]
pub async fn divide_post(
    payload: Result<Json<BinaryOperationRequest>, JsonRejection>,
) -> OperationResult {
    let Json(req) = payload?;
    evaluate_binary(BinaryOp::Divide, req.a, req.b)
}

#[utoipa::path(get, path = "/api/v1/divide", tag = "calculator",
    params(("a" = String, Query, description = "Dividend"),
           ("b" = String, Query, description = "Divisor")),
    responses(
        (status = 200, description = "a / b", body = OperationResponse),
        (status = 422, description = "Division by zero", body = ErrorResponse),
    ))]
pub async fn divide_get(Query(params): Query<OperationParams>) -> OperationResult {
    binary_query(BinaryOp::Divide, &params)
}

#[utoipa::path(post, path = "/api/v1/percentage", tag = "calculator",
    request_body = BinaryOperationRequest,
    responses((status = 200, description = "b percent of a", body = OperationResponse)))]
pub async fn percentage_post(
    payload: Result<Json<BinaryOperationRequest>, JsonRejection>,
) -> OperationResult {
    let Json(req) = payload?;
    evaluate_binary(BinaryOp::Percentage, req.a, req.b)
}

#[utoipa::path(get, path = "/api/v1/percentage", tag = "calculator",
    params(("a" = String, Query, description = "Base value"),
           ("b" = String, Query, description = "Percentage")),
    responses((status = 200, description = "b percent of a", body = OperationResponse)))]
pub async fn percentage_get(Query(params): Query<OperationParams>) -> OperationResult {
    binary_query(BinaryOp::Percentage, &params)
}

#[utoipa::path(post, path = "/api/v1/power", tag = "calculator",
    request_body = BinaryOperationRequest,
    responses((status = 200, description = "a raised to b", body = OperationResponse)))]
pub async fn power_post(
    payload: Result<Json<BinaryOperationRequest>, JsonRejection>,
) -> OperationResult {
    let Json(req) = payload?;
    evaluate_binary(BinaryOp::Power, req.a, req.b)
}

#[utoipa::path(get, path = "/api/v1/power", tag = "calculator",
    params(("a" = String, Query, description = "Base"),
           ("b" = String, Query, description = "Exponent")),
    responses((status = 200, description = "a raised to b", body = OperationResponse)))]
pub async fn power_get(Query(params): Query<OperationParams>) -> OperationResult {
    binary_query(BinaryOp::Power, &params)
}

#[utoipa::path(post, path = "/api/v1/root", tag = "calculator",
    request_body = BinaryOperationRequest,
    responses(
        (status = 200, description = "b-th root of a", body = OperationResponse),
        (status = 422, description = "Zeroth or even root of a negative", body = ErrorResponse),
    ))]
pub async fn root_post(
    payload: Result<Json<BinaryOperationRequest>, JsonRejection>,
) -> OperationResult {
    let Json(req) = payload?;
    evaluate_binary(BinaryOp::Root, req.a, req.b)
}

#[utoipa::path(get, path = "/api/v1/root", tag = "calculator",
    params(("a" = String, Query, description = "Radicand"),
           ("b" = String, Query, description = "Degree")),
    responses(
        (status = 200, description = "b-th root of a", body = OperationResponse),
        (status = 422, description = "Zeroth or even root of a negative", body = ErrorResponse),
    ))]
pub async fn root_get(Query(params): Query<OperationParams>) -> OperationResult {
    binary_query(BinaryOp::Root, &params)
}

#[utoipa::path(post, path = "/api/v1/sqrt", tag = "calculator",
    request_body = UnaryOperationRequest,
    responses(
        (status = 200, description = "Square root of a", body = OperationResponse),
        (status = 422, description = "Negative radicand", body = ErrorResponse),
    ))]
pub async fn sqrt_post(
    payload: Result<Json<UnaryOperationRequest>, JsonRejection>,
) -> OperationResult {
    let Json(req) = payload?;
    evaluate_unary(UnaryOp::Sqrt, req.a)
}

#[utoipa::path(get, path = "/api/v1/sqrt", tag = "calculator",
    params(("a" = String, Query, description = "Radicand")),
    responses(
        (status = 200, description = "Square root of a", body = OperationResponse),
        (status = 422, description = "Negative radicand", body = ErrorResponse),
    ))]
pub async fn sqrt_get(Query(params): Query<OperationParams>) -> OperationResult {
    unary_query(UnaryOp::Sqrt, &params)
}

#[utoipa::path(post, path = "/api/v1/inverse", tag = "calculator",
    request_body = UnaryOperationRequest,
    responses(
        (status = 200, description = "1 / a", body = OperationResponse),
        (status = 422, description = "Inverse of zero", body = ErrorResponse),
    ))]
pub async fn inverse_post(
    payload: Result<Json<UnaryOperationRequest>, JsonRejection>,
) -> OperationResult {
    let Json(req) = payload?;
    evaluate_unary(UnaryOp::Inverse, req.a)
}

#[utoipa::path(get, path = "/api/v1/inverse", tag = "calculator",
    params(("a" = String, Query, description = "The operand")),
    responses(
        (status = 200, description = "1 / a", body = OperationResponse),
        (status = 422, description = "Inverse of zero", body = ErrorResponse),
    ))]
pub async fn inverse_get(Query(params): Query<OperationParams>) -> OperationResult {
    unary_query(UnaryOp::Inverse, &params)
}

#[utoipa::path(post, path = "/api/v1/negative", tag = "calculator",
    request_body = UnaryOperationRequest,
    responses((status = 200, description = "-a", body = OperationResponse)))]
pub async fn negative_post(
    payload: Result<Json<UnaryOperationRequest>, JsonRejection>,
) -> OperationResult {
    let Json(req) = payload?;
    evaluate_unary(UnaryOp::Negative, req.a)
}

#[utoipa::path(get, path = "/api/v1/negative", tag = "calculator",
    params(("a" = String, Query, description = "The operand")),
    responses((status = 200, description = "-a", body = OperationResponse)))]
pub async fn negative_get(Query(params): Query<OperationParams>) -> OperationResult {
    unary_query(UnaryOp::Negative, &params)
}
