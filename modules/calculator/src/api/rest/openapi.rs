//! OpenAPI document for the calculator REST surface.

use axum::Json;
use utoipa::OpenApi;

use super::dto;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "Ten arithmetic operations over POST (JSON body) and GET (query parameters)",
        version = "1.0.0",
    ),
    paths(
        handlers::health,
        handlers::add_post,
        handlers::add_get,
        handlers::subtract_post,
        handlers::subtract_get,
        handlers::multiply_post,
        handlers::multiply_get,
        handlers::divide_post,
        handlers::divide_get,
        handlers::percentage_post,
        handlers::percentage_get,
        handlers::power_post,
        handlers::power_get,
        handlers::root_post,
        handlers::root_get,
        handlers::sqrt_post,
        handlers::sqrt_get,
        handlers::inverse_post,
        handlers::inverse_get,
        handlers::negative_post,
        handlers::negative_get,
    ),
    components(schemas(
        dto::BinaryOperationRequest,
        dto::UnaryOperationRequest,
        dto::OperationResponse,
        dto::ErrorResponse,
        dto::HealthResponse,
    )),
    tags(
        (name = "calculator", description = "Arithmetic operations"),
        (name = "system", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// `GET /openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
