//! Route registration for the calculator module.

use axum::Router;
use axum::routing::get;

use super::handlers;
use super::openapi;

/// Build the calculator router: every operation under `/api/v1/{op}` over
/// both GET (query parameters) and POST (JSON body), plus health and the
/// OpenAPI document.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(openapi::openapi_json))
        .route(
            "/api/v1/add",
            get(handlers::add_get).post(handlers::add_post),
        )
        .route(
            "/api/v1/subtract",
            get(handlers::subtract_get).post(handlers::subtract_post),
        )
        .route(
            "/api/v1/multiply",
            get(handlers::multiply_get).post(handlers::multiply_post),
        )
        .route(
            "/api/v1/divide",
            get(handlers::divide_get).post(handlers::divide_post),
        )
        .route(
            "/api/v1/percentage",
            get(handlers::percentage_get).post(handlers::percentage_post),
        )
        .route(
            "/api/v1/power",
            get(handlers::power_get).post(handlers::power_post),
        )
        .route(
            "/api/v1/sqrt",
            get(handlers::sqrt_get).post(handlers::sqrt_post),
        )
        .route(
            "/api/v1/root",
            get(handlers::root_get).post(handlers::root_post),
        )
        .route(
            "/api/v1/inverse",
            get(handlers::inverse_get).post(handlers::inverse_post),
        )
        .route(
            "/api/v1/negative",
            get(handlers::negative_get).post(handlers::negative_post),
        )
}
