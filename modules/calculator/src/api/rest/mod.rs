//! REST surface over the calculator domain.
//!
//! ## Layering
//!
//! - `dto` - request/response types (serde + utoipa)
//! - `error` - the two-kind failure taxonomy mapped to client-error statuses
//! - `handlers` - thin axum handlers delegating to `domain::ops`
//! - `routes` - route table (each operation over both POST and GET)
//! - `openapi` - the generated OpenAPI document

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;

pub use error::ApiError;
pub use routes::router;
