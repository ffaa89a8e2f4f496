//! Calculator module: arithmetic evaluation core and REST surface.
//!
//! ## Layering
//!
//! - `domain` - pure evaluation core: the ten operations, the string-input
//!   validation layer, result display formatting, and the client session
//!   model. No transport concerns.
//! - `api::rest` - axum handlers, DTOs, and error mapping over the domain.
//!
//! The domain layer is deliberately free of HTTP types so the same rules can
//! back both the serving boundary and an interactive client; the REST surface
//! stays authoritative and re-validates everything.

pub mod api;
pub mod domain;

pub use domain::error::DomainError;
pub use domain::ops::{BinaryOp, UnaryOp};
