//! Domain layer for the calculator module.
//!
//! Pure, synchronous, side-effect-free (aside from diagnostic logging):
//! every function here is a deterministic mapping from its inputs to a value
//! or a rejection. No shared mutable state exists across calls.

pub mod display;
pub mod error;
pub mod ops;
pub mod session;
pub mod validation;

pub use error::DomainError;
pub use ops::{BinaryOp, UnaryOp};
