//! Error handling for the contraband match engine.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{DomainError, TransferFailureReason, ValidationKind};
pub use error_code::ErrorCode;

/// Shorthand for the engine's universal result type.
pub type DomainResult<T> = Result<T, DomainError>;
