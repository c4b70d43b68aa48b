//! Cross-cutting error types for aim.
//!
//! Storage-specific errors (`DatabaseError`) live in `aim-db`. A unified error
//! is deferred to `aim-cli` where all crate errors converge through `anyhow`.

use thiserror::Error;

/// Errors raised by the pure aim crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
