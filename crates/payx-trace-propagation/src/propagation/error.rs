//! Error type for trace context extraction.
//!
//! Extraction errors are non-fatal: a malformed trace id aborts extraction of
//! the span identity but the caller still receives a usable, unmodified
//! context. Injection and span-start never produce errors; absence of a
//! header is a pass-through condition, not an error.

use thiserror::Error;

/// Error raised while decoding a propagation header.
///
/// Carries the failing header field and the operation for log context.
///
/// Display format: `cannot extract `x-payx-txid`: trace id is not valid hex`
#[derive(Error, Debug, Copy, Clone)]
#[error("cannot {} `{}`: {}", operation, field, message)]
pub struct Error {
    /// Description of what went wrong.
    message: &'static str,
    /// The wire header field that failed to decode.
    field: &'static str,
    /// Operation that failed (currently always `"extract"`).
    operation: &'static str,
}

impl Error {
    /// Creates an extraction error for the given header field.
    #[must_use]
    pub fn extract(message: &'static str, field: &'static str) -> Self {
        Self {
            message,
            field,
            operation: "extract",
        }
    }
}
