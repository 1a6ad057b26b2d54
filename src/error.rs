// In: src/error.rs

//! This module defines the single, unified error type for the entire artc-lite library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtcError {
    // =========================================================================
    // === Caller-Facing Errors (the two kinds the codec surfaces directly)
    // =========================================================================
    /// Input readings contained a non-finite value or could not be converted.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// An operation was invoked while its precondition did not hold,
    /// e.g. `get_block()` before `block_ready()`.
    #[error("Precondition violated: {0}")]
    PreconditionError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A `Raw` record was decoded with a length that disagrees with its value count.
    #[error("Block length mismatch: expected {expected} readings, record holds {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Block sequence serialization/deserialization failed: {0}")]
    FrameFormatError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g. opening a log file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically during config or series export.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl ArtcError {
    /// True for errors caused by invalid input readings.
    pub fn is_validation(&self) -> bool {
        matches!(self, ArtcError::ValidationError(_))
    }

    /// True for errors caused by calling an operation in the wrong state.
    pub fn is_precondition(&self) -> bool {
        matches!(self, ArtcError::PreconditionError(_))
    }
}
