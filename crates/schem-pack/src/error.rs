//! Container codec error type.

use schem_buffers::BufferError;
use thiserror::Error;

/// Error type for container encoding and decoding operations.
///
/// Every failure is terminal for the call that raised it: no partial or
/// recovered result is produced, and retrying the same input cannot succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemError {
    /// The buffer ended before a required field or varint was fully
    /// readable.
    #[error("unexpected end of input")]
    TruncatedInput,
    /// A length or count prefix is negative or overruns the remaining
    /// buffer, a varint cannot terminate, or a text field holds invalid
    /// UTF-8.
    #[error("malformed stream: {0}")]
    MalformedStream(&'static str),
    /// The lean layout is not a field-order prefix of the full layout.
    /// Raised when the layouts are bound, before any decode attempt.
    #[error("lean layout is not a prefix of the full layout: {0}")]
    SchemaMismatch(String),
    /// A value handed to the encoder does not match its schema slot.
    #[error("value does not match schema for `{0}`")]
    ValueMismatch(&'static str),
}

impl From<BufferError> for SchemError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => SchemError::TruncatedInput,
            BufferError::InvalidUtf8 => SchemError::MalformedStream("invalid UTF-8 in text field"),
        }
    }
}
