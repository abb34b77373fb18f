//! Binary buffer utilities for schem-pack.
//!
//! # Overview
//!
//! - [`Reader`] - reads binary data from a byte slice with cursor tracking
//! - [`Writer`] - writes binary data to an auto-growing buffer
//!
//! Every read is fallible: container decoding must surface short input as an
//! error, so the reader returns [`BufferError`] instead of panicking on
//! out-of-bounds access.
//!
//! # Example
//!
//! ```
//! use schem_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.buf(b"hello");
//! let data = writer.flush();
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8(), Ok(0x01));
//! assert_eq!(reader.buf(5), Ok(&b"hello"[..]));
//! assert!(reader.is_empty());
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer")]
    EndOfBuffer,
    /// Invalid UTF-8 sequence.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
}
