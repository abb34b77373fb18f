//! Generic positional record encoding and decoding over a
//! [`RecordSchema`](crate::schema::RecordSchema).

mod decoder;
mod encoder;

pub use decoder::RecordDecoder;
pub use encoder::RecordEncoder;
