//! The schematic container: data model, layouts, encoder and decoder.

mod decoder;
mod encoder;
mod layout;
mod types;

pub use decoder::SchematicDecoder;
pub use encoder::SchematicEncoder;
pub use layout::{
    full_schema, lean_schema, FILE_EXTENSION, RESERVED_TRAILER, VERSION_MARKER,
};
pub use types::{BlockPos, Chunk, Schematic};

use crate::error::SchemError;

/// Encodes a [`Schematic`] into a full-layout container.
pub fn encode(schematic: &Schematic) -> Result<Vec<u8>, SchemError> {
    SchematicEncoder::new().encode(schematic)
}

/// Decodes a full-layout container into its lean projection.
pub fn decode(buf: &[u8]) -> Result<Schematic, SchemError> {
    SchematicDecoder::new()?.resolve_and_decode(buf)
}
