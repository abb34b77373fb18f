//! Schematic container encoder.
//!
//! There is no lean encode: the consumer requires the complete,
//! version-marked container, so encoding always targets the full layout and
//! emits every compatibility field from its default.

use crate::block_stream;
use crate::error::SchemError;
use crate::record::RecordEncoder;
use crate::schema::RecordSchema;
use crate::value::SchemaValue;

use super::layout::{full_schema, VERSION_MARKER};
use super::types::{Chunk, Schematic};

/// Encodes schematics into full-layout containers.
pub struct SchematicEncoder {
    schema: RecordSchema,
    record: RecordEncoder,
}

impl Default for SchematicEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchematicEncoder {
    pub fn new() -> Self {
        Self {
            schema: full_schema(),
            record: RecordEncoder::new(),
        }
    }

    /// Encodes one schematic into an owned byte buffer.
    ///
    /// Each chunk's flat id sequence is run-length-compressed. Sequence
    /// lengths are not checked against chunk volumes: a wrong length
    /// still encodes to a structurally valid container, it just will not
    /// mean anything to the consumer. Callers validate volumes up front.
    pub fn encode(&mut self, schematic: &Schematic) -> Result<Vec<u8>, SchemError> {
        let values = [
            SchemaValue::Fixed(VERSION_MARKER.to_vec()),
            SchemaValue::Str(schematic.name.clone()),
            SchemaValue::Int(schematic.origin.0),
            SchemaValue::Int(schematic.origin.1),
            SchemaValue::Int(schematic.origin.2),
            SchemaValue::Int(schematic.size.0),
            SchemaValue::Int(schematic.size.1),
            SchemaValue::Int(schematic.size.2),
            SchemaValue::Array(schematic.chunks.iter().map(chunk_value).collect()),
        ];
        self.record.encode(&self.schema, &values)
    }
}

fn chunk_value(chunk: &Chunk) -> SchemaValue {
    SchemaValue::Record(vec![
        SchemaValue::Int(chunk.offset.0),
        SchemaValue::Int(chunk.offset.1),
        SchemaValue::Int(chunk.offset.2),
        SchemaValue::Bytes(block_stream::encode(&chunk.blocks)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schematic::layout::RESERVED_TRAILER;
    use crate::schematic::types::BlockPos;

    #[test]
    fn container_starts_with_marker_and_ends_with_trailer() {
        let mut enc = SchematicEncoder::new();
        let bytes = enc.encode(&Schematic::default()).unwrap();
        assert_eq!(&bytes[..4], &VERSION_MARKER);
        assert_eq!(&bytes[bytes.len() - 2..], &RESERVED_TRAILER);
    }

    #[test]
    fn empty_schematic_layout() {
        let mut enc = SchematicEncoder::new();
        let bytes = enc.encode(&Schematic::default()).unwrap();
        // marker · empty name · origin ·  size · no chunks · no extras ·
        // zero global offset · trailer
        assert_eq!(
            bytes,
            vec![
                0x04, 0x00, 0x00, 0x00, // marker
                0x00, // name ""
                0x00, 0x00, 0x00, // origin
                0x00, 0x00, 0x00, // size
                0x00, // chunks: count 0
                0x00, // extras: count 0
                0x00, 0x00, 0x00, // global offset
                0x00, 0x00, // trailer
            ]
        );
    }

    #[test]
    fn chunk_blocks_are_run_length_compressed() {
        let mut enc = SchematicEncoder::new();
        let schematic = Schematic {
            name: "s".to_owned(),
            origin: BlockPos(0, 0, 0),
            size: BlockPos(4, 1, 1),
            chunks: vec![Chunk {
                offset: BlockPos(0, 0, 0),
                blocks: vec![7, 7, 7, 7],
            }],
        };
        let bytes = enc.encode(&schematic).unwrap();
        // The (4, 7) run appears as a 2-byte payload behind a length of 2.
        let needle = [0x04, 0x04, 0x07];
        assert!(bytes.windows(3).any(|w| w == needle));
    }
}
