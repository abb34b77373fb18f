//! Schematic container decoder (lean projection).

use crate::block_stream;
use crate::error::SchemError;
use crate::resolver::LayoutResolver;
use crate::value::SchemaValue;

use super::layout::{full_schema, lean_schema};
use super::types::{BlockPos, Chunk, Schematic};

/// Decodes full-layout containers into the lean schematic projection.
///
/// Construction binds the lean layout to the full layout through
/// [`LayoutResolver`], so prefix-compatibility is checked once, before any
/// decode attempt. Decoding stops after the `chunks` field; the
/// compatibility tail the writer emitted is never byte-scanned.
pub struct SchematicDecoder {
    resolver: LayoutResolver,
}

impl SchematicDecoder {
    pub fn new() -> Result<Self, SchemError> {
        let resolver = LayoutResolver::bind(lean_schema(), &full_schema())?;
        Ok(Self { resolver })
    }

    /// Decodes a container into `{name, origin, size, chunks}`.
    ///
    /// The 4 marker bytes are consumed but not validated; they are opaque
    /// to this codec. Each chunk's blocks payload is run-length-decoded
    /// back to the flat id sequence.
    pub fn resolve_and_decode(&self, buf: &[u8]) -> Result<Schematic, SchemError> {
        let values = self.resolver.resolve(buf)?;
        schematic_from_values(values)
    }
}

fn schematic_from_values(values: Vec<SchemaValue>) -> Result<Schematic, SchemError> {
    // Lean field order: marker · name · x · y · z · size_x · size_y ·
    // size_z · chunks.
    let values: [SchemaValue; 9] = values
        .try_into()
        .map_err(|_| SchemError::ValueMismatch("schematic"))?;
    let [_marker, name, x, y, z, size_x, size_y, size_z, chunks] = values;
    Ok(Schematic {
        name: take_str(name)?,
        origin: BlockPos(take_int(x)?, take_int(y)?, take_int(z)?),
        size: BlockPos(take_int(size_x)?, take_int(size_y)?, take_int(size_z)?),
        chunks: take_array(chunks)?
            .into_iter()
            .map(chunk_from_value)
            .collect::<Result<_, _>>()?,
    })
}

fn chunk_from_value(value: SchemaValue) -> Result<Chunk, SchemError> {
    let values: [SchemaValue; 4] = take_record(value)?
        .try_into()
        .map_err(|_| SchemError::ValueMismatch("chunk"))?;
    let [x, y, z, blocks] = values;
    Ok(Chunk {
        offset: BlockPos(take_int(x)?, take_int(y)?, take_int(z)?),
        blocks: block_stream::decode(&take_bytes(blocks)?)?,
    })
}

fn take_int(value: SchemaValue) -> Result<i32, SchemError> {
    match value {
        SchemaValue::Int(n) => Ok(n),
        _ => Err(SchemError::ValueMismatch("int")),
    }
}

fn take_str(value: SchemaValue) -> Result<String, SchemError> {
    match value {
        SchemaValue::Str(s) => Ok(s),
        _ => Err(SchemError::ValueMismatch("str")),
    }
}

fn take_bytes(value: SchemaValue) -> Result<Vec<u8>, SchemError> {
    match value {
        SchemaValue::Bytes(b) => Ok(b),
        _ => Err(SchemError::ValueMismatch("bytes")),
    }
}

fn take_record(value: SchemaValue) -> Result<Vec<SchemaValue>, SchemError> {
    match value {
        SchemaValue::Record(fields) => Ok(fields),
        _ => Err(SchemError::ValueMismatch("record")),
    }
}

fn take_array(value: SchemaValue) -> Result<Vec<SchemaValue>, SchemError> {
    match value {
        SchemaValue::Array(items) => Ok(items),
        _ => Err(SchemError::ValueMismatch("array")),
    }
}
