//! The full (write) and lean (read) container layouts.
//!
//! The full layout carries four compatibility-only trailing fields that are
//! always written from fixed defaults, never populated from input, and
//! never interpreted on read; the lean layout is the full layout's leading
//! fields up to and including `chunks`.

use crate::schema::{FieldDef, RecordSchema, SchemaType};
use crate::value::SchemaValue;

/// Container/version marker, the first 4 bytes of every container. Opaque
/// to this codec: written verbatim and skipped on read.
pub const VERSION_MARKER: [u8; 4] = [0x04, 0x00, 0x00, 0x00];

/// Reserved trailing bytes, the last 2 bytes of every container. Same
/// contract as [`VERSION_MARKER`].
pub const RESERVED_TRAILER: [u8; 2] = [0x00, 0x00];

/// File extension the consumer expects on downloaded containers.
pub const FILE_EXTENSION: &str = "bloxdschem";

fn chunk_record() -> SchemaType {
    SchemaType::Record(vec![
        FieldDef::new("x", SchemaType::Int),
        FieldDef::new("y", SchemaType::Int),
        FieldDef::new("z", SchemaType::Int),
        FieldDef::new("blocks", SchemaType::Bytes),
    ])
}

fn extra_record() -> SchemaType {
    SchemaType::Record(vec![
        FieldDef::new("x", SchemaType::Int),
        FieldDef::new("y", SchemaType::Int),
        FieldDef::new("z", SchemaType::Int),
        FieldDef::new("data", SchemaType::Str),
    ])
}

fn leading_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::with_default(
            "marker",
            SchemaType::Fixed(VERSION_MARKER.len()),
            SchemaValue::Fixed(VERSION_MARKER.to_vec()),
        ),
        FieldDef::new("name", SchemaType::Str),
        FieldDef::new("x", SchemaType::Int),
        FieldDef::new("y", SchemaType::Int),
        FieldDef::new("z", SchemaType::Int),
        FieldDef::new("size_x", SchemaType::Int),
        FieldDef::new("size_y", SchemaType::Int),
        FieldDef::new("size_z", SchemaType::Int),
        FieldDef::new("chunks", SchemaType::Array(Box::new(chunk_record()))),
    ]
}

/// The complete writer-side layout, compatibility fields included.
pub fn full_schema() -> RecordSchema {
    let mut fields = leading_fields();
    fields.extend([
        FieldDef::with_default(
            "extras",
            SchemaType::Array(Box::new(extra_record())),
            SchemaValue::Array(Vec::new()),
        ),
        FieldDef::with_default("global_x", SchemaType::Int, SchemaValue::Int(0)),
        FieldDef::with_default("global_y", SchemaType::Int, SchemaValue::Int(0)),
        FieldDef::with_default("global_z", SchemaType::Int, SchemaValue::Int(0)),
        FieldDef::with_default(
            "reserved",
            SchemaType::Fixed(RESERVED_TRAILER.len()),
            SchemaValue::Fixed(RESERVED_TRAILER.to_vec()),
        ),
    ]);
    RecordSchema::new(fields)
}

/// The reader-side layout: the full layout's fields up to and including
/// `chunks`, with nothing after.
pub fn lean_schema() -> RecordSchema {
    RecordSchema::new(leading_fields())
}
