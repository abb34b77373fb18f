//! Ordered field descriptors for positional record layouts.
//!
//! The wire format carries no field tags: writer and reader must agree on
//! an ordered field list, and field order is a hard invariant. Layouts are
//! therefore data (an ordered list of typed descriptors), and the record
//! encoder/decoder walk the descriptors generically instead of hand-writing
//! per-field code.

use crate::value::SchemaValue;

/// The wire type of one field slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    /// Zig-zag-mapped signed 32-bit varint.
    Int,
    /// Varint byte-length followed by UTF-8 bytes.
    Str,
    /// Varint byte-length followed by raw bytes.
    Bytes,
    /// Exactly this many raw bytes, no length prefix.
    Fixed(usize),
    /// Nested record: its fields inline, in declaration order.
    Record(Vec<FieldDef>),
    /// Varint item count followed by that many inline items. A count of
    /// zero is the empty list; no end-of-list marker is written because the
    /// count is always known up front.
    Array(Box<SchemaType>),
}

/// A named field slot in a record layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: SchemaType,
    /// Emitted when the value record does not supply this field. A field
    /// without a default must always be supplied by the caller.
    pub default: Option<SchemaValue>,
}

impl FieldDef {
    pub fn new(name: &'static str, ty: SchemaType) -> Self {
        Self {
            name,
            ty,
            default: None,
        }
    }

    pub fn with_default(name: &'static str, ty: SchemaType, default: SchemaValue) -> Self {
        Self {
            name,
            ty,
            default: Some(default),
        }
    }
}

/// An ordered, named field list describing one record layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    pub fields: Vec<FieldDef>,
}

impl RecordSchema {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }

    /// Verifies that `self` is an exact ordered prefix of `full`: same
    /// field names and same wire types, from the front, with no gaps.
    /// Defaults are not compared; they only affect the write side.
    ///
    /// On failure, names the first offending field.
    pub fn check_prefix_of(&self, full: &RecordSchema) -> Result<(), String> {
        for (i, lean) in self.fields.iter().enumerate() {
            match full.fields.get(i) {
                Some(field) if lean.name == field.name && same_type(&lean.ty, &field.ty) => {}
                Some(field) => {
                    return Err(format!(
                        "field `{}` at position {i} does not match writer field `{}`",
                        lean.name, field.name
                    ));
                }
                None => {
                    return Err(format!(
                        "field `{}` has no counterpart in the full layout",
                        lean.name
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Structural type equality, ignoring field defaults.
fn same_type(a: &SchemaType, b: &SchemaType) -> bool {
    match (a, b) {
        (SchemaType::Record(af), SchemaType::Record(bf)) => {
            af.len() == bf.len()
                && af
                    .iter()
                    .zip(bf)
                    .all(|(x, y)| x.name == y.name && same_type(&x.ty, &y.ty))
        }
        (SchemaType::Array(ai), SchemaType::Array(bi)) => same_type(ai, bi),
        (SchemaType::Record(_), _) | (_, SchemaType::Record(_)) => false,
        (SchemaType::Array(_), _) | (_, SchemaType::Array(_)) => false,
        _ => a == b,
    }
}
