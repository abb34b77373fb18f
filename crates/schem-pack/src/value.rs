//! Runtime values for schema-driven record encoding.

/// A runtime value filling one [`SchemaType`] slot.
///
/// [`SchemaType`]: crate::schema::SchemaType
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaValue {
    /// Fills a `SchemaType::Int` slot.
    Int(i32),
    /// Fills a `SchemaType::Str` slot.
    Str(String),
    /// Fills a `SchemaType::Bytes` slot.
    Bytes(Vec<u8>),
    /// Fills a `SchemaType::Fixed` slot; the length must equal the slot's
    /// declared size.
    Fixed(Vec<u8>),
    /// Fills a `SchemaType::Record` slot, values in field order. May be
    /// shorter than the field list on the write side; missing trailing
    /// fields are filled from their defaults.
    Record(Vec<SchemaValue>),
    /// Fills a `SchemaType::Array` slot.
    Array(Vec<SchemaValue>),
}
