//! Schema-driven record encoder.

use schem_buffers::Writer;

use crate::error::SchemError;
use crate::schema::{FieldDef, RecordSchema, SchemaType};
use crate::value::SchemaValue;
use crate::varint;

/// Encodes [`SchemaValue`] records positionally against a [`RecordSchema`].
///
/// A value record may supply only a leading subset of the schema's fields;
/// every remaining field is emitted from its declared default. That is how
/// the write path emits the compatibility-only trailing fields without the
/// caller ever constructing them.
pub struct RecordEncoder {
    pub writer: Writer,
}

impl Default for RecordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes one top-level record and returns the encoded bytes.
    pub fn encode(
        &mut self,
        schema: &RecordSchema,
        values: &[SchemaValue],
    ) -> Result<Vec<u8>, SchemError> {
        self.writer.reset();
        self.write_record(&schema.fields, values)?;
        Ok(self.writer.flush())
    }

    fn write_record(
        &mut self,
        fields: &[FieldDef],
        values: &[SchemaValue],
    ) -> Result<(), SchemError> {
        if values.len() > fields.len() {
            return Err(SchemError::ValueMismatch("record"));
        }
        for (i, field) in fields.iter().enumerate() {
            match values.get(i).or(field.default.as_ref()) {
                Some(value) => self.write_value(field.name, &field.ty, value)?,
                None => return Err(SchemError::ValueMismatch(field.name)),
            }
        }
        Ok(())
    }

    fn write_value(
        &mut self,
        name: &'static str,
        ty: &SchemaType,
        value: &SchemaValue,
    ) -> Result<(), SchemError> {
        match (ty, value) {
            (SchemaType::Int, SchemaValue::Int(n)) => varint::write_i32(&mut self.writer, *n),
            (SchemaType::Str, SchemaValue::Str(s)) => {
                varint::write_i32(&mut self.writer, s.len() as i32);
                self.writer.buf(s.as_bytes());
            }
            (SchemaType::Bytes, SchemaValue::Bytes(bytes)) => {
                varint::write_i32(&mut self.writer, bytes.len() as i32);
                self.writer.buf(bytes);
            }
            (SchemaType::Fixed(size), SchemaValue::Fixed(bytes)) => {
                if bytes.len() != *size {
                    return Err(SchemError::ValueMismatch(name));
                }
                self.writer.buf(bytes);
            }
            (SchemaType::Record(fields), SchemaValue::Record(values)) => {
                self.write_record(fields, values)?;
            }
            (SchemaType::Array(item), SchemaValue::Array(items)) => {
                varint::write_i32(&mut self.writer, items.len() as i32);
                for value in items {
                    self.write_value(name, item, value)?;
                }
            }
            _ => return Err(SchemError::ValueMismatch(name)),
        }
        Ok(())
    }
}
