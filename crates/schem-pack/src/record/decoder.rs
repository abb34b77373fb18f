//! Schema-driven record decoder.

use schem_buffers::Reader;

use crate::error::SchemError;
use crate::schema::{FieldDef, RecordSchema, SchemaType};
use crate::value::SchemaValue;
use crate::varint;

/// Decodes positionally-encoded records by walking a [`RecordSchema`]
/// against a cursor-tracking [`Reader`].
///
/// The decoder reads exactly the fields the schema declares and nothing
/// more; trailing bytes are left untouched. The lean projection relies on
/// this: a reader bound to a prefix of the writer's layout stops at the end
/// of its own field list.
pub struct RecordDecoder<'a> {
    pub reader: Reader<'a>,
}

impl<'a> RecordDecoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(buf),
        }
    }

    /// Decodes one record's fields in declaration order.
    pub fn read_record(&mut self, schema: &RecordSchema) -> Result<Vec<SchemaValue>, SchemError> {
        self.read_fields(&schema.fields)
    }

    fn read_fields(&mut self, fields: &[FieldDef]) -> Result<Vec<SchemaValue>, SchemError> {
        let mut values = Vec::with_capacity(fields.len());
        for field in fields {
            values.push(self.read_value(&field.ty)?);
        }
        Ok(values)
    }

    fn read_value(&mut self, ty: &SchemaType) -> Result<SchemaValue, SchemError> {
        match ty {
            SchemaType::Int => Ok(SchemaValue::Int(varint::read_i32(&mut self.reader)?)),
            SchemaType::Str => {
                let len = self.read_len()?;
                let s = self.reader.utf8(len)?;
                Ok(SchemaValue::Str(s.to_owned()))
            }
            SchemaType::Bytes => {
                let len = self.read_len()?;
                Ok(SchemaValue::Bytes(self.reader.buf(len)?.to_vec()))
            }
            SchemaType::Fixed(size) => Ok(SchemaValue::Fixed(self.reader.buf(*size)?.to_vec())),
            SchemaType::Record(fields) => Ok(SchemaValue::Record(self.read_fields(fields)?)),
            SchemaType::Array(item) => {
                let count = varint::read_i32(&mut self.reader)?;
                if count < 0 {
                    return Err(SchemError::MalformedStream("negative item count"));
                }
                let mut items = Vec::with_capacity(count.min(1024) as usize);
                for _ in 0..count {
                    items.push(self.read_value(item)?);
                }
                Ok(SchemaValue::Array(items))
            }
        }
    }

    /// Reads a byte-length prefix and validates it against the remaining
    /// buffer, so the subsequent slice read cannot overrun.
    fn read_len(&mut self) -> Result<usize, SchemError> {
        let len = varint::read_i32(&mut self.reader)?;
        if len < 0 {
            return Err(SchemError::MalformedStream("negative length prefix"));
        }
        let len = len as usize;
        if len > self.reader.remaining() {
            return Err(SchemError::MalformedStream(
                "length prefix overruns remaining buffer",
            ));
        }
        Ok(len)
    }
}
