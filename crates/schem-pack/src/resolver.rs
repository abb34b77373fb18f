//! Lean-over-full layout projection.
//!
//! The full layout may grow compatibility fields after the leading ones
//! without breaking readers that only need those leading fields, provided
//! each reader's layout is an exact ordered prefix of the writer's. The
//! resolver makes that relationship an explicit, checked binding instead of
//! an implicit assumption: binding validates once, decoding then walks only
//! the lean fields and never byte-scans the writer's tail.

use crate::error::SchemError;
use crate::record::RecordDecoder;
use crate::schema::RecordSchema;
use crate::value::SchemaValue;

/// A validated lean-over-full layout binding.
pub struct LayoutResolver {
    lean: RecordSchema,
}

impl LayoutResolver {
    /// Validates that `lean` is a field-order prefix of `full` and binds it.
    ///
    /// Fails with [`SchemError::SchemaMismatch`] before any decode attempt
    /// when a lean field is renamed, retyped, out of order, or absent from
    /// the full layout.
    pub fn bind(lean: RecordSchema, full: &RecordSchema) -> Result<Self, SchemError> {
        lean.check_prefix_of(full)
            .map_err(SchemError::SchemaMismatch)?;
        Ok(Self { lean })
    }

    /// The bound lean layout.
    pub fn lean(&self) -> &RecordSchema {
        &self.lean
    }

    /// Decodes the lean fields from writer-laid-out bytes.
    ///
    /// Everything the full layout defines after the last lean field is
    /// discarded without being scanned.
    pub fn resolve(&self, buf: &[u8]) -> Result<Vec<SchemaValue>, SchemError> {
        RecordDecoder::new(buf).read_record(&self.lean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordEncoder;
    use crate::schema::{FieldDef, SchemaType};

    fn full() -> RecordSchema {
        RecordSchema::new(vec![
            FieldDef::new("name", SchemaType::Str),
            FieldDef::new("x", SchemaType::Int),
            FieldDef::with_default("spare", SchemaType::Int, SchemaValue::Int(0)),
        ])
    }

    #[test]
    fn bind_rejects_unknown_field() {
        let lean = RecordSchema::new(vec![FieldDef::new("title", SchemaType::Str)]);
        assert!(matches!(
            LayoutResolver::bind(lean, &full()),
            Err(SchemError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn resolve_stops_at_last_lean_field() {
        let mut enc = RecordEncoder::new();
        let bytes = enc
            .encode(
                &full(),
                &[
                    SchemaValue::Str("a".to_owned()),
                    SchemaValue::Int(7),
                    SchemaValue::Int(99),
                ],
            )
            .unwrap();

        let lean = RecordSchema::new(vec![
            FieldDef::new("name", SchemaType::Str),
            FieldDef::new("x", SchemaType::Int),
        ]);
        let resolver = LayoutResolver::bind(lean, &full()).unwrap();
        let values = resolver.resolve(&bytes).unwrap();
        assert_eq!(
            values,
            vec![SchemaValue::Str("a".to_owned()), SchemaValue::Int(7)]
        );
    }
}
