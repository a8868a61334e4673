//! Record trait binding native structs to schema fields

use crate::schema::{FieldType, Schema};
use crate::types::GenericRecord;
use crate::{CodecError, Result};
use tracing::warn;

/// Kind of value a native field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Int,
    Double,
    /// Enum with the symbols of every native variant
    Enum(&'static [&'static str]),
}

impl FieldKind {
    fn accepts(&self, field_type: &FieldType) -> bool {
        matches!(
            (self, field_type),
            (FieldKind::String, FieldType::String)
                | (FieldKind::Int, FieldType::Int)
                | (FieldKind::Double, FieldType::Double)
                | (FieldKind::Enum(_), FieldType::Enum(_))
        )
    }
}

/// A native field and the schema field it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    /// Schema field name
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldBinding {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Native record type that can be encoded against a schema.
///
/// Implementations describe their fields once through [`Record::FIELDS`] and
/// convert to and from the schema-generic [`GenericRecord`] by field name.
///
/// ```rust
/// use nwsla::codec::{FieldBinding, FieldKind, Record};
/// use nwsla::types::GenericRecord;
/// use nwsla::Result;
///
/// struct Probe {
///     port: i32,
/// }
///
/// impl Record for Probe {
///     const RECORD_NAME: &'static str = "probe";
///     const FIELDS: &'static [FieldBinding] = &[FieldBinding::new("port", FieldKind::Int)];
///
///     fn to_generic(&self) -> GenericRecord {
///         GenericRecord::new(Self::RECORD_NAME).with("port", self.port)
///     }
///
///     fn from_generic(record: &GenericRecord) -> Result<Self> {
///         Ok(Self { port: record.int("port")? })
///     }
/// }
/// ```
pub trait Record: Sized {
    /// Record name the schema is expected to declare.
    const RECORD_NAME: &'static str;

    /// Native fields by schema field name.
    const FIELDS: &'static [FieldBinding];

    /// Field values keyed by schema field name.
    fn to_generic(&self) -> GenericRecord;

    /// Rebuild the native record from decoded values.
    fn from_generic(record: &GenericRecord) -> Result<Self>;

    /// Check that `schema` is named [`Record::RECORD_NAME`] and describes
    /// exactly this record's fields.
    ///
    /// Every schema field needs a native binding of a compatible kind and every
    /// binding needs a schema field. Native enum variants whose symbol the
    /// schema lacks are reported as warnings; encoding such a value fails.
    fn validate_schema(schema: &Schema) -> Result<()> {
        let context = format!("binding {} to schema '{}'", Self::RECORD_NAME, schema.name());

        if schema.name() != Self::RECORD_NAME {
            return Err(CodecError::schema(
                context,
                format!("schema declares record '{}'", schema.name()),
            ));
        }

        for field in schema.fields() {
            let binding =
                Self::FIELDS.iter().find(|b| b.name == field.name).ok_or_else(|| {
                    CodecError::schema(
                        context.clone(),
                        format!("schema field '{}' has no native counterpart", field.name),
                    )
                })?;

            if !binding.kind.accepts(&field.field_type) {
                return Err(CodecError::schema(
                    context,
                    format!(
                        "field '{}' is declared {} but the native field is {:?}",
                        field.name,
                        field.field_type.type_name(),
                        binding.kind
                    ),
                ));
            }

            if let (FieldKind::Enum(native), FieldType::Enum(declared)) =
                (binding.kind, &field.field_type)
            {
                for symbol in native.iter().filter(|s| declared.index_of(s).is_none()) {
                    warn!(
                        "Enum '{}' of field '{}' lacks symbol {}; encoding it will fail",
                        declared.name, field.name, symbol
                    );
                }
            }
        }

        if let Some(extra) = Self::FIELDS.iter().find(|b| schema.field(b.name).is_none()) {
            return Err(CodecError::schema(
                context,
                format!("native field '{}' is not declared by the schema", extra.name),
            ));
        }

        Ok(())
    }
}
