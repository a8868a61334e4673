//! Schema Registry
//!
//! Compiles Avro JSON record schemas into an immutable [`Schema`] the codec
//! reads field by field.
//!
//! # Architecture
//!
//! - The parser deserializes the schema text and resolves each field type
//! - [`Schema`] keeps fields in declaration order with O(1) lookup by name
//! - [`definitions`] carries the collector's two record schemas
//! - [`SchemaRegistry`] compiles those once and shares them behind `Arc`
//!
//! A compiled schema is never mutated, so a single instance can be shared by
//! any number of concurrent encode and decode calls without locking.
//!
//! ```rust
//! use nwsla::schema::{Schema, FieldType, definitions};
//!
//! let schema = Schema::compile(definitions::CLIENT_PARAMS_SCHEMA).unwrap();
//! assert_eq!(schema.name(), "clientparams");
//! assert_eq!(schema.field_count(), 8);
//!
//! let ip_type = schema.field_at(2).unwrap();
//! assert_eq!(ip_type.name, "ipType");
//! assert!(matches!(ip_type.field_type, FieldType::Enum(_)));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::{CodecError, Result};

pub mod definitions;
mod field_type;
mod parser;
mod registry;

pub use field_type::{EnumType, FieldType};
pub use registry::SchemaRegistry;

/// A single field of a compiled schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct FieldDescriptor {
    /// Field name as declared in the schema
    pub name: String,
    /// Declared type of the field
    pub field_type: FieldType,
    /// Zero-based position in declaration order
    pub position: usize,
}

/// Compiled record schema: an ordered list of typed fields.
///
/// Only constructible through [`Schema::compile`].
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    fields: Vec<FieldDescriptor>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl Schema {
    /// Compile schema text into a validated schema.
    ///
    /// Identical text always yields a structurally identical schema: field
    /// order and enum symbol order are kept exactly as declared.
    pub fn compile(text: &str) -> Result<Self> {
        let parsed = parser::parse_record(text)?;
        let by_name =
            parsed.fields.iter().map(|f| (f.name.clone(), f.position)).collect::<HashMap<_, _>>();

        debug!("Compiled schema '{}' with {} fields", parsed.name, parsed.fields.len());

        Ok(Self { name: parsed.name, namespace: parsed.namespace, fields: parsed.fields, by_name })
    }

    /// Record name declared by the schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field at `index` in declaration order.
    pub fn field_at(&self, index: usize) -> Result<&FieldDescriptor> {
        self.fields.get(index).ok_or(CodecError::Index { index, len: self.fields.len() })
    }

    /// Field lookup by name (O(1)).
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.index_of(name).map(|i| &self.fields[i])
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Symbol table of the enum field `name`, or `None` when the field is
    /// missing or not an enum.
    pub fn enum_symbols(&self, name: &str) -> Option<&[String]> {
        self.field(name).and_then(|f| f.field_type.as_enum()).map(EnumType::symbols)
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.namespace == other.namespace && self.fields == other.fields
    }
}

impl Eq for Schema {}
