//! Schema-generic record values

use serde::{Deserialize, Serialize};

use super::SchemaEnum;
use crate::{CodecError, Result};

/// Runtime value of a single record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Value {
    String(String),
    Int(i32),
    Double(f64),
    /// Enum value, held by symbol name rather than index
    Enum(String),
}

impl Value {
    /// Enum value for a native variant.
    pub fn symbol<E: SchemaEnum>(variant: E) -> Self {
        Value::Enum(variant.symbol().to_string())
    }

    /// Name of the schema type this value conforms to.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Enum(_) => "enum",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

/// Named field values of one record.
///
/// Decoding produces fields in schema order. Encoding looks fields up by name,
/// so a record built by hand may list them in any order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct GenericRecord {
    name: String,
    fields: Vec<(String, Value)>,
}

impl GenericRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new() }
    }

    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self { name: name.into(), fields: Vec::with_capacity(capacity) }
    }

    /// Builder form of [`GenericRecord::set`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Set `field`, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.iter().find(|(name, _)| name == field).map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn require(&self, field: &str) -> Result<&Value> {
        self.get(field)
            .ok_or_else(|| CodecError::unbound(field, "field missing from decoded record"))
    }

    /// String value of `field`.
    pub fn string(&self, field: &str) -> Result<&str> {
        match self.require(field)? {
            Value::String(s) => Ok(s),
            other => Err(mismatch(field, "string", other)),
        }
    }

    /// Int value of `field`.
    pub fn int(&self, field: &str) -> Result<i32> {
        match self.require(field)? {
            Value::Int(i) => Ok(*i),
            other => Err(mismatch(field, "int", other)),
        }
    }

    /// Double value of `field`.
    pub fn double(&self, field: &str) -> Result<f64> {
        match self.require(field)? {
            Value::Double(d) => Ok(*d),
            other => Err(mismatch(field, "double", other)),
        }
    }

    /// Native variant of the enum `field`, mapped by symbol name.
    pub fn variant<E: SchemaEnum>(&self, field: &str) -> Result<E> {
        match self.require(field)? {
            Value::Enum(symbol) => E::from_symbol(symbol).ok_or_else(|| {
                CodecError::unbound(field, format!("symbol '{}' has no native variant", symbol))
            }),
            other => Err(mismatch(field, "enum", other)),
        }
    }
}

fn mismatch(field: &str, expected: &str, found: &Value) -> CodecError {
    CodecError::unbound(field, format!("expected {}, found {}", expected, found.type_name()))
}
