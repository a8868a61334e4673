//! Field type definitions

use serde::{Deserialize, Serialize};

/// Supported record field types.
/// Maps to the Avro primitive and enum types the collector schemas use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum FieldType {
    /// UTF-8 string (maps to Avro `string`)
    String,
    /// 32-bit signed integer (maps to Avro `int`)
    Int,
    /// 64-bit IEEE754 floating point (maps to Avro `double`)
    Double,
    /// Enumeration with an ordered symbol list (maps to Avro `enum`)
    Enum(EnumType),
}

impl FieldType {
    /// Avro type name, used in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Double => "double",
            FieldType::Enum(_) => "enum",
        }
    }

    /// Returns the enum definition when this is an enum field.
    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            FieldType::Enum(e) => Some(e),
            _ => None,
        }
    }
}

/// Named enumeration with its symbols in declaration order.
///
/// The position of a symbol in [`EnumType::symbols`] is its wire index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct EnumType {
    pub name: String,
    pub symbols: Vec<String>,
}

impl EnumType {
    pub fn new(name: impl Into<String>, symbols: Vec<String>) -> Self {
        Self { name: name.into(), symbols }
    }

    /// Wire index of `symbol`, if declared.
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }

    /// Symbol declared at wire index `index`.
    pub fn symbol_at(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
