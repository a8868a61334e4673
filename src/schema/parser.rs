//! Avro JSON schema parsing
//!
//! Deserializes the schema text with serde_json into a loose raw form, then
//! resolves every field type against the subset the codec supports. Only a
//! single top-level record is accepted; its fields may be `string`, `int`,
//! `double` or a named `enum`. Named enums may be referenced again by name
//! after their first declaration.

use super::{EnumType, FieldDescriptor, FieldType};
use crate::{CodecError, Result};
use serde::Deserialize;
use serde::de::IgnoredAny;
use std::collections::HashMap;
use tracing::trace;

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    #[serde(default)]
    namespace: Option<String>,
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    ty: RawType,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawType {
    Name(String),
    Complex(RawComplex),
    Union(#[allow(dead_code)] Vec<IgnoredAny>),
}

#[derive(Debug, Deserialize)]
struct RawComplex {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbols: Option<Vec<String>>,
}

/// Output of a successful parse, consumed by `Schema::compile`.
pub(super) struct ParsedRecord {
    pub name: String,
    pub namespace: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

pub(super) fn parse_record(text: &str) -> Result<ParsedRecord> {
    let raw: RawRecord = serde_json::from_str(text)?;

    if raw.kind != "record" {
        return Err(CodecError::schema(
            "schema root",
            format!("expected type \"record\", found \"{}\"", raw.kind),
        ));
    }
    validate_name("record name", &raw.name)?;
    if raw.fields.is_empty() {
        return Err(CodecError::schema(
            format!("record '{}'", raw.name),
            "record declares no fields",
        ));
    }

    let mut named_enums: HashMap<String, EnumType> = HashMap::new();
    let mut fields = Vec::with_capacity(raw.fields.len());

    for (position, raw_field) in raw.fields.into_iter().enumerate() {
        validate_name("field name", &raw_field.name)?;
        if fields.iter().any(|f: &FieldDescriptor| f.name == raw_field.name) {
            return Err(CodecError::schema(
                format!("record '{}'", raw.name),
                format!("duplicate field '{}'", raw_field.name),
            ));
        }

        let field_type = resolve_type(&raw_field.name, raw_field.ty, &mut named_enums)?;
        trace!("Field {} '{}' resolved to {}", position, raw_field.name, field_type.type_name());
        fields.push(FieldDescriptor { name: raw_field.name, field_type, position });
    }

    Ok(ParsedRecord { name: raw.name, namespace: raw.namespace, fields })
}

fn resolve_type(
    field: &str,
    ty: RawType,
    named_enums: &mut HashMap<String, EnumType>,
) -> Result<FieldType> {
    match ty {
        RawType::Name(name) => match primitive(&name) {
            Some(field_type) => Ok(field_type),
            None => named_enums
                .get(&name)
                .cloned()
                .map(FieldType::Enum)
                .ok_or_else(|| unsupported(field, &name)),
        },
        RawType::Complex(complex) if complex.kind == "enum" => {
            let enum_type = build_enum(field, complex)?;
            if named_enums.contains_key(&enum_type.name) {
                return Err(CodecError::schema(
                    format!("field '{}'", field),
                    format!("enum '{}' is already defined", enum_type.name),
                ));
            }
            named_enums.insert(enum_type.name.clone(), enum_type.clone());
            Ok(FieldType::Enum(enum_type))
        }
        RawType::Complex(complex) => {
            primitive(&complex.kind).ok_or_else(|| unsupported(field, &complex.kind))
        }
        RawType::Union(_) => Err(unsupported(field, "union")),
    }
}

fn primitive(name: &str) -> Option<FieldType> {
    match name {
        "string" => Some(FieldType::String),
        "int" => Some(FieldType::Int),
        "double" => Some(FieldType::Double),
        _ => None,
    }
}

fn build_enum(field: &str, complex: RawComplex) -> Result<EnumType> {
    let context = format!("field '{}'", field);
    let name = complex
        .name
        .ok_or_else(|| CodecError::schema(context.clone(), "enum type has no name"))?;
    validate_name("enum name", &name)?;
    if primitive(&name).is_some() {
        return Err(CodecError::schema(
            context,
            format!("enum name '{}' is reserved for a primitive type", name),
        ));
    }

    let symbols = complex.symbols.ok_or_else(|| {
        CodecError::schema(context.clone(), format!("enum '{}' has no symbols", name))
    })?;
    if symbols.is_empty() {
        return Err(CodecError::schema(context, format!("enum '{}' has no symbols", name)));
    }

    for (i, symbol) in symbols.iter().enumerate() {
        validate_name("enum symbol", symbol)?;
        if symbols[..i].contains(symbol) {
            return Err(CodecError::schema(
                context,
                format!("enum '{}' repeats symbol '{}'", name, symbol),
            ));
        }
    }

    Ok(EnumType::new(name, symbols))
}

fn unsupported(field: &str, type_name: &str) -> CodecError {
    CodecError::schema(format!("field '{}'", field), format!("unsupported type '{}'", type_name))
}

/// Avro names: `[A-Za-z_][A-Za-z0-9_]*`
fn validate_name(what: &str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CodecError::schema(what, format!("invalid name '{}'", name)))
    }
}
