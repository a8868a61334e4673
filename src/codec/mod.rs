//! Record Codec
//!
//! Encodes native records to Avro binary and back, driven entirely by a
//! compiled [`Schema`].
//!
//! # Pipeline
//!
//! ```text
//!   native record ──► Record::to_generic ──► encode_generic ──► bytes
//!   bytes ──► decode_generic ──► Record::from_generic ──► native record
//! ```
//!
//! Fields are written and read in schema declaration order. Values are matched
//! to schema fields by name, and enum values travel as symbol names until the
//! last step: the encoder resolves a symbol to its index in the schema's
//! symbol list, the decoder resolves an index back to the symbol. Native enum
//! ordinals never reach the wire.
//!
//! Both directions are all-or-nothing. Any failure aborts the whole call.
//!
//! ```rust
//! use nwsla::codec::RecordCodec;
//! use nwsla::schema::SchemaRegistry;
//! use nwsla::types::{ClientParams, IpType, ProtType, SessionState};
//!
//! let registry = SchemaRegistry::builtin().unwrap();
//! let codec = RecordCodec::<ClientParams>::new(registry.client_params()).unwrap();
//!
//! let params = ClientParams {
//!     agent_ip: "1.10.23.111".to_string(),
//!     dest_ip: "1.67.21.345".to_string(),
//!     ip_type: IpType::Ipv4,
//!     prot_type: ProtType::Icmp,
//!     interval: 2,
//!     id: 1,
//!     state: SessionState::Running,
//!     port: 4000,
//! };
//!
//! let bytes = codec.encode(&params).unwrap();
//! assert_eq!(codec.decode(&bytes).unwrap(), params);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::schema::{FieldType, Schema};
use crate::types::{GenericRecord, Value};
use crate::{CodecError, Result};

mod record;
pub mod wire;

pub use record::{FieldBinding, FieldKind, Record};
pub use wire::{WireReader, WireWriter};

/// Encode a generic record against `schema`.
///
/// Every schema field must be present with a conforming value, and the record
/// must not carry fields the schema does not declare.
pub fn encode_generic(record: &GenericRecord, schema: &Schema) -> Result<Vec<u8>> {
    if let Some((extra, _)) = record.fields().find(|(name, _)| schema.field(name).is_none()) {
        return Err(CodecError::encode(
            extra,
            format!("field is not declared by schema '{}'", schema.name()),
        ));
    }

    let mut writer = WireWriter::with_capacity(schema.field_count() * 4);

    for field in schema.fields() {
        let value = record
            .get(&field.name)
            .ok_or_else(|| CodecError::encode(&field.name, "record has no value for field"))?;

        trace!(
            "Encoding field {} '{}' as {}",
            field.position,
            field.name,
            field.field_type.type_name()
        );

        match (&field.field_type, value) {
            (FieldType::String, Value::String(s)) => writer.write_string(s),
            (FieldType::Int, Value::Int(i)) => writer.write_int(*i),
            (FieldType::Double, Value::Double(d)) => writer.write_double(*d),
            (FieldType::Enum(enum_type), Value::Enum(symbol)) => {
                let index = enum_type.index_of(symbol).ok_or_else(|| {
                    CodecError::encode(
                        &field.name,
                        format!("symbol '{}' is not declared by enum '{}'", symbol, enum_type.name),
                    )
                })?;
                writer.write_enum(index).map_err(|_| {
                    let details = format!("enum index {} exceeds int range", index);
                    CodecError::encode(&field.name, details)
                })?;
            }
            (declared, value) => {
                return Err(CodecError::encode(
                    &field.name,
                    format!("expected {}, found {}", declared.type_name(), value.type_name()),
                ));
            }
        }
    }

    debug!("Encoded '{}' record into {} bytes", schema.name(), writer.len());
    Ok(writer.into_bytes())
}

/// Decode a generic record from `bytes` using `schema`.
///
/// The buffer must hold exactly one record: trailing bytes are an error.
pub fn decode_generic(bytes: &[u8], schema: &Schema) -> Result<GenericRecord> {
    let mut reader = WireReader::new(bytes);
    let mut record = GenericRecord::with_capacity(schema.name(), schema.field_count());

    for field in schema.fields() {
        trace!(
            "Decoding field {} '{}' at byte {}",
            field.position,
            field.name,
            reader.position()
        );

        let value = match &field.field_type {
            FieldType::String => reader.read_string().map(Value::String),
            FieldType::Int => reader.read_int().map(Value::Int),
            FieldType::Double => reader.read_double().map(Value::Double),
            FieldType::Enum(enum_type) => reader.read_enum(enum_type.len()).and_then(|index| {
                enum_type.symbol_at(index).map(|s| Value::Enum(s.to_string())).ok_or_else(|| {
                    CodecError::decode(reader.position(), format!("no symbol at index {}", index))
                })
            }),
        }
        .map_err(|e| e.in_field(&field.name))?;

        record.set(field.name.as_str(), value);
    }

    if reader.remaining() > 0 {
        return Err(CodecError::decode(
            reader.position(),
            format!("{} trailing bytes after '{}' record", reader.remaining(), schema.name()),
        ));
    }

    debug!("Decoded '{}' record from {} bytes", schema.name(), bytes.len());
    Ok(record)
}

/// Encode a native record against `schema`.
pub fn encode<R: Record>(record: &R, schema: &Schema) -> Result<Vec<u8>> {
    encode_generic(&record.to_generic(), schema)
}

/// Decode a native record from `bytes` using `schema`.
pub fn decode<R: Record>(bytes: &[u8], schema: &Schema) -> Result<R> {
    let generic = decode_generic(bytes, schema)?;
    R::from_generic(&generic)
}

/// Codec bound to one record type and one shared schema.
///
/// Construction validates the binding once; encode and decode then only
/// fail on the data itself. The codec holds no mutable state and can be
/// cloned or shared across threads freely.
#[derive(Debug)]
pub struct RecordCodec<R> {
    schema: Arc<Schema>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordCodec<R> {
    /// Bind `R` to `schema`, failing with a schema error when the schema
    /// does not describe `R`'s fields.
    pub fn new(schema: Arc<Schema>) -> Result<Self> {
        R::validate_schema(&schema)?;
        debug!("Bound {} to schema '{}'", R::RECORD_NAME, schema.name());
        Ok(Self { schema, _record: PhantomData })
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn encode(&self, record: &R) -> Result<Vec<u8>> {
        encode(record, &self.schema)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<R> {
        decode(bytes, &self.schema)
    }
}

impl<R> Clone for RecordCodec<R> {
    fn clone(&self) -> Self {
        Self { schema: Arc::clone(&self.schema), _record: PhantomData }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaRegistry, definitions};
    use crate::test_utils::{sample_client_params, sample_latency_result};
    use crate::types::{ClientParams, LatencyResult, SessionState};

    fn client_schema() -> Schema {
        Schema::compile(definitions::CLIENT_PARAMS_SCHEMA).unwrap()
    }

    #[test]
    fn client_params_wire_layout() {
        let bytes = encode(&sample_client_params(), &client_schema()).unwrap();

        let mut expected = vec![22];
        expected.extend_from_slice(b"1.10.23.111");
        expected.push(22);
        expected.extend_from_slice(b"1.67.21.345");
        // ipType=0, protType=0, interval=2, id=1, state=0, port=4000
        expected.extend_from_slice(&[0x00, 0x00, 0x04, 0x02, 0x00, 0xC0, 0x3E]);

        assert_eq!(bytes, expected);
    }

    #[test]
    fn generic_round_trip_keeps_schema_order() {
        let schema = client_schema();
        let bytes = encode(&sample_client_params(), &schema).unwrap();
        let generic = decode_generic(&bytes, &schema).unwrap();

        let names: Vec<&str> = generic.fields().map(|(name, _)| name).collect();
        let declared: Vec<&str> = schema.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, declared);
        assert_eq!(generic.name(), "clientparams");
    }

    #[test]
    fn encode_rejects_type_mismatch() {
        let mut generic = sample_client_params().to_generic();
        generic.set("port", "4000");
        let err = encode_generic(&generic, &client_schema()).unwrap_err();
        assert!(matches!(err, CodecError::Encode { ref field, .. } if field == "port"));
    }

    #[test]
    fn encode_rejects_missing_and_undeclared_fields() {
        let schema = client_schema();
        let partial = GenericRecord::new("clientparams").with("agent_ip", "a");
        assert!(matches!(encode_generic(&partial, &schema), Err(CodecError::Encode { .. })));

        let extra = sample_client_params().to_generic().with("jitter", 3);
        let err = encode_generic(&extra, &schema).unwrap_err();
        assert_eq!(err.field(), Some("jitter"));
    }

    #[test]
    fn encode_rejects_symbol_missing_from_schema() {
        let schema = Schema::compile(
            &definitions::LATENCY_RESULT_SCHEMA
                .replace(r#""SESSION_STATE_STOPPING", "#, ""),
        )
        .unwrap();
        let mut result = sample_latency_result();
        result.state = SessionState::Stopping;

        let err = encode(&result, &schema).unwrap_err();
        assert!(matches!(err, CodecError::Encode { ref field, .. } if field == "state"));

        result.state = SessionState::Stopped;
        assert!(encode(&result, &schema).is_ok());
    }

    #[test]
    fn decode_rejects_trailing_bytes() {
        let schema = client_schema();
        let mut bytes = encode(&sample_client_params(), &schema).unwrap();
        bytes.push(0);
        assert!(matches!(decode::<ClientParams>(&bytes, &schema), Err(CodecError::Decode { .. })));
    }

    #[test]
    fn decode_rejects_overflowing_string_length() {
        let text = r#"{"type":"record","name":"r","fields":[{"name":"s","type":"string"}]}"#;
        let schema = Schema::compile(text).unwrap();
        let bytes = [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x02];
        let err = decode_generic(&bytes, &schema).unwrap_err();
        assert!(matches!(err, CodecError::Decode { offset: Some(0), .. }));
        assert_eq!(err.field(), Some("s"));
    }

    #[test]
    fn decode_error_names_the_failing_field() {
        let schema = client_schema();
        let bytes = encode(&sample_client_params(), &schema).unwrap();
        let err = decode_generic(&bytes[..bytes.len() - 1], &schema).unwrap_err();
        assert_eq!(err.field(), Some("port"));
    }

    #[test]
    fn record_codec_shares_one_schema() {
        let registry = SchemaRegistry::builtin().unwrap();
        let codec = RecordCodec::<LatencyResult>::new(registry.latency_result()).unwrap();
        let copy = codec.clone();
        assert!(Arc::ptr_eq(codec.schema(), copy.schema()));

        let result = sample_latency_result();
        assert_eq!(copy.decode(&codec.encode(&result).unwrap()).unwrap(), result);
    }

    #[test]
    fn record_codec_refuses_foreign_schema() {
        let registry = SchemaRegistry::builtin().unwrap();
        let result = RecordCodec::<ClientParams>::new(registry.latency_result());
        assert!(matches!(result, Err(CodecError::Schema { .. })));
    }
}
