//! Error types for schema compilation and record encoding.
//!
//! Every fallible operation in this crate returns [`CodecError`]. The four
//! variants map one-to-one onto the stages a record passes through:
//!
//! - **Schema**: the schema text is malformed, uses an unsupported type, or
//!   does not describe the native record it is bound to
//! - **Index**: a positional field lookup fell outside the schema
//! - **Encode**: a record value does not conform to its declared field type,
//!   or an enum variant has no symbol in the schema
//! - **Decode**: the wire bytes are truncated, malformed, or were produced
//!   with a different schema
//!
//! Failures are all-or-nothing: no operation returns partially encoded bytes
//! or a partially populated record alongside an error.
//!
//! ```rust
//! use nwsla::{CodecError, ErrorKind};
//!
//! let error = CodecError::truncated(12, 8, 3);
//! assert_eq!(error.kind(), ErrorKind::Decode);
//! for suggestion in error.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Main error type for codec operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CodecError {
    #[error("Schema error in {context}: {details}")]
    Schema { context: String, details: String },

    #[error("Field index {index} out of bounds for schema with {len} fields")]
    Index { index: usize, len: usize },

    #[error("Cannot encode field '{field}': {details}")]
    Encode { field: String, details: String },

    #[error("Decode error{}: {details}", location(.offset, .field))]
    Decode { offset: Option<usize>, field: Option<String>, details: String },
}

fn location(offset: &Option<usize>, field: &Option<String>) -> String {
    match (offset, field) {
        (Some(offset), Some(field)) => format!(" in field '{}' at byte {}", field, offset),
        (Some(offset), None) => format!(" at byte {}", offset),
        (None, Some(field)) => format!(" in field '{}'", field),
        (None, None) => String::new(),
    }
}

/// Coarse classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Schema,
    Index,
    Encode,
    Decode,
}

impl CodecError {
    /// Returns the stage that produced this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Schema { .. } => ErrorKind::Schema,
            CodecError::Index { .. } => ErrorKind::Index,
            CodecError::Encode { .. } => ErrorKind::Encode,
            CodecError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            CodecError::Schema { .. } => vec![
                "Check the schema text is a well-formed Avro record schema",
                "Use only string, int, double and enum field types",
                "Verify the schema matches the record type it is bound to",
            ],
            CodecError::Index { .. } => vec![
                "Check the index against Schema::field_count",
                "Look the field up by name instead of position",
            ],
            CodecError::Encode { .. } => vec![
                "Check the record value matches the declared field type",
                "Add the missing enum symbol to the schema",
                "Verify the record was built for this schema",
            ],
            CodecError::Decode { .. } => vec![
                "Verify the bytes were produced with the same schema",
                "Check the transport delivered the complete buffer",
                "Drop the record; partial recovery is not possible",
            ],
        }
    }

    /// Helper constructor for schema errors.
    pub fn schema(context: impl Into<String>, details: impl Into<String>) -> Self {
        CodecError::Schema { context: context.into(), details: details.into() }
    }

    /// Helper constructor for encode errors.
    pub fn encode(field: impl Into<String>, details: impl Into<String>) -> Self {
        CodecError::Encode { field: field.into(), details: details.into() }
    }

    /// Helper constructor for decode errors not tied to a specific field.
    pub fn decode(offset: usize, details: impl Into<String>) -> Self {
        CodecError::Decode { offset: Some(offset), field: None, details: details.into() }
    }

    /// Helper constructor for decoded values that cannot populate a native
    /// record field (missing, wrong type, or a symbol with no native variant).
    pub fn unbound(field: impl Into<String>, details: impl Into<String>) -> Self {
        CodecError::Decode { offset: None, field: Some(field.into()), details: details.into() }
    }

    /// Helper constructor for reads that run past the end of the buffer.
    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        CodecError::Decode {
            offset: Some(offset),
            field: None,
            details: format!("buffer truncated: need {} bytes, have {}", needed, available),
        }
    }

    /// Attach the schema field being read to a decode error.
    ///
    /// Errors that already name a field, and non-decode errors, pass through unchanged.
    pub fn in_field(self, name: &str) -> Self {
        match self {
            CodecError::Decode { offset, field: None, details } => {
                CodecError::Decode { offset, field: Some(name.to_string()), details }
            }
            other => other,
        }
    }

    /// Name of the field a decode or encode error refers to, if known.
    pub fn field(&self) -> Option<&str> {
        match self {
            CodecError::Encode { field, .. } => Some(field),
            CodecError::Decode { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Schema { context: "schema JSON".to_string(), details: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
          #[test]
          fn error_messages_format_correctly_with_arbitrary_context(
            context in ".*",
            details in ".*",
            field in "\\w+",
            index in 0usize..1000,
            len in 0usize..1000,
            offset in 0usize..0x10000
          ) {
            let schema_error = CodecError::schema(context.clone(), details.clone());
            let index_error = CodecError::Index { index, len };
            let encode_error = CodecError::encode(field.clone(), details.clone());
            let decode_error = CodecError::decode(offset, details.clone());

            let schema_msg = schema_error.to_string();
            prop_assert!(schema_msg.contains(&context));
            prop_assert!(schema_msg.contains(&details));

            let index_msg = index_error.to_string();
            prop_assert!(index_msg.contains(&index.to_string()));
            prop_assert!(index_msg.contains(&len.to_string()));

            let encode_msg = encode_error.to_string();
            prop_assert!(encode_msg.contains(&field));

            let decode_msg = decode_error.to_string();
            prop_assert!(decode_msg.contains(&offset.to_string()));
            prop_assert!(decode_msg.contains(&details));

            let labelled_msg = decode_error.in_field(&field).to_string();
            prop_assert!(labelled_msg.contains(&field));
            prop_assert!(labelled_msg.contains(&offset.to_string()));
          }

          #[test]
          fn in_field_only_labels_unlabelled_decode_errors(
            first in "\\w+",
            second in "\\w+",
            offset in 0usize..0x10000
          ) {
            let labelled = CodecError::decode(offset, "bad").in_field(&first).in_field(&second);
            prop_assert_eq!(labelled.field(), Some(first.as_str()));

            let encode = CodecError::encode(first.clone(), "bad").in_field(&second);
            prop_assert_eq!(encode.field(), Some(first.as_str()));
          }
        }
    }

    #[test]
    fn error_kinds_match_variants() {
        assert_eq!(CodecError::schema("a", "b").kind(), ErrorKind::Schema);
        assert_eq!(CodecError::Index { index: 3, len: 2 }.kind(), ErrorKind::Index);
        assert_eq!(CodecError::encode("f", "bad").kind(), ErrorKind::Encode);
        assert_eq!(CodecError::truncated(0, 4, 1).kind(), ErrorKind::Decode);
    }

    #[test]
    fn error_traits_validation() {
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<CodecError>();

        let error = CodecError::decode(0, "test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn recovery_methods_work() {
        let errors = [
            CodecError::schema("a", "b"),
            CodecError::Index { index: 1, len: 0 },
            CodecError::encode("f", "bad"),
            CodecError::decode(0, "bad"),
        ];

        for error in &errors {
            let suggestions = error.recovery_suggestions();
            assert!(!suggestions.is_empty());
            for suggestion in &suggestions {
                assert!(suggestion.len() > 5);
            }
        }
    }

    #[test]
    fn serde_json_errors_become_schema_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: CodecError = json_err.into();
        assert!(matches!(error, CodecError::Schema { .. }));
    }
}
