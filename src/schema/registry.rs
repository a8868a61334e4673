//! Shared handles to the compiled collector schemas

use std::sync::Arc;

use super::{Schema, definitions};
use crate::Result;

/// Compiles the collector's record schemas once and hands out shared handles.
///
/// The two schemas are compiled independently and never mixed; each codec
/// holds its own `Arc` for as long as it encodes or decodes.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    client_params: Arc<Schema>,
    latency_result: Arc<Schema>,
}

impl SchemaRegistry {
    /// Compile the built-in definitions.
    pub fn builtin() -> Result<Self> {
        Self::from_texts(definitions::CLIENT_PARAMS_SCHEMA, definitions::LATENCY_RESULT_SCHEMA)
    }

    /// Compile caller-supplied schema texts for the two record types.
    pub fn from_texts(client_params: &str, latency_result: &str) -> Result<Self> {
        Ok(Self {
            client_params: Arc::new(Schema::compile(client_params)?),
            latency_result: Arc::new(Schema::compile(latency_result)?),
        })
    }

    pub fn client_params(&self) -> Arc<Schema> {
        Arc::clone(&self.client_params)
    }

    pub fn latency_result(&self) -> Arc<Schema> {
        Arc::clone(&self.latency_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_schemas_compile() {
        let registry = SchemaRegistry::builtin().unwrap();
        assert_eq!(registry.client_params().name(), "clientparams");
        assert_eq!(registry.latency_result().name(), "latencyresult");
        assert_eq!(registry.client_params().field_count(), 8);
        assert_eq!(registry.latency_result().field_count(), 11);
    }

    #[test]
    fn handles_share_one_compilation() {
        let registry = SchemaRegistry::builtin().unwrap();
        assert!(Arc::ptr_eq(&registry.client_params(), &registry.client_params()));
    }

    #[test]
    fn invalid_text_fails_registry_construction() {
        let result = SchemaRegistry::from_texts(definitions::CLIENT_PARAMS_SCHEMA, "{}");
        assert!(result.is_err());
    }
}
