//! Core types for telemetry record representation.
//!
//! ## Architecture
//!
//! - [`ClientParams`] and [`LatencyResult`] are the two native records
//! - [`IpType`], [`ProtType`] and [`SessionState`] implement [`SchemaEnum`],
//!   a total mapping between native variants and schema symbol names
//! - [`Value`] and [`GenericRecord`] carry field values by name between the
//!   native records and the codec
//!
//! ## Usage Example
//!
//! ```rust
//! use nwsla::types::{GenericRecord, LatencyResult, SessionState, Value};
//! use nwsla::codec::Record;
//!
//! let generic = GenericRecord::new("latencyresult")
//!     .with("agent_ip", "100.000.000")
//!     .with("state", Value::symbol(SessionState::Stopping))
//!     .with("timestamp", 99999999)
//!     .with("packets_sent", 69)
//!     .with("packets_received", 69)
//!     .with("packet_loss", 0)
//!     .with("total_burst_time", 2.25)
//!     .with("rtt_min", 1)
//!     .with("rtt_avg", 5)
//!     .with("rtt_max", 10)
//!     .with("rtt_mdev", 7);
//!
//! let result = LatencyResult::from_generic(&generic).unwrap();
//! assert_eq!(result.state, SessionState::Stopping);
//! ```

mod client_params;
mod enums;
mod latency_result;
mod value;

// Re-export all public types
pub use client_params::ClientParams;
pub use enums::{IpType, ProtType, SchemaEnum, SessionState};
pub use latency_result::LatencyResult;
pub use value::{GenericRecord, Value};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Record;

    use proptest::prelude::*;

    prop_compose! {
        fn arb_client_params()(
            agent_ip in "[0-9.]{0,15}",
            dest_ip in "\\PC{0,40}",
            ip_type in prop::sample::select(IpType::VARIANTS),
            prot_type in prop::sample::select(ProtType::VARIANTS),
            interval in any::<i32>(),
            id in any::<i32>(),
            state in prop::sample::select(SessionState::VARIANTS),
            port in any::<i32>()
        ) -> ClientParams {
            ClientParams { agent_ip, dest_ip, ip_type, prot_type, interval, id, state, port }
        }
    }

    proptest! {
        #[test]
        fn prop_client_params_generic_round_trip(params in arb_client_params()) {
            let generic = params.to_generic();
            prop_assert_eq!(generic.len(), ClientParams::FIELDS.len());
            prop_assert_eq!(ClientParams::from_generic(&generic).unwrap(), params);
        }

        #[test]
        fn prop_generic_field_names_match_bindings(params in arb_client_params()) {
            let generic = params.to_generic();
            for (binding, (name, _)) in ClientParams::FIELDS.iter().zip(generic.fields()) {
                prop_assert_eq!(binding.name, name);
            }
        }
    }

    #[test]
    fn latency_result_binds_every_field() {
        let result = crate::test_utils::sample_latency_result();
        let generic = result.to_generic();
        assert_eq!(generic.len(), LatencyResult::FIELDS.len());
        assert_eq!(LatencyResult::from_generic(&generic).unwrap(), result);
    }

    #[test]
    fn from_generic_reports_the_failing_field() {
        let mut generic = crate::test_utils::sample_client_params().to_generic();
        generic.set("protType", Value::Enum("FILLER".to_string()));
        let err = ClientParams::from_generic(&generic).unwrap_err();
        assert_eq!(err.field(), Some("protType"));
    }

    #[test]
    fn display_lists_fields_in_schema_order() {
        let text = crate::test_utils::sample_client_params().to_string();
        let keys: Vec<&str> = text.lines().filter_map(|l| l.split(':').next()).collect();
        assert_eq!(
            keys,
            ["agent_ip", "dest_ip", "ipType", "protType", "interval", "id", "state", "port"]
        );
        assert!(text.contains("ipType: IPTYPE_IPV4"));
    }
}
