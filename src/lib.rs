//! Schema-driven binary codec for network SLA telemetry records.
//!
//! A collector describes probing sessions with [`ClientParams`] and reports
//! measurements with [`LatencyResult`]. Both travel as Avro binary, encoded
//! and decoded against Avro JSON record schemas compiled once at startup.
//!
//! # Features
//!
//! - **Schema Registry**: compile and query record schemas ([`schema`])
//! - **Record Codec**: encode and decode records field by field ([`codec`])
//! - **Symbol-safe enums**: enum values are matched by symbol name, never by
//!   native ordinal
//! - **Typed errors**: every failure is a [`CodecError`]; nothing is partially
//!   returned
//!
//! # Quick Start
//!
//! ```rust
//! use nwsla::{LatencyResult, RecordCodec, SchemaRegistry, SessionState};
//!
//! fn main() -> nwsla::Result<()> {
//!     let registry = SchemaRegistry::builtin()?;
//!     let codec = RecordCodec::<LatencyResult>::new(registry.latency_result())?;
//!
//!     let result = LatencyResult {
//!         agent_ip: "100.000.000".to_string(),
//!         state: SessionState::Stopping,
//!         timestamp: 99999999,
//!         packets_sent: 69,
//!         packets_received: 69,
//!         packet_loss: 0,
//!         total_burst_time: 2.25,
//!         rtt_min: 1,
//!         rtt_avg: 5,
//!         rtt_max: 10,
//!         rtt_mdev: 7,
//!     };
//!
//!     let bytes = codec.encode(&result)?;
//!     assert_eq!(codec.decode(&bytes)?, result);
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Schema compilation and encoding
pub mod codec;
pub mod schema;

// Core exports
pub use error::*;
pub use types::*;

pub use codec::{Record, RecordCodec, decode, encode};
pub use schema::{Schema, SchemaRegistry};
