//! Latency measurement result

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{GenericRecord, SchemaEnum, SessionState, Value};
use crate::Result;
use crate::codec::{FieldBinding, FieldKind, Record};

/// Outcome of one probe burst.
///
/// Round-trip times are in milliseconds; `total_burst_time` is in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct LatencyResult {
    pub agent_ip: String,
    pub state: SessionState,
    /// Unix timestamp of the burst
    pub timestamp: i32,
    pub packets_sent: i32,
    pub packets_received: i32,
    /// Lost packets, in percent
    pub packet_loss: i32,
    pub total_burst_time: f64,
    pub rtt_min: i32,
    pub rtt_avg: i32,
    pub rtt_max: i32,
    /// Mean deviation of the round-trip time
    pub rtt_mdev: i32,
}

impl Record for LatencyResult {
    const RECORD_NAME: &'static str = "latencyresult";

    const FIELDS: &'static [FieldBinding] = &[
        FieldBinding::new("agent_ip", FieldKind::String),
        FieldBinding::new("state", FieldKind::Enum(SessionState::SYMBOLS)),
        FieldBinding::new("timestamp", FieldKind::Int),
        FieldBinding::new("packets_sent", FieldKind::Int),
        FieldBinding::new("packets_received", FieldKind::Int),
        FieldBinding::new("packet_loss", FieldKind::Int),
        FieldBinding::new("total_burst_time", FieldKind::Double),
        FieldBinding::new("rtt_min", FieldKind::Int),
        FieldBinding::new("rtt_avg", FieldKind::Int),
        FieldBinding::new("rtt_max", FieldKind::Int),
        FieldBinding::new("rtt_mdev", FieldKind::Int),
    ];

    fn to_generic(&self) -> GenericRecord {
        GenericRecord::with_capacity(Self::RECORD_NAME, Self::FIELDS.len())
            .with("agent_ip", self.agent_ip.as_str())
            .with("state", Value::symbol(self.state))
            .with("timestamp", self.timestamp)
            .with("packets_sent", self.packets_sent)
            .with("packets_received", self.packets_received)
            .with("packet_loss", self.packet_loss)
            .with("total_burst_time", self.total_burst_time)
            .with("rtt_min", self.rtt_min)
            .with("rtt_avg", self.rtt_avg)
            .with("rtt_max", self.rtt_max)
            .with("rtt_mdev", self.rtt_mdev)
    }

    fn from_generic(record: &GenericRecord) -> Result<Self> {
        Ok(Self {
            agent_ip: record.string("agent_ip")?.to_string(),
            state: record.variant("state")?,
            timestamp: record.int("timestamp")?,
            packets_sent: record.int("packets_sent")?,
            packets_received: record.int("packets_received")?,
            packet_loss: record.int("packet_loss")?,
            total_burst_time: record.double("total_burst_time")?,
            rtt_min: record.int("rtt_min")?,
            rtt_avg: record.int("rtt_avg")?,
            rtt_max: record.int("rtt_max")?,
            rtt_mdev: record.int("rtt_mdev")?,
        })
    }
}

impl fmt::Display for LatencyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "agent_ip: {}", self.agent_ip)?;
        writeln!(f, "state: {}", self.state)?;
        writeln!(f, "timestamp: {}", self.timestamp)?;
        writeln!(f, "packets_sent: {}", self.packets_sent)?;
        writeln!(f, "packets_received: {}", self.packets_received)?;
        writeln!(f, "packet_loss: {}", self.packet_loss)?;
        writeln!(f, "total_burst_time: {}", self.total_burst_time)?;
        writeln!(f, "rtt_min: {}", self.rtt_min)?;
        writeln!(f, "rtt_avg: {}", self.rtt_avg)?;
        writeln!(f, "rtt_max: {}", self.rtt_max)?;
        write!(f, "rtt_mdev: {}", self.rtt_mdev)
    }
}
