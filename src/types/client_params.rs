//! Client session descriptor

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{GenericRecord, IpType, ProtType, SchemaEnum, SessionState, Value};
use crate::Result;
use crate::codec::{FieldBinding, FieldKind, Record};

/// Parameters of one probing session, sent by the collector when a session
/// is configured or changes state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ClientParams {
    /// Address of the agent running the probe
    pub agent_ip: String,
    /// Address being probed
    pub dest_ip: String,
    pub ip_type: IpType,
    pub prot_type: ProtType,
    /// Probe interval in seconds
    pub interval: i32,
    /// Session identifier
    pub id: i32,
    pub state: SessionState,
    /// Destination port (TCP probes)
    pub port: i32,
}

impl Record for ClientParams {
    const RECORD_NAME: &'static str = "clientparams";

    const FIELDS: &'static [FieldBinding] = &[
        FieldBinding::new("agent_ip", FieldKind::String),
        FieldBinding::new("dest_ip", FieldKind::String),
        FieldBinding::new("ipType", FieldKind::Enum(IpType::SYMBOLS)),
        FieldBinding::new("protType", FieldKind::Enum(ProtType::SYMBOLS)),
        FieldBinding::new("interval", FieldKind::Int),
        FieldBinding::new("id", FieldKind::Int),
        FieldBinding::new("state", FieldKind::Enum(SessionState::SYMBOLS)),
        FieldBinding::new("port", FieldKind::Int),
    ];

    fn to_generic(&self) -> GenericRecord {
        GenericRecord::with_capacity(Self::RECORD_NAME, Self::FIELDS.len())
            .with("agent_ip", self.agent_ip.as_str())
            .with("dest_ip", self.dest_ip.as_str())
            .with("ipType", Value::symbol(self.ip_type))
            .with("protType", Value::symbol(self.prot_type))
            .with("interval", self.interval)
            .with("id", self.id)
            .with("state", Value::symbol(self.state))
            .with("port", self.port)
    }

    fn from_generic(record: &GenericRecord) -> Result<Self> {
        Ok(Self {
            agent_ip: record.string("agent_ip")?.to_string(),
            dest_ip: record.string("dest_ip")?.to_string(),
            ip_type: record.variant("ipType")?,
            prot_type: record.variant("protType")?,
            interval: record.int("interval")?,
            id: record.int("id")?,
            state: record.variant("state")?,
            port: record.int("port")?,
        })
    }
}

impl fmt::Display for ClientParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "agent_ip: {}", self.agent_ip)?;
        writeln!(f, "dest_ip: {}", self.dest_ip)?;
        writeln!(f, "ipType: {}", self.ip_type)?;
        writeln!(f, "protType: {}", self.prot_type)?;
        writeln!(f, "interval: {}", self.interval)?;
        writeln!(f, "id: {}", self.id)?;
        writeln!(f, "state: {}", self.state)?;
        write!(f, "port: {}", self.port)
    }
}
