//! Record schemas exchanged between the collector and its consumers.
//!
//! Both schemas declare a trailing `FILLER` symbol on every enum. It has no
//! native variant; a buffer carrying it decodes to an error.

/// Schema for [`ClientParams`](crate::types::ClientParams).
pub const CLIENT_PARAMS_SCHEMA: &str = r#"{
  "type": "record",
  "name": "clientparams",
  "fields": [
    { "name": "agent_ip", "type": "string" },
    { "name": "dest_ip", "type": "string" },
    {
      "name": "ipType",
      "type": {
        "type": "enum",
        "name": "IpType",
        "symbols": ["IPTYPE_IPV4", "IPTYPE_IPV6", "IPTYPE_INVALID", "FILLER"]
      }
    },
    {
      "name": "protType",
      "type": {
        "type": "enum",
        "name": "ProtType",
        "symbols": ["PROTTYPE_ICMP", "PROTTYPE_TCP", "PROTTYPE_UNSUPPORTED", "FILLER"]
      }
    },
    { "name": "interval", "type": "int" },
    { "name": "id", "type": "int" },
    {
      "name": "state",
      "type": {
        "type": "enum",
        "name": "SessionState",
        "symbols": ["SESSION_STATE_RUNNING", "SESSION_STATE_STOPPING", "SESSION_STATE_STOPPED", "FILLER"]
      }
    },
    { "name": "port", "type": "int" }
  ]
}"#;

/// Schema for [`LatencyResult`](crate::types::LatencyResult).
pub const LATENCY_RESULT_SCHEMA: &str = r#"{
  "type": "record",
  "name": "latencyresult",
  "fields": [
    { "name": "agent_ip", "type": "string" },
    {
      "name": "state",
      "type": {
        "type": "enum",
        "name": "SessionState",
        "symbols": ["SESSION_STATE_RUNNING", "SESSION_STATE_STOPPING", "SESSION_STATE_STOPPED", "FILLER"]
      }
    },
    { "name": "timestamp", "type": "int" },
    { "name": "packets_sent", "type": "int" },
    { "name": "packets_received", "type": "int" },
    { "name": "packet_loss", "type": "int" },
    { "name": "total_burst_time", "type": "double" },
    { "name": "rtt_min", "type": "int" },
    { "name": "rtt_avg", "type": "int" },
    { "name": "rtt_max", "type": "int" },
    { "name": "rtt_mdev", "type": "int" }
  ]
}"#;
