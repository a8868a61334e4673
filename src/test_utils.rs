//! Sample records shared by unit tests, benches and integration tests

#![cfg(any(test, feature = "benchmark"))]

use crate::types::{ClientParams, IpType, LatencyResult, ProtType, SessionState};

/// Session descriptor as the collector sends it for an ICMP probe.
pub fn sample_client_params() -> ClientParams {
    ClientParams {
        agent_ip: "1.10.23.111".to_string(),
        dest_ip: "1.67.21.345".to_string(),
        ip_type: IpType::Ipv4,
        prot_type: ProtType::Icmp,
        interval: 2,
        id: 1,
        state: SessionState::Running,
        port: 4000,
    }
}

/// Result of a burst whose session is being stopped.
pub fn sample_latency_result() -> LatencyResult {
    LatencyResult {
        agent_ip: "100.000.000".to_string(),
        state: SessionState::Stopping,
        timestamp: 99999999,
        packets_sent: 69,
        packets_received: 69,
        packet_loss: 0,
        total_burst_time: 2.25,
        rtt_min: 1,
        rtt_avg: 5,
        rtt_max: 10,
        rtt_mdev: 7,
    }
}
