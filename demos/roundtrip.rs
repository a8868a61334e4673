//! Encode and decode one record of each type, logging the decoded fields.
//!
//! Run with `RUST_LOG=debug cargo run --example roundtrip` to see codec logs.

use anyhow::{Context, Result};
use nwsla::{
    ClientParams, IpType, LatencyResult, ProtType, RecordCodec, SchemaRegistry, SessionState,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let registry = SchemaRegistry::builtin().context("compiling built-in schemas")?;
    let client_codec = RecordCodec::<ClientParams>::new(registry.client_params())?;
    let result_codec = RecordCodec::<LatencyResult>::new(registry.latency_result())?;

    let params = ClientParams {
        agent_ip: "100.000.000".to_string(),
        dest_ip: "999.999.999".to_string(),
        ip_type: IpType::Ipv4,
        prot_type: ProtType::Tcp,
        interval: 7991,
        id: 7,
        state: SessionState::Stopped,
        port: 8900,
    };

    let result = LatencyResult {
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
    };

    let bytes = client_codec.encode(&params).context("encoding client params")?;
    info!("Client params: {} bytes", bytes.len());
    let decoded = client_codec.decode(&bytes).context("decoding client params")?;
    info!("Client Parameters:\n{}", decoded);

    let bytes = result_codec.encode(&result).context("encoding latency result")?;
    info!("Latency result: {} bytes", bytes.len());
    let decoded = result_codec.decode(&bytes).context("decoding latency result")?;
    info!("Latency Results:\n{}", decoded);

    Ok(())
}
