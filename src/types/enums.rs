//! Enumerated field types and their schema symbols
//!
//! Native enums never cross the wire by ordinal. Each variant has exactly
//! one symbol name; the codec looks that name up in the schema's symbol list
//! to find the wire index, and maps decoded symbols back through
//! [`SchemaEnum::from_symbol`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Native enum bound to a schema enum by symbol name.
pub trait SchemaEnum: Copy + Sized + 'static {
    /// Every native variant.
    const VARIANTS: &'static [Self];

    /// Symbols of [`SchemaEnum::VARIANTS`], position for position.
    const SYMBOLS: &'static [&'static str];

    /// Schema symbol for this variant.
    fn symbol(self) -> &'static str;

    /// Variant for `symbol`, or `None` when no variant carries that symbol.
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.symbol() == symbol)
    }
}

/// Address family of a probed session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum IpType {
    Ipv4,
    Ipv6,
    Invalid,
}

impl SchemaEnum for IpType {
    const VARIANTS: &'static [Self] = &[IpType::Ipv4, IpType::Ipv6, IpType::Invalid];
    const SYMBOLS: &'static [&'static str] = &["IPTYPE_IPV4", "IPTYPE_IPV6", "IPTYPE_INVALID"];

    fn symbol(self) -> &'static str {
        match self {
            IpType::Ipv4 => "IPTYPE_IPV4",
            IpType::Ipv6 => "IPTYPE_IPV6",
            IpType::Invalid => "IPTYPE_INVALID",
        }
    }
}

/// Probe protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum ProtType {
    Icmp,
    Tcp,
    Unsupported,
}

impl SchemaEnum for ProtType {
    const VARIANTS: &'static [Self] = &[ProtType::Icmp, ProtType::Tcp, ProtType::Unsupported];
    const SYMBOLS: &'static [&'static str] =
        &["PROTTYPE_ICMP", "PROTTYPE_TCP", "PROTTYPE_UNSUPPORTED"];

    fn symbol(self) -> &'static str {
        match self {
            ProtType::Icmp => "PROTTYPE_ICMP",
            ProtType::Tcp => "PROTTYPE_TCP",
            ProtType::Unsupported => "PROTTYPE_UNSUPPORTED",
        }
    }
}

/// Lifecycle state of a measurement session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum SessionState {
    Running,
    Stopping,
    Stopped,
}

impl SchemaEnum for SessionState {
    const VARIANTS: &'static [Self] =
        &[SessionState::Running, SessionState::Stopping, SessionState::Stopped];
    const SYMBOLS: &'static [&'static str] =
        &["SESSION_STATE_RUNNING", "SESSION_STATE_STOPPING", "SESSION_STATE_STOPPED"];

    fn symbol(self) -> &'static str {
        match self {
            SessionState::Running => "SESSION_STATE_RUNNING",
            SessionState::Stopping => "SESSION_STATE_STOPPING",
            SessionState::Stopped => "SESSION_STATE_STOPPED",
        }
    }
}

impl fmt::Display for IpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for ProtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
