// Probe requests, raw results and parsed partial results

use serde::{Deserialize, Serialize};

/// Logical diagnostic; the platform table turns it into a concrete command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    Reachability,
    RouteTrace,
    WirelessInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub kind: DiagnosticKind,
    pub target_host: String,
    pub timeout_ms: u64,
}

impl ProbeRequest {
    pub fn new(kind: DiagnosticKind, target_host: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            kind,
            target_host: target_host.into(),
            timeout_ms,
        }
    }
}

/// Opaque output of one external command. Consumed once by its parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    pub exit_succeeded: bool,
    pub raw_output: String,
    pub raw_error: String,
    #[serde(default)]
    pub timed_out: bool,
}

impl ProbeResult {
    /// A probe that never produced an exit status (spawn failure, no command for this OS).
    pub fn failed(raw_error: impl Into<String>) -> Self {
        Self {
            exit_succeeded: false,
            raw_output: String::new(),
            raw_error: raw_error.into(),
            timed_out: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReachability {
    pub is_online: bool,
    pub latency_ms: Option<f64>,
}

/// Band/signal of the active wireless adapter; `None` fields are a normal outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirelessDetails {
    pub band: Option<String>,
    pub signal: Option<String>,
}

/// Refused and timed-out connections both count as Closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortProbeResult {
    pub port: u16,
    pub status: PortStatus,
}
