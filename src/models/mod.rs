// Domain models: probe I/O, status snapshot, host health

mod health;
mod probe;
mod status;

pub use health::HostHealth;
pub use probe::{
    DiagnosticKind, ParsedReachability, PortProbeResult, PortStatus, ProbeRequest, ProbeResult,
    WirelessDetails,
};
pub use status::{ConnectionKind, StatusSnapshot, UNKNOWN};
