// Error types for the probe, network and health seams

use thiserror::Error;

/// Why an external probe produced no usable exit status. Rendered into
/// `ProbeResult::raw_error`; never returned past the runner.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed waiting on {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} timed out after {timeout_ms} ms")]
    Timeout { program: String, timeout_ms: u64 },
}

/// OS network-state reads. Absorbed into sentinels by the composer.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("interface enumeration failed: {0}")]
    Interfaces(#[source] std::io::Error),
    #[error("resolver configuration unreadable: {0}")]
    Resolver(#[source] std::io::Error),
    #[error("network adapter query failed: {0}")]
    Adapters(String),
    #[error("resolver configuration read is not supported on this platform")]
    ResolverUnsupported,
}

/// Host-metric read failure; surfaced to the caller of that one report.
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("sysinfo lock poisoned: {0}")]
    LockPoisoned(String),
    #[error("sysinfo task join: {0}")]
    Join(#[from] tokio::task::JoinError),
}
