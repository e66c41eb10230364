// Bounded-timeout TCP connect scan

use crate::models::{PortProbeResult, PortStatus};
use futures_util::stream::{self, StreamExt};
use tokio::net::TcpStream;
use tokio::time::{Duration, timeout};
use tracing::{debug, instrument};

/// Scans `ports` on `host` with at most `max_concurrent` attempts in flight.
/// Output order matches input order regardless of completion order.
#[instrument(skip(ports), fields(port_count = ports.len()))]
pub async fn scan_ports(
    ports: &[u16],
    host: &str,
    per_port_timeout_ms: u64,
    max_concurrent: usize,
) -> Vec<PortProbeResult> {
    let per_port = Duration::from_millis(per_port_timeout_ms);
    stream::iter(ports.iter().copied())
        .map(|port| check_port(host, port, per_port))
        .buffered(max_concurrent.max(1))
        .collect()
        .await
}

/// One isolated attempt. The stream is dropped (socket closed) on every path.
pub async fn check_port(host: &str, port: u16, limit: Duration) -> PortProbeResult {
    let status = match timeout(limit, TcpStream::connect((host, port))).await {
        Ok(Ok(stream)) => {
            drop(stream);
            PortStatus::Open
        }
        Ok(Err(e)) => {
            debug!(port, error = %e, "connect refused");
            PortStatus::Closed
        }
        Err(_) => {
            debug!(port, timeout_ms = limit.as_millis() as u64, "connect timed out");
            PortStatus::Closed
        }
    };
    PortProbeResult { port, status }
}
