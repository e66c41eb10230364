// Diagnostics engine: composes status snapshots from independently failing probes,
// and fronts the port scan, route trace and host-health operations.

use crate::config::{PortScanConfig, ProbeConfig};
use crate::error::HealthError;
use crate::health_repo::HealthRepo;
use crate::models::{
    ConnectionKind, DiagnosticKind, HostHealth, ParsedReachability, PortProbeResult, ProbeRequest,
    StatusSnapshot, UNKNOWN, WirelessDetails,
};
use crate::network_repo::{HostNetwork, SystemNetwork, first_external_ipv4};
use crate::parsers;
use crate::platform::OsFamily;
use crate::port_scanner;
use crate::probe_runner::{CommandExecutor, ProcessRunner, run_request};
use tracing::{debug, instrument, warn};

const ROUTE_TRACE_FAILED: &str = "Trace failed";

/// LAN address and connection label from the interface step.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LinkInfo {
    lan_address: String,
    connection_type: String,
}

impl Default for LinkInfo {
    fn default() -> Self {
        Self {
            lan_address: UNKNOWN.into(),
            connection_type: UNKNOWN.into(),
        }
    }
}

/// Stateless across polls: every call builds its result from scratch.
pub struct DiagnosticsEngine<E = ProcessRunner, N = SystemNetwork> {
    executor: E,
    network: N,
    health: HealthRepo,
    family: OsFamily,
    probes: ProbeConfig,
    port_scan: PortScanConfig,
}

impl DiagnosticsEngine {
    /// Engine wired to the real process facility and host network.
    pub fn system(probes: ProbeConfig, port_scan: PortScanConfig) -> Self {
        Self::new(ProcessRunner, SystemNetwork, probes, port_scan)
    }
}

impl<E: CommandExecutor, N: HostNetwork> DiagnosticsEngine<E, N> {
    pub fn new(executor: E, network: N, probes: ProbeConfig, port_scan: PortScanConfig) -> Self {
        Self {
            executor,
            network,
            health: HealthRepo::new(),
            family: OsFamily::current(),
            probes,
            port_scan,
        }
    }

    /// Overrides the detected OS family (command syntax and wireless support).
    pub fn with_family(mut self, family: OsFamily) -> Self {
        self.family = family;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Always returns a snapshot; each failed sub-probe only degrades its own fields.
    /// `wan_address` is the peer address seen by the receiving socket.
    #[instrument(skip(self), fields(operation = "compose_status"))]
    pub async fn compose_status(&self, wan_address: Option<String>) -> StatusSnapshot {
        let (reachability, link) = tokio::join!(self.probe_reachability(), self.probe_link());
        let dns_servers = self.read_dns_servers();

        let snapshot = StatusSnapshot {
            wan_address: wan_address
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN.into()),
            lan_address: link.lan_address,
            connection_type: link.connection_type,
            dns_servers,
            is_online: reachability.is_online,
            latency_ms: reachability.latency_ms,
        };
        debug!(?snapshot, "status composed");
        snapshot
    }

    pub async fn report_health(&self) -> Result<HostHealth, HealthError> {
        self.health.report_health().await
    }

    /// Scans `ports` against the configured host with the configured bound and concurrency.
    pub async fn scan_ports(&self, ports: &[u16]) -> Vec<PortProbeResult> {
        port_scanner::scan_ports(
            ports,
            &self.port_scan.host,
            self.port_scan.timeout_ms,
            self.port_scan.max_concurrent,
        )
        .await
    }

    /// Opaque hop-by-hop report. On failure, whatever the tool printed is still returned.
    #[instrument(skip(self), fields(operation = "run_route_trace"))]
    pub async fn run_route_trace(&self, target: &str) -> String {
        let request = ProbeRequest::new(
            DiagnosticKind::RouteTrace,
            target,
            self.probes.route_trace_timeout_ms,
        );
        let Some(result) = run_request(&self.executor, &request, self.family).await else {
            return ROUTE_TRACE_FAILED.into();
        };
        if result.exit_succeeded {
            return parsers::parse_route_trace(&result.raw_output);
        }
        warn!(timed_out = result.timed_out, "route trace did not succeed");
        if !result.raw_output.trim().is_empty() {
            parsers::parse_route_trace(&result.raw_output)
        } else if !result.raw_error.trim().is_empty() {
            parsers::parse_route_trace(&result.raw_error)
        } else {
            ROUTE_TRACE_FAILED.into()
        }
    }

    async fn probe_reachability(&self) -> ParsedReachability {
        let request = ProbeRequest::new(
            DiagnosticKind::Reachability,
            self.probes.reachability_target.as_str(),
            self.probes.reachability_timeout_ms,
        );
        match run_request(&self.executor, &request, self.family).await {
            Some(result) => parsers::parse_reachability(&result.raw_output),
            None => ParsedReachability::default(),
        }
    }

    /// Interface scan, then the wireless probe only if the chosen interface is Wi-Fi.
    async fn probe_link(&self) -> LinkInfo {
        let interfaces = match self.network.interfaces() {
            Ok(i) => i,
            Err(e) => {
                warn!(error = %e, operation = "interfaces", "interface scan failed");
                return LinkInfo::default();
            }
        };
        let Some(selected) = first_external_ipv4(&interfaces) else {
            debug!("no external IPv4 interface");
            return LinkInfo::default();
        };

        let kind = ConnectionKind::classify(&selected.name);
        let mut connection_type = kind.label();
        if kind == ConnectionKind::WiFi
            && let Some(band) = self.probe_wireless().await.and_then(|w| w.band)
        {
            connection_type = format!("{connection_type} ({band})");
        }

        LinkInfo {
            lan_address: selected.addr.to_string(),
            connection_type,
        }
    }

    async fn probe_wireless(&self) -> Option<WirelessDetails> {
        let request = ProbeRequest::new(
            DiagnosticKind::WirelessInfo,
            "",
            self.probes.wireless_timeout_ms,
        );
        let result = run_request(&self.executor, &request, self.family).await?;
        if !result.exit_succeeded {
            debug!(raw_error = %result.raw_error, "wireless query failed");
            return None;
        }
        Some(parsers::parse_wireless(&result.raw_output))
    }

    fn read_dns_servers(&self) -> Vec<String> {
        match self.network.dns_servers() {
            Ok(servers) if !servers.is_empty() => servers,
            Ok(_) => vec![UNKNOWN.into()],
            Err(e) => {
                warn!(error = %e, operation = "dns_servers", "resolver read failed");
                vec![UNKNOWN.into()]
            }
        }
    }
}
