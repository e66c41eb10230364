use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub probes: ProbeConfig,
    #[serde(default)]
    pub port_scan: PortScanConfig,
    pub publishing: PublishingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Targets and hard timeouts for the external-command probes.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    pub reachability_target: String,
    pub reachability_timeout_ms: u64,
    pub wireless_timeout_ms: u64,
    pub route_trace_target: String,
    #[serde(default = "default_route_trace_timeout_ms")]
    pub route_trace_timeout_ms: u64,
}

fn default_route_trace_timeout_ms() -> u64 {
    20_000
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortScanConfig {
    #[serde(default = "default_scan_host")]
    pub host: String,
    #[serde(default = "default_scan_ports")]
    pub ports: Vec<u16>,
    #[serde(default = "default_port_timeout_ms")]
    pub timeout_ms: u64,
    /// Connection attempts in flight at once; 1 scans strictly in order.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for PortScanConfig {
    fn default() -> Self {
        Self {
            host: default_scan_host(),
            ports: default_scan_ports(),
            timeout_ms: default_port_timeout_ms(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

fn default_scan_host() -> String {
    "127.0.0.1".into()
}

pub fn default_scan_ports() -> Vec<u16> {
    vec![21, 22, 53, 80, 443, 3000, 3001, 3306, 3389, 8080]
}

fn default_port_timeout_ms() -> u64 {
    2_000
}

fn default_max_concurrent() -> usize {
    4
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishingConfig {
    /// How often /ws/health pushes a fresh host-health reading.
    pub health_stream_frequency_ms: u64,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.probes.reachability_target.trim().is_empty(),
            "probes.reachability_target must be non-empty"
        );
        anyhow::ensure!(
            self.probes.reachability_timeout_ms > 0,
            "probes.reachability_timeout_ms must be > 0, got {}",
            self.probes.reachability_timeout_ms
        );
        anyhow::ensure!(
            self.probes.wireless_timeout_ms > 0,
            "probes.wireless_timeout_ms must be > 0, got {}",
            self.probes.wireless_timeout_ms
        );
        anyhow::ensure!(
            !self.probes.route_trace_target.trim().is_empty(),
            "probes.route_trace_target must be non-empty"
        );
        anyhow::ensure!(
            self.probes.route_trace_timeout_ms > 0,
            "probes.route_trace_timeout_ms must be > 0, got {}",
            self.probes.route_trace_timeout_ms
        );
        anyhow::ensure!(
            !self.port_scan.host.trim().is_empty(),
            "port_scan.host must be non-empty"
        );
        anyhow::ensure!(
            !self.port_scan.ports.is_empty(),
            "port_scan.ports must list at least one port"
        );
        anyhow::ensure!(
            !self.port_scan.ports.contains(&0),
            "port_scan.ports must not contain port 0"
        );
        anyhow::ensure!(
            self.port_scan.timeout_ms > 0,
            "port_scan.timeout_ms must be > 0, got {}",
            self.port_scan.timeout_ms
        );
        anyhow::ensure!(
            self.port_scan.max_concurrent > 0,
            "port_scan.max_concurrent must be > 0, got {}",
            self.port_scan.max_concurrent
        );
        anyhow::ensure!(
            self.publishing.health_stream_frequency_ms > 0,
            "publishing.health_stream_frequency_ms must be > 0, got {}",
            self.publishing.health_stream_frequency_ms
        );
        Ok(())
    }
}
