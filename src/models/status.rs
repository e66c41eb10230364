// Status snapshot composed once per poll

use serde::{Deserialize, Serialize};

/// Sentinel for any field that could not be determined.
pub const UNKNOWN: &str = "Unknown";

/// Classification of the interface that supplied the LAN address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionKind {
    WiFi,
    Ethernet,
    Other(String),
}

impl ConnectionKind {
    /// Substring/prefix match on the interface name, case-insensitive.
    pub fn classify(interface_name: &str) -> Self {
        let lower = interface_name.to_lowercase();
        if lower.contains("wi-fi")
            || lower.contains("wlan")
            || lower.starts_with("wlp")
            || lower.starts_with("wlx")
        {
            ConnectionKind::WiFi
        } else if lower.contains("ethernet") || lower.starts_with("eth") || lower.starts_with("en")
        {
            ConnectionKind::Ethernet
        } else {
            ConnectionKind::Other(interface_name.to_string())
        }
    }

    pub fn label(&self) -> String {
        match self {
            ConnectionKind::WiFi => "Wi-Fi".into(),
            ConnectionKind::Ethernet => "Ethernet (LAN)".into(),
            ConnectionKind::Other(name) => name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub wan_address: String,
    pub lan_address: String,
    pub connection_type: String,
    pub dns_servers: Vec<String>,
    pub is_online: bool,
    pub latency_ms: Option<f64>,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            wan_address: UNKNOWN.into(),
            lan_address: UNKNOWN.into(),
            connection_type: UNKNOWN.into(),
            dns_servers: vec![UNKNOWN.into()],
            is_online: false,
            latency_ms: None,
        }
    }
}

impl StatusSnapshot {
    /// Resolver list joined for display, e.g. "1.1.1.1, 8.8.8.8".
    pub fn dns_display(&self) -> String {
        self.dns_servers.join(", ")
    }

    /// Plain ordered key/value pairs for external loggers.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("WanIP", self.wan_address.clone()),
            ("LanIP", self.lan_address.clone()),
            ("ConnectionType", self.connection_type.clone()),
            ("DNS", self.dns_display()),
            ("Online", self.is_online.to_string()),
            (
                "Ping",
                self.latency_ms
                    .map(|ms| format!("{ms} ms"))
                    .unwrap_or_else(|| "N/A".into()),
            ),
        ]
    }
}
