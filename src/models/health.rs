// Host health snapshot

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostHealth {
    pub uptime_seconds: u64,
    pub total_mem_bytes: u64,
    pub used_mem_bytes: u64,
    pub free_mem_bytes: u64,
    /// Rounded to the nearest whole percent.
    pub mem_usage_percent: u32,
    pub cpu_model: String,
    pub cpu_core_count: u32,
    /// OS family as reported by the runtime, e.g. "windows", "linux".
    pub platform: String,
    pub friendly_os_name: String,
    pub readable_os_version: String,
    pub os_release: String,
    pub hostname: String,
}
