// Host health via sysinfo: memory, CPU inventory, uptime, OS release, hostname

pub mod windows_build;

use crate::error::HealthError;
use crate::models::{HostHealth, UNKNOWN};
use crate::platform::OsFamily;
use std::sync::Arc;
use sysinfo::System;
use tracing::instrument;

/// Raw OS counters for one reading, before labels are derived.
#[derive(Debug, Clone, Default)]
pub struct HostReadings {
    pub total_memory: u64,
    pub available_memory: u64,
    /// Brand of CPU 0, if the inventory is non-empty.
    pub cpu_brand: Option<String>,
    pub cpu_count: usize,
    pub uptime_secs: u64,
    pub host_name: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub kernel_version: Option<String>,
}

pub struct HealthRepo {
    sys: Arc<std::sync::Mutex<System>>,
    family: OsFamily,
}

impl Default for HealthRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthRepo {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        Self {
            sys: Arc::new(std::sync::Mutex::new(sys)),
            family: OsFamily::current(),
        }
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "report_health"))]
    pub async fn report_health(&self) -> Result<HostHealth, HealthError> {
        let sys = self.sys.clone();
        let family = self.family;
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| HealthError::LockPoisoned(e.to_string()))?;
            sys.refresh_memory();
            sys.refresh_cpu_all();

            let readings = HostReadings {
                total_memory: sys.total_memory(),
                available_memory: sys.available_memory(),
                cpu_brand: sys.cpus().first().map(|c| c.brand().trim().to_string()),
                cpu_count: sys.cpus().len(),
                uptime_secs: System::uptime(),
                host_name: System::host_name(),
                os_name: System::name(),
                os_version: System::os_version(),
                kernel_version: System::kernel_version(),
            };
            Ok(build_host_health(&readings, family))
        })
        .await?
    }
}

/// Derives the reported health record. Missing readings become sentinels.
pub fn build_host_health(r: &HostReadings, family: OsFamily) -> HostHealth {
    let total = r.total_memory;
    let free = r.available_memory.min(total);
    let used = total - free;
    let mem_usage_percent = if total > 0 {
        ((used as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    let cpu_model = r
        .cpu_brand
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN.into());

    let os_release = r
        .kernel_version
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN.into());

    let (friendly_os_name, readable_os_version) = match family {
        OsFamily::Windows => {
            let build = windows_build::parse_build(&os_release);
            (
                windows_build::friendly_name(build).to_string(),
                windows_build::readable_version(&os_release),
            )
        }
        OsFamily::Posix => (
            r.os_name
                .clone()
                .unwrap_or_else(|| std::env::consts::OS.into()),
            r.os_version.clone().unwrap_or_else(|| os_release.clone()),
        ),
    };

    HostHealth {
        uptime_seconds: r.uptime_secs,
        total_mem_bytes: total,
        used_mem_bytes: used,
        free_mem_bytes: free,
        mem_usage_percent,
        cpu_model,
        cpu_core_count: r.cpu_count.min(u32::MAX as usize) as u32,
        platform: std::env::consts::OS.into(),
        friendly_os_name,
        readable_os_version,
        os_release,
        hostname: r.host_name.clone().unwrap_or_else(|| UNKNOWN.into()),
    }
}
