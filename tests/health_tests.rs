// Host health tests: Windows build table, derived fields, live sysinfo read

use netpulse::health_repo::windows_build::{friendly_name, readable_version, version_label};
use netpulse::health_repo::{HealthRepo, HostReadings, build_host_health};
use netpulse::models::UNKNOWN;
use netpulse::platform::OsFamily;

#[test]
fn build_table_matches_known_releases() {
    assert_eq!(version_label(26100), "Version 24H2");
    assert_eq!(version_label(27000), "Version 24H2");
    assert_eq!(version_label(22631), "Version 23H2");
    assert_eq!(version_label(22621), "Version 22H2");
    assert_eq!(version_label(22000), "Version 21H2 (Win 11)");
    assert_eq!(version_label(19045), "Version 22H2 (Win 10)");
    assert_eq!(version_label(19044), "Version 21H2 (Win 10)");
    assert_eq!(version_label(19043), "Version 21H1");
}

#[test]
fn builds_below_table_pass_through_as_build_label() {
    assert_eq!(version_label(19042), "Build 19042");
    assert_eq!(version_label(0), "Build 0");
}

#[test]
fn readable_version_parses_release_strings() {
    assert_eq!(readable_version("10.0.26100"), "Version 24H2");
    assert_eq!(readable_version("10.0.19044"), "Version 21H2 (Win 10)");
    assert_eq!(readable_version("not-a-build"), "not-a-build");
}

#[test]
fn windows_11_starts_at_build_22000() {
    assert_eq!(friendly_name(Some(22000)), "Windows 11");
    assert_eq!(friendly_name(Some(21999)), "Windows 10");
    assert_eq!(friendly_name(None), "Windows 10");
}

fn readings() -> HostReadings {
    HostReadings {
        total_memory: 16 * 1024 * 1024 * 1024,
        available_memory: 4 * 1024 * 1024 * 1024,
        cpu_brand: Some("AMD Ryzen 7 5800X 8-Core Processor".into()),
        cpu_count: 16,
        uptime_secs: 3_600,
        host_name: Some("desk-01".into()),
        os_name: Some("Windows".into()),
        os_version: Some("11 (26100)".into()),
        kernel_version: Some("26100".into()),
    }
}

#[test]
fn windows_health_uses_build_table() {
    let health = build_host_health(&readings(), OsFamily::Windows);
    assert_eq!(health.friendly_os_name, "Windows 11");
    assert_eq!(health.readable_os_version, "Version 24H2");
    assert_eq!(health.os_release, "26100");
    assert_eq!(health.total_mem_bytes, 16 * 1024 * 1024 * 1024);
    assert_eq!(health.used_mem_bytes, 12 * 1024 * 1024 * 1024);
    assert_eq!(health.free_mem_bytes, 4 * 1024 * 1024 * 1024);
    assert_eq!(health.mem_usage_percent, 75);
    assert_eq!(health.cpu_model, "AMD Ryzen 7 5800X 8-Core Processor");
    assert_eq!(health.cpu_core_count, 16);
    assert_eq!(health.uptime_seconds, 3_600);
    assert_eq!(health.hostname, "desk-01");
}

#[test]
fn posix_health_uses_os_name_and_version() {
    let r = HostReadings {
        os_name: Some("Ubuntu".into()),
        os_version: Some("24.04".into()),
        kernel_version: Some("6.8.0-45-generic".into()),
        ..readings()
    };
    let health = build_host_health(&r, OsFamily::Posix);
    assert_eq!(health.friendly_os_name, "Ubuntu");
    assert_eq!(health.readable_os_version, "24.04");
    assert_eq!(health.os_release, "6.8.0-45-generic");
}

#[test]
fn missing_readings_become_sentinels() {
    let health = build_host_health(&HostReadings::default(), OsFamily::Posix);
    assert_eq!(health.cpu_model, UNKNOWN);
    assert_eq!(health.cpu_core_count, 0);
    assert_eq!(health.hostname, UNKNOWN);
    assert_eq!(health.os_release, UNKNOWN);
    assert_eq!(health.readable_os_version, UNKNOWN);
    assert_eq!(health.mem_usage_percent, 0);
}

#[test]
fn usage_percent_rounds_to_nearest() {
    let r = HostReadings {
        total_memory: 3,
        available_memory: 1,
        ..HostReadings::default()
    };
    // 2/3 = 66.67%
    assert_eq!(build_host_health(&r, OsFamily::Posix).mem_usage_percent, 67);
}

#[tokio::test]
async fn live_report_is_consistent() {
    let repo = HealthRepo::new();
    let health = repo.report_health().await.expect("report_health");
    assert!(health.total_mem_bytes >= health.used_mem_bytes);
    assert_eq!(
        health.used_mem_bytes + health.free_mem_bytes,
        health.total_mem_bytes
    );
    assert!(health.mem_usage_percent <= 100);
    assert!(!health.platform.is_empty());
    assert!(!health.friendly_os_name.is_empty());
}
