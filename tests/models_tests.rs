// Model tests: JSON shape, connection classification, sentinels, log fields

use netpulse::models::*;

#[test]
fn test_status_snapshot_serializes_camel_case() {
    let snapshot = StatusSnapshot {
        wan_address: "203.0.113.7".into(),
        lan_address: "192.168.1.50".into(),
        connection_type: "Ethernet (LAN)".into(),
        dns_servers: vec!["1.1.1.1".into()],
        is_online: true,
        latency_ms: Some(14.0),
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"wanAddress\""));
    assert!(json.contains("\"connectionType\""));
    assert!(json.contains("\"dnsServers\""));
    assert!(json.contains("\"isOnline\":true"));
    assert!(json.contains("\"latencyMs\":14.0"));
}

#[test]
fn test_offline_snapshot_serializes_null_latency() {
    let json = serde_json::to_value(StatusSnapshot::default()).unwrap();
    assert!(json["latencyMs"].is_null());
    assert_eq!(json["lanAddress"], "Unknown");
    assert_eq!(json["dnsServers"], serde_json::json!(["Unknown"]));
}

#[test]
fn test_port_probe_result_shape() {
    let result = PortProbeResult {
        port: 80,
        status: PortStatus::Open,
    };
    assert_eq!(
        serde_json::to_value(result).unwrap(),
        serde_json::json!({ "port": 80, "status": "Open" })
    );
}

#[test]
fn test_host_health_serializes_camel_case() {
    let health = HostHealth {
        uptime_seconds: 10,
        total_mem_bytes: 100,
        used_mem_bytes: 40,
        free_mem_bytes: 60,
        mem_usage_percent: 40,
        cpu_model: "cpu".into(),
        cpu_core_count: 4,
        platform: "linux".into(),
        friendly_os_name: "Ubuntu".into(),
        readable_os_version: "24.04".into(),
        os_release: "6.8.0".into(),
        hostname: "box".into(),
    };
    let json = serde_json::to_string(&health).unwrap();
    assert!(json.contains("\"memUsagePercent\":40"));
    assert!(json.contains("\"friendlyOsName\""));
    assert!(json.contains("\"readableOsVersion\""));
    let back: HostHealth = serde_json::from_str(&json).unwrap();
    assert_eq!(back, health);
}

#[test]
fn test_connection_classification() {
    assert_eq!(ConnectionKind::classify("Wi-Fi"), ConnectionKind::WiFi);
    assert_eq!(ConnectionKind::classify("wlan0"), ConnectionKind::WiFi);
    assert_eq!(ConnectionKind::classify("wlp2s0"), ConnectionKind::WiFi);
    assert_eq!(ConnectionKind::classify("Ethernet 2"), ConnectionKind::Ethernet);
    assert_eq!(ConnectionKind::classify("eth0"), ConnectionKind::Ethernet);
    assert_eq!(ConnectionKind::classify("enp3s0"), ConnectionKind::Ethernet);
    assert_eq!(
        ConnectionKind::classify("tailscale0"),
        ConnectionKind::Other("tailscale0".into())
    );
}

#[test]
fn test_connection_labels() {
    assert_eq!(ConnectionKind::WiFi.label(), "Wi-Fi");
    assert_eq!(ConnectionKind::Ethernet.label(), "Ethernet (LAN)");
    assert_eq!(ConnectionKind::Other("utun3".into()).label(), "utun3");
}

#[test]
fn test_log_fields_are_plain_ordered_pairs() {
    let snapshot = StatusSnapshot {
        wan_address: "203.0.113.7".into(),
        lan_address: "192.168.1.50".into(),
        connection_type: "Wi-Fi (5 GHz)".into(),
        dns_servers: vec!["192.168.1.1".into(), "1.1.1.1".into()],
        is_online: true,
        latency_ms: Some(14.0),
    };
    let fields = snapshot.log_fields();
    let keys: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        ["WanIP", "LanIP", "ConnectionType", "DNS", "Online", "Ping"]
    );
    assert_eq!(fields[3].1, "192.168.1.1, 1.1.1.1");
    assert_eq!(fields[5].1, "14 ms");

    let offline = StatusSnapshot::default().log_fields();
    assert_eq!(offline[5].1, "N/A");
}

#[test]
fn test_probe_result_failed_has_no_output() {
    let r = ProbeResult::failed("boom");
    assert!(!r.exit_succeeded);
    assert!(!r.timed_out);
    assert!(r.raw_output.is_empty());
    assert_eq!(r.raw_error, "boom");
}
