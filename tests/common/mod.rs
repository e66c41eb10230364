// Shared test helpers: scripted command executor, fake host network, configs
#![allow(dead_code)]

use netpulse::config::{PortScanConfig, ProbeConfig};
use netpulse::error::NetworkError;
use netpulse::models::ProbeResult;
use netpulse::network_repo::{HostNetwork, InterfaceAddr};
use netpulse::platform::CommandSpec;
use netpulse::probe_runner::CommandExecutor;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;

/// Answers by program name; anything unscripted fails like a missing binary.
#[derive(Default)]
pub struct ScriptedExecutor {
    responses: HashMap<String, ProbeResult>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, program: &str, result: ProbeResult) -> Self {
        self.responses.insert(program.to_string(), result);
        self
    }

    /// Command lines executed so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandExecutor for ScriptedExecutor {
    async fn execute(&self, command: &CommandSpec, _timeout_ms: u64) -> ProbeResult {
        self.calls.lock().unwrap().push(command.display());
        self.responses
            .get(&command.program)
            .cloned()
            .unwrap_or_else(|| ProbeResult::failed(format!("{} not scripted", command.program)))
    }
}

pub struct FakeNetwork {
    pub interfaces: Option<Vec<InterfaceAddr>>,
    pub dns: Option<Vec<String>>,
}

impl FakeNetwork {
    /// Every read fails.
    pub fn broken() -> Self {
        Self {
            interfaces: None,
            dns: None,
        }
    }

    pub fn with(interfaces: Vec<InterfaceAddr>, dns: Vec<&str>) -> Self {
        Self {
            interfaces: Some(interfaces),
            dns: Some(dns.into_iter().map(String::from).collect()),
        }
    }
}

impl HostNetwork for FakeNetwork {
    fn interfaces(&self) -> Result<Vec<InterfaceAddr>, NetworkError> {
        self.interfaces
            .clone()
            .ok_or_else(|| NetworkError::Interfaces(std::io::Error::other("no interfaces")))
    }

    fn dns_servers(&self) -> Result<Vec<String>, NetworkError> {
        self.dns
            .clone()
            .ok_or_else(|| NetworkError::Resolver(std::io::Error::other("no resolver")))
    }
}

pub fn iface(name: &str, addr: &str, internal: bool) -> InterfaceAddr {
    InterfaceAddr::new(name, addr.parse::<IpAddr>().unwrap(), internal)
}

pub fn ok_output(stdout: &str) -> ProbeResult {
    ProbeResult {
        exit_succeeded: true,
        raw_output: stdout.to_string(),
        raw_error: String::new(),
        timed_out: false,
    }
}

pub fn probe_config() -> ProbeConfig {
    ProbeConfig {
        reachability_target: "8.8.8.8".into(),
        reachability_timeout_ms: 500,
        wireless_timeout_ms: 500,
        route_trace_target: "8.8.8.8".into(),
        route_trace_timeout_ms: 1_000,
    }
}

pub fn port_scan_config(ports: Vec<u16>, timeout_ms: u64) -> PortScanConfig {
    PortScanConfig {
        host: "127.0.0.1".into(),
        ports,
        timeout_ms,
        max_concurrent: 4,
    }
}

/// A loopback port with nothing listening on it.
pub async fn free_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}
