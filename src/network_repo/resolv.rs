// Resolver configuration: /etc/resolv.conf on POSIX hosts, adapter DNS lists on Windows

use crate::error::NetworkError;
use std::net::IpAddr;

#[cfg(unix)]
const RESOLV_CONF: &str = "/etc/resolv.conf";

#[cfg(unix)]
pub(super) fn read_system_nameservers() -> Result<Vec<String>, NetworkError> {
    let content = std::fs::read_to_string(RESOLV_CONF).map_err(NetworkError::Resolver)?;
    Ok(parse_nameservers(&content))
}

/// DNS servers of every adapter that is up, in adapter order.
#[cfg(windows)]
pub(super) fn read_system_nameservers() -> Result<Vec<String>, NetworkError> {
    let adapters =
        ipconfig::get_adapters().map_err(|e| NetworkError::Adapters(e.to_string()))?;
    let servers: Vec<IpAddr> = adapters
        .iter()
        .filter(|a| a.oper_status() == ipconfig::OperStatus::IfOperStatusUp)
        .flat_map(|a| a.dns_servers().iter().copied())
        .collect();
    Ok(merge_nameservers(servers))
}

#[cfg(not(any(unix, windows)))]
pub(super) fn read_system_nameservers() -> Result<Vec<String>, NetworkError> {
    Err(NetworkError::ResolverUnsupported)
}

/// Drops duplicates and the unconfigured placeholders Windows reports
/// (unspecified and the fec0:0:0:ffff::1-3 site-local defaults). First occurrence wins.
#[cfg_attr(not(windows), allow(dead_code))]
pub(super) fn merge_nameservers(servers: impl IntoIterator<Item = IpAddr>) -> Vec<String> {
    let mut seen: Vec<IpAddr> = Vec::new();
    for addr in servers {
        if addr.is_unspecified() || is_site_local_default(&addr) || seen.contains(&addr) {
            continue;
        }
        seen.push(addr);
    }
    seen.iter().map(IpAddr::to_string).collect()
}

#[cfg_attr(not(windows), allow(dead_code))]
fn is_site_local_default(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V6(v6) => {
            let s = v6.segments();
            s[..4] == [0xfec0, 0, 0, 0xffff] && s[4..7] == [0, 0, 0] && (1..=3).contains(&s[7])
        }
        IpAddr::V4(_) => false,
    }
}

/// `nameserver <addr>` lines in file order; comments and other directives ignored.
#[cfg_attr(not(unix), allow(dead_code))]
pub(super) fn parse_nameservers(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.starts_with('#') && !l.starts_with(';'))
        .filter_map(|l| {
            let mut parts = l.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("nameserver"), Some(addr)) => Some(addr.to_string()),
                _ => None,
            }
        })
        .collect()
}
