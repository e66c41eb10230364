// Local network state: interface addresses and configured DNS resolvers

mod resolv;

use crate::error::NetworkError;
use std::net::IpAddr;
use tracing::instrument;

/// One address bound to an interface, in OS enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub name: String,
    pub addr: IpAddr,
    /// Loopback / host-internal address.
    pub internal: bool,
}

impl InterfaceAddr {
    pub fn new(name: impl Into<String>, addr: IpAddr, internal: bool) -> Self {
        Self {
            name: name.into(),
            addr,
            internal,
        }
    }
}

/// Seam for OS network reads. Both are treated as immediate (non-suspending).
pub trait HostNetwork: Send + Sync {
    fn interfaces(&self) -> Result<Vec<InterfaceAddr>, NetworkError>;
    fn dns_servers(&self) -> Result<Vec<String>, NetworkError>;
}

/// Reads the running host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNetwork;

impl HostNetwork for SystemNetwork {
    #[instrument(skip(self), fields(repo = "network", operation = "interfaces"))]
    fn interfaces(&self) -> Result<Vec<InterfaceAddr>, NetworkError> {
        let ifaces = if_addrs::get_if_addrs().map_err(NetworkError::Interfaces)?;
        Ok(ifaces
            .into_iter()
            .map(|iface| {
                let internal = iface.is_loopback();
                let ip = iface.ip();
                InterfaceAddr::new(iface.name, ip, internal)
            })
            .collect())
    }

    #[instrument(skip(self), fields(repo = "network", operation = "dns_servers"))]
    fn dns_servers(&self) -> Result<Vec<String>, NetworkError> {
        resolv::read_system_nameservers()
    }
}

/// First non-internal IPv4 address, first match wins across interfaces.
pub fn first_external_ipv4(interfaces: &[InterfaceAddr]) -> Option<&InterfaceAddr> {
    interfaces
        .iter()
        .find(|i| i.addr.is_ipv4() && !i.internal)
}
