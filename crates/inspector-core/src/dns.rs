//! Host name resolution.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::DnsConfig;
use crate::{Error, Result};

/// Something that can resolve a host name to an address.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolve `host` to a single address.
    async fn resolve(&self, host: &str) -> Result<IpAddr>;
}

/// Resolver backed by the operating system (`getaddrinfo`).
///
/// IPv4 answers are preferred, so the result matches what a classic
/// `gethostbyname` would print.
#[derive(Clone, Debug)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    /// Create a resolver from configuration.
    pub fn new(config: &DnsConfig) -> Self {
        Self {
            timeout: config.timeout(),
        }
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new(&DnsConfig::default())
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<IpAddr> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(ip);
        }

        let lookup = tokio::net::lookup_host((host, 0));
        let addrs: Vec<IpAddr> = tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| Error::timeout(format!("DNS lookup of {host}"), self.timeout.as_secs()))?
            .map_err(|e| Error::dns(host, e.to_string()))?
            .map(|sa| sa.ip())
            .collect();

        pick_address(&addrs).ok_or_else(|| Error::dns(host, "no addresses returned"))
    }
}

/// First IPv4 address, else the first address of any family.
fn pick_address(addrs: &[IpAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
}
