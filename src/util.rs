// Host resolution shared by the scheduler and host2id.

use std::net::{IpAddr, Ipv4Addr};
use anyhow::Result;

/// Resolves `host` to its first IPv4 address. IPv6 records and literals are not accepted,
/// since gateways are only ever reached over IPv4.
pub async fn resolve_host_to_ipv4(host: &str) -> Result<Ipv4Addr> {
    // First try to parse as IP address
    if let Ok(ip) = host.parse::<IpAddr>() {
        return match ip {
            IpAddr::V4(v4) => Ok(v4),
            IpAddr::V6(_) => Err(anyhow::anyhow!("Not an IPv4 address: {}", host)),
        };
    }

    // If parsing fails, resolve via DNS
    let addr = format!("{}:0", host);
    tokio::net::lookup_host(&addr)
        .await?
        .find_map(|sa| match sa.ip() {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| anyhow::anyhow!("No IPv4 address for hostname: {}", host))
}
