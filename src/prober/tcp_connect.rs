use std::net::{SocketAddr, SocketAddrV4};

use tokio::net::TcpStream;
use tracing::{debug, trace};

use super::{Candidate, ProbeError, ProbeResult, ProbeSettings};

/// Opens and immediately closes `settings.repeat` connections to the candidate, one after
/// another. The first failed attempt ends the probe; there is no timeout beyond the OS
/// connect timeout.
pub async fn probe_tcp(candidate: &Candidate, settings: ProbeSettings) -> ProbeResult {
    let addr = SocketAddr::V4(SocketAddrV4::new(candidate.addr, settings.port));
    for attempt in 1..=settings.repeat {
        match TcpStream::connect(addr).await {
            Ok(conn) => {
                trace!("tcp connect {} attempt {} ok", addr, attempt);
                drop(conn);
            }
            Err(source) => {
                debug!("tcp connect {} ({}) failed: {:?}", candidate.name, addr, source);
                return ProbeResult::failure(
                    &candidate.name,
                    ProbeError::Connect { attempt, source },
                );
            }
        }
    }
    ProbeResult::success(&candidate.name)
}
