use std::io;
use std::net::Ipv4Addr;

use thiserror::Error;

pub mod tcp_connect;

/// Port every gateway listens on.
pub const GATEWAY_PORT: u16 = 5851;

/// Connect/close cycles a candidate must survive to count as reachable.
pub const REPEAT_COUNT: usize = 3;

/// A named server endpoint whose IPv4 address has already been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub addr: Ipv4Addr,
}

impl Candidate {
    pub fn new(name: impl Into<String>, addr: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            addr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    pub port: u16,
    pub repeat: usize,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            port: GATEWAY_PORT,
            repeat: REPEAT_COUNT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connect attempt {attempt} failed: {source}")]
    Connect {
        attempt: usize,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub enum Outcome {
    Success,
    Failure(ProbeError),
}

/// What a single probe reported for one candidate.
#[derive(Debug)]
pub struct ProbeResult {
    pub name: String,
    pub outcome: Outcome,
}

impl ProbeResult {
    pub fn success(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Success,
        }
    }

    pub fn failure(name: impl Into<String>, err: ProbeError) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Failure(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success)
    }
}
