use std::future::Future;
use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use tokio::task::JoinSet;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, warn};

use crate::prober::tcp_connect::probe_tcp;
use crate::prober::{Candidate, ProbeResult, ProbeSettings};
use crate::util::resolve_host_to_ipv4;

/// How many servers get probed when no count is given.
pub const DEFAULT_COUNT: usize = 32;

pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(5);

/// Shuffles `names` and keeps the first `count` of them (clamped to the list length).
pub fn select_candidates<R>(
    mut names: Vec<String>,
    count: Option<usize>,
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    names.shuffle(rng);
    let n = count.unwrap_or(DEFAULT_COUNT).min(names.len());
    names.truncate(n);
    names
}

/// Resolves each name to an IPv4 address, in turn. Names without one are dropped and are not
/// replaced, so the result may be shorter than the input.
pub async fn resolve_candidates(names: Vec<String>) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(names.len());
    for name in names {
        match resolve_host_to_ipv4(&name).await {
            Ok(addr) => candidates.push(Candidate::new(name, addr)),
            Err(e) => debug!("skipping {}: {:?}", name, e),
        }
    }
    candidates
}

pub struct Scheduler {
    deadline: Duration,
    settings: ProbeSettings,
}

impl Scheduler {
    pub fn new(deadline: Duration, settings: ProbeSettings) -> Self {
        Self { deadline, settings }
    }

    /// Starts a TCP probe for every candidate.
    pub fn launch(&self, candidates: Vec<Candidate>) -> ProbeRun {
        let settings = self.settings;
        self.launch_with(candidates, move |candidate| async move {
            probe_tcp(&candidate, settings).await
        })
    }

    /// probe: builds the future run for each candidate. All of them are spawned before this
    /// returns, and the deadline is counted from the moment of the call.
    pub fn launch_with<P, F>(&self, candidates: Vec<Candidate>, probe: P) -> ProbeRun
    where
        P: Fn(Candidate) -> F,
        F: Future<Output = ProbeResult> + Send + 'static,
    {
        let deadline = Instant::now() + self.deadline;
        let mut tasks = JoinSet::new();
        for candidate in candidates {
            let fut = probe(candidate);
            tasks.spawn(async move {
                let result = fut.await;
                (Instant::now(), result)
            });
        }
        debug!("launched {} probes", tasks.len());
        ProbeRun {
            tasks,
            deadline,
            expired: false,
        }
    }
}

/// Probes in flight, read back in the order they finish.
pub struct ProbeRun {
    // each result is stamped with the instant its probe finished
    tasks: JoinSet<(Instant, ProbeResult)>,
    deadline: Instant,
    expired: bool,
}

impl ProbeRun {
    /// Next finished probe, or `None` once every probe has reported or the deadline passed.
    /// Probes still running at the deadline are aborted and never reported.
    pub async fn next(&mut self) -> Option<ProbeResult> {
        if self.expired {
            return None;
        }
        loop {
            match timeout_at(self.deadline, self.tasks.join_next()).await {
                Ok(Some(Ok((finished, result)))) if finished < self.deadline => {
                    return Some(result);
                }
                // the timer lags join_next, so a late finisher can still win the race
                Ok(Some(Ok((_, result)))) => {
                    debug!("dropping {}: finished after the deadline", result.name);
                    self.expire();
                    return None;
                }
                Ok(Some(Err(e))) => warn!("probe task failed: {:?}", e),
                Ok(None) => return None,
                Err(_) => {
                    self.expire();
                    return None;
                }
            }
        }
    }

    fn expire(&mut self) {
        debug!("deadline reached with {} probes outstanding", self.tasks.len());
        self.expired = true;
        self.tasks.abort_all();
    }

    /// Whether the run ended because the deadline fired.
    pub fn expired(&self) -> bool {
        self.expired
    }
}
