use find_gateway::config::ProbeConfig;
use find_gateway::init_tracing;
use find_gateway::prober::ProbeSettings;
use find_gateway::reporter::Reporter;
use find_gateway::scheduler::{Scheduler, resolve_candidates, select_candidates};
use find_gateway::source::ServerSource;

use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// Prints the gateway servers that accept connections fastest, for up to the deadline.
#[derive(Parser, Debug)]
#[command(name = "find-gateway")]
struct Args {
    /// Number of servers to probe
    count: Option<usize>,
    /// File of whitespace-separated hostnames; the published list is fetched when omitted
    serverfile: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = ProbeConfig::load().await?;
    init_tracing(config.get_tracing_level()?)?;

    let source = match args.serverfile {
        Some(path) => ServerSource::File(path),
        None => ServerSource::Remote(config.servers_url.clone()),
    };
    let servers = source.load().await?;
    info!("{} servers listed by {:?}", servers.len(), source);

    let picked = select_candidates(servers, args.count, &mut rand::rng());
    let candidates = resolve_candidates(picked).await;

    let scheduler = Scheduler::new(config.deadline(), ProbeSettings::default());
    let mut run = scheduler.launch(candidates);
    let mut reporter = Reporter::new(std::io::stdout());
    while let Some(result) = run.next().await {
        if let Err(e) = reporter.report(&result) {
            debug!("stdout closed: {:?}", e);
            break;
        }
    }
    if run.expired() {
        debug!("deadline reached, stopping");
    }

    // outstanding probes are not joined
    std::process::exit(0)
}
