use find_gateway::host_id::{format_id, host_id};
use find_gateway::util::resolve_host_to_ipv4;

use clap::Parser;

/// Prints the node identifier of a host and port.
#[derive(Parser, Debug)]
#[command(name = "host2id")]
struct Args {
    hostname: String,
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let ip = resolve_host_to_ipv4(&args.hostname).await?;
    println!("{}", format_id(&host_id(args.port, ip)));
    Ok(())
}
