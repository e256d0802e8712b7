use std::path::PathBuf;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::fs;
use tokio::time::Duration;
use tracing::debug;

pub const DEFAULT_SERVERS_URL: &str = "http://opendht.org/servers.txt";

/// Where the candidate hostnames come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerSource {
    Remote(String),
    File(PathBuf),
}

impl ServerSource {
    pub async fn load(&self) -> Result<Vec<String>> {
        match self {
            ServerSource::Remote(url) => {
                let body = fetch(url).await?;
                Ok(parse_server_list(&body))
            }
            ServerSource::File(path) => {
                let content = fs::read_to_string(path)
                    .await
                    .with_context(|| format!("reading server file {}", path.display()))?;
                Ok(parse_server_file(&content))
            }
        }
    }
}

async fn fetch(url: &str) -> Result<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("fetching server list from {}", url))?
        .error_for_status()?;
    Ok(resp.text().await?)
}

/// Published server list: a header line, then one server per line with the hostname in the
/// third column.
pub fn parse_server_list(text: &str) -> Vec<String> {
    text.lines()
        .skip(1)
        .filter_map(|line| {
            let host = line.split_whitespace().nth(2);
            if host.is_none() && !line.trim().is_empty() {
                debug!("ignoring short server list line: {:?}", line);
            }
            host.map(str::to_string)
        })
        .collect()
}

pub fn parse_server_file(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
