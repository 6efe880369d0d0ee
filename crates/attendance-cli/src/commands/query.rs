//! The `attendance query` command.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use attendance_network::{QueryClient, QueryClientConfig, QueryReply};

pub async fn execute(addr: SocketAddr, timeout_ms: u64, words: Vec<String>) -> anyhow::Result<()> {
    let config = QueryClientConfig {
        server_addr: addr,
        timeout: Duration::from_millis(timeout_ms),
    };

    let mut client = QueryClient::connect(config)
        .await
        .with_context(|| format!("connecting to {addr}"))?;

    match client.query(&words.join(" ")).await? {
        QueryReply::Response { response } => {
            println!("{response}");
            Ok(())
        }
        QueryReply::Error { error, status } => anyhow::bail!("{error} (status {status})"),
    }
}
