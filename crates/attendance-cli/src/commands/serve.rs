//! The `attendance serve` command.

use std::net::SocketAddr;

use anyhow::Context;
use attendance_network::{QueryServer, QueryServerConfig};
use attendance_storage::SharedStore;
use tracing::{info, warn};

pub async fn execute(bind: SocketAddr, max_line_length: usize) -> anyhow::Result<()> {
    anyhow::ensure!(max_line_length > 0, "--max-line-length must be at least 1");

    let config = QueryServerConfig::default()
        .bind_addr(bind)
        .max_line_length(max_line_length);

    let server = QueryServer::bind(config, SharedStore::default())
        .await
        .context("starting query server")?;

    println!("Listening on {}", server.local_addr()?);
    let store = server.store().clone();

    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;

    let store = store.lock().await;
    info!(
        students = store.student_count(),
        teachers = store.teacher_count(),
        records = store.record_count(),
        "Query server stopped"
    );
    Ok(())
}
