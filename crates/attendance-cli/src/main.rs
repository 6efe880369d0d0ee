//! attendance CLI: the interactive menu and the network query endpoint.

use std::net::SocketAddr;
use std::process;

use attendance_network::DEFAULT_MAX_LINE_LENGTH;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "attendance", version, about = "In-memory attendance tracker")]
struct Cli {
    /// Log filter (e.g. "debug", "attendance_network=trace"); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Serve the store over TCP as newline-delimited JSON
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:5000")]
        bind: SocketAddr,

        /// Longest accepted request line, in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
        max_line_length: usize,
    },

    /// Send one query to a running server and print the reply
    Query {
        /// Server address
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: SocketAddr,

        /// Timeout for connect, send and receive
        #[arg(long, default_value = "3000")]
        timeout_ms: u64,

        /// Query words, e.g. `person S101`
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let result = match cli.command.unwrap_or(Commands::Menu) {
        // stdin reads block, keep them off the runtime's worker threads
        Commands::Menu => tokio::task::spawn_blocking(commands::menu::execute)
            .await
            .unwrap_or_else(|e| Err(e.into())),
        Commands::Serve {
            bind,
            max_line_length,
        } => commands::serve::execute(bind, max_line_length).await,
        Commands::Query {
            addr,
            timeout_ms,
            query,
        } => commands::query::execute(addr, timeout_ms, query).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
