//! TCP server exposing the attendance store to remote callers.
//!
//! Every connection speaks newline-delimited JSON: the client writes one
//! [`QueryRequest`] per line and the server answers each with one
//! [`QueryReply`] line. All connections share a single [`SharedStore`].
//!
//! # Architecture
//!
//! ```text
//! client A ┐
//!          ├──> QueryServer ──> task per connection ──> SharedStore (one mutex)
//! client B ┘        │
//!                   └──> RequestCodec (line framing)
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use attendance_network::{QueryServer, QueryServerConfig};
//! use attendance_storage::SharedStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = QueryServerConfig::default().bind_addr("127.0.0.1:5000".parse()?);
//! let server = QueryServer::bind(config, SharedStore::default()).await?;
//!
//! server
//!     .run_until(async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Design Principles
//!
//! - **No authentication**: any client may read and write
//! - **Request errors never close the connection**: they become 400 replies,
//!   including lines that are too long or not valid UTF-8
//! - **I/O errors end only the affected connection**

use crate::codec::{RequestCodec, RequestLine};
use crate::query::Query;
use crate::wire::{QueryReply, QueryRequest};
use attendance_storage::SharedStore;
use futures::{SinkExt, StreamExt};
use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::{Framed, LinesCodecError};
use tracing::{debug, info, trace, warn};

/// Reply text when the request line is not a JSON object with a `query` string.
pub const INVALID_REQUEST_MESSAGE: &str =
    "Invalid request. JSON body with 'query' field expected.";

/// Reply text when the request line exceeds the configured maximum length.
pub const REQUEST_TOO_LONG_MESSAGE: &str = "Request line too long.";

/// Pre-encoded reply used if a reply cannot be serialized.
const INTERNAL_ERROR_LINE: &str =
    r#"{"error":"An internal server error occurred.","status":500}"#;

/// Default port for the query endpoint.
pub const DEFAULT_PORT: u16 = 5000;

/// Default upper bound on a request line, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8 * 1024;

/// Configuration for the query server
#[derive(Debug, Clone)]
pub struct QueryServerConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,

    /// Longest accepted request line, in bytes
    pub max_line_length: usize,
}

impl Default for QueryServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl QueryServerConfig {
    /// Set the bind address
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the maximum request line length
    pub fn max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }
}

/// Errors that can occur during query server operations
#[derive(Debug, Error)]
pub enum QueryServerError {
    /// Failed to bind to address
    #[error("Failed to bind to {addr}: {source}")]
    BindFailed {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Low-level I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Codec error while reading or writing a line
    #[error("Codec error: {0}")]
    Codec(String),
}

impl From<LinesCodecError> for QueryServerError {
    fn from(err: LinesCodecError) -> Self {
        match err {
            LinesCodecError::Io(e) => Self::Io(e),
            other => Self::Codec(other.to_string()),
        }
    }
}

/// TCP server answering attendance queries
pub struct QueryServer {
    listener: TcpListener,
    store: SharedStore,
    config: QueryServerConfig,
}

impl QueryServer {
    /// Bind the server to the configured address.
    ///
    /// Binding to port 0 picks a free port; use [`QueryServer::local_addr`] to
    /// find out which.
    ///
    /// # Errors
    ///
    /// Returns `QueryServerError::BindFailed` if the address is in use or not
    /// permitted.
    pub async fn bind(
        config: QueryServerConfig,
        store: SharedStore,
    ) -> Result<Self, QueryServerError> {
        info!("Binding query server to {}", config.bind_addr);

        let listener = TcpListener::bind(config.bind_addr)
            .await
            .map_err(|source| QueryServerError::BindFailed {
                addr: config.bind_addr,
                source,
            })?;

        info!(
            "Query server listening on {} (max line {} bytes)",
            listener.local_addr()?,
            config.max_line_length
        );

        Ok(Self {
            listener,
            store,
            config,
        })
    }

    /// Address the server is actually listening on
    pub fn local_addr(&self) -> Result<SocketAddr, QueryServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Store shared by all connections
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Accept connections forever.
    ///
    /// # Errors
    /// Returns an error only if accepting a connection fails.
    pub async fn run(self) -> Result<(), QueryServerError> {
        loop {
            let (stream, addr) = self.listener.accept().await?;
            self.spawn_connection(stream, addr);
        }
    }

    /// Accept connections until `shutdown` completes.
    ///
    /// Connections already being served keep running on their own tasks.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), QueryServerError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Query server shutting down");
                    return Ok(());
                }
                accepted = self.listener.accept() => {
                    let (stream, addr) = accepted?;
                    self.spawn_connection(stream, addr);
                }
            }
        }
    }

    fn spawn_connection(&self, stream: TcpStream, addr: SocketAddr) {
        debug!("Accepted connection from {}", addr);

        let store = self.store.clone();
        let max_line_length = self.config.max_line_length;

        tokio::spawn(async move {
            match serve_connection(stream, store, max_line_length).await {
                Ok(()) => debug!("Connection from {} closed", addr),
                Err(e) => warn!("Connection from {} ended with error: {}", addr, e),
            }
        });
    }
}

/// Serve one connection until the client disconnects.
async fn serve_connection(
    stream: TcpStream,
    store: SharedStore,
    max_line_length: usize,
) -> Result<(), QueryServerError> {
    let mut framed = Framed::new(stream, RequestCodec::new(max_line_length));

    while let Some(line) = framed.next().await {
        let reply = match line? {
            RequestLine::Line(line) => handle_request(&line, &store).await,
            RequestLine::TooLong => {
                warn!("Request exceeded {} bytes", max_line_length);
                QueryReply::bad_request(REQUEST_TOO_LONG_MESSAGE)
            }
            RequestLine::NotUtf8 => {
                debug!("Rejecting request line that is not UTF-8");
                QueryReply::bad_request(INVALID_REQUEST_MESSAGE)
            }
        };

        framed.send(encode_reply(&reply)).await?;
    }

    Ok(())
}

/// Turn one request line into a reply, running the query against `store`.
///
/// Every failure the caller can cause is reported as a 400 reply.
pub async fn handle_request(line: &str, store: &SharedStore) -> QueryReply {
    let request: QueryRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            debug!("Rejecting malformed request: {}", e);
            return QueryReply::bad_request(INVALID_REQUEST_MESSAGE);
        }
    };

    trace!(query = %request.query, "Handling query");

    let query = match Query::parse(&request.query) {
        Ok(query) => query,
        Err(e) => return QueryReply::bad_request(e.to_string()),
    };

    match store.with(|store| query.execute(store)).await {
        Ok(text) => QueryReply::response(text),
        Err(e) => QueryReply::bad_request(e.to_string()),
    }
}

fn encode_reply(reply: &QueryReply) -> String {
    serde_json::to_string(reply).unwrap_or_else(|e| {
        warn!("Failed to encode reply: {}", e);
        INTERNAL_ERROR_LINE.to_string()
    })
}
