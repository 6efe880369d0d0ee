//! TCP client for the attendance query endpoint.
//!
//! Sends one [`QueryRequest`] at a time and waits for the matching
//! [`QueryReply`]. All I/O is bounded by a single configurable timeout.

use crate::wire::{QueryReply, QueryRequest};
use futures::{SinkExt, StreamExt};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_util::codec::{Framed, LinesCodec, LinesCodecError};
use tracing::{debug, info, trace, warn};

/// Configuration for the query client
#[derive(Debug, Clone)]
pub struct QueryClientConfig {
    /// Server address to connect to
    pub server_addr: SocketAddr,

    /// Timeout for all I/O operations (connect, send, recv)
    pub timeout: Duration,
}

impl Default for QueryClientConfig {
    fn default() -> Self {
        Self {
            server_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, crate::server::DEFAULT_PORT)),
            timeout: Duration::from_millis(3000),
        }
    }
}

/// Errors that can occur during query client operations
#[derive(Debug, Error)]
pub enum QueryClientError {
    /// Connection attempt timed out
    #[error("Connection timeout after {0}ms")]
    ConnectionTimeout(u64),

    /// No reply arrived in time
    #[error("Read timeout after {0}ms")]
    ReadTimeout(u64),

    /// Request could not be written in time
    #[error("Write timeout after {0}ms")]
    WriteTimeout(u64),

    /// Server closed the connection
    #[error("Connection lost: {0}")]
    ConnectionLost(String),

    /// Reply line was not a valid reply object
    #[error("Invalid reply: {0}")]
    InvalidReply(#[from] serde_json::Error),

    /// Low-level I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Codec error during line framing
    #[error("Codec error: {0}")]
    Codec(String),
}

impl From<LinesCodecError> for QueryClientError {
    fn from(err: LinesCodecError) -> Self {
        match err {
            LinesCodecError::Io(e) => Self::Io(e),
            other => Self::Codec(other.to_string()),
        }
    }
}

/// Connected query client
///
/// # Example
///
/// ```no_run
/// use attendance_network::{QueryClient, QueryClientConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = QueryClient::connect(QueryClientConfig::default()).await?;
/// let reply = client.query("person S101").await?;
/// println!("{:?}", reply);
/// # Ok(())
/// # }
/// ```
pub struct QueryClient {
    framed: Framed<TcpStream, LinesCodec>,
    timeout: Duration,
}

impl QueryClient {
    /// Connect to the server.
    ///
    /// # Errors
    /// Returns `QueryClientError::ConnectionTimeout` or the underlying I/O error.
    pub async fn connect(config: QueryClientConfig) -> Result<Self, QueryClientError> {
        info!("Connecting to query server at {}", config.server_addr);

        let stream =
            match tokio::time::timeout(config.timeout, TcpStream::connect(config.server_addr))
                .await
            {
                Ok(Ok(stream)) => stream,
                Ok(Err(e)) => return Err(e.into()),
                Err(_) => {
                    warn!("Connection timeout after {}ms", config.timeout.as_millis());
                    return Err(QueryClientError::ConnectionTimeout(
                        config.timeout.as_millis() as u64,
                    ));
                }
            };

        if let Err(e) = stream.set_nodelay(true) {
            warn!("Failed to set TCP_NODELAY: {}", e);
        }

        debug!("Query client connected");
        Ok(Self {
            framed: Framed::new(stream, LinesCodec::new()),
            timeout: config.timeout,
        })
    }

    /// Send query text and wait for its reply.
    pub async fn query(&mut self, text: &str) -> Result<QueryReply, QueryClientError> {
        let line = serde_json::to_string(&QueryRequest::new(text))?;
        self.send_line(line).await?;
        self.recv().await
    }

    /// Send a raw line, bypassing request encoding.
    ///
    /// Useful for exercising the server's handling of malformed requests.
    pub async fn send_line(&mut self, line: String) -> Result<(), QueryClientError> {
        trace!(%line, "Sending request line");

        match tokio::time::timeout(self.timeout, self.framed.send(line)).await {
            Ok(result) => result.map_err(Into::into),
            Err(_) => Err(QueryClientError::WriteTimeout(
                self.timeout.as_millis() as u64,
            )),
        }
    }

    /// Wait for the next reply.
    pub async fn recv(&mut self) -> Result<QueryReply, QueryClientError> {
        match tokio::time::timeout(self.timeout, self.framed.next()).await {
            Ok(Some(Ok(line))) => {
                trace!(%line, "Received reply line");
                Ok(serde_json::from_str(&line)?)
            }
            Ok(Some(Err(e))) => Err(e.into()),
            Ok(None) => Err(QueryClientError::ConnectionLost(
                "Server closed connection".to_string(),
            )),
            Err(_) => Err(QueryClientError::ReadTimeout(
                self.timeout.as_millis() as u64,
            )),
        }
    }
}
