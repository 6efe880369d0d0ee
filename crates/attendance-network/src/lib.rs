//! Network access to the attendance store
//!
//! This crate serves the attendance store over TCP using newline-delimited
//! JSON. Requests carry a text query, replies carry either response text or an
//! error with a 400/500 status.
//!
//! # Components
//!
//! - **QueryServer**: accepts connections and runs queries against a shared store
//! - **QueryClient**: sends queries and waits for replies
//! - **Query**: the query language (`person S101`, `date 2023-10-26`, ...)
//!
//! # Example
//!
//! ```no_run
//! use attendance_network::{QueryClient, QueryClientConfig, QueryServer, QueryServerConfig};
//! use attendance_storage::SharedStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = QueryServerConfig::default().bind_addr("127.0.0.1:0".parse()?);
//! let server = QueryServer::bind(config, SharedStore::default()).await?;
//! let addr = server.local_addr()?;
//! tokio::spawn(server.run());
//!
//! let mut client = QueryClient::connect(QueryClientConfig {
//!     server_addr: addr,
//!     ..Default::default()
//! })
//! .await?;
//! let reply = client.query("add-student S101 Alice").await?;
//! assert!(!reply.is_error());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod codec;
pub mod query;
mod server;
pub mod wire;

pub use client::{QueryClient, QueryClientConfig, QueryClientError};
pub use codec::{RequestCodec, RequestLine};
pub use query::{Query, QueryError};
pub use server::{
    DEFAULT_MAX_LINE_LENGTH, DEFAULT_PORT, INVALID_REQUEST_MESSAGE, QueryServer,
    QueryServerConfig, QueryServerError, REQUEST_TOO_LONG_MESSAGE, handle_request,
};
pub use wire::{QueryReply, QueryRequest, STATUS_BAD_REQUEST, STATUS_INTERNAL_ERROR};
