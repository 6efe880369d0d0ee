//! JSON request and reply shapes exchanged with the query endpoint.
//!
//! Each request and each reply is one JSON object on its own line:
//!
//! ```text
//! -> {"query": "person S101"}
//! <- {"response": "Attendance for ID S101:\nDate: 2023-10-26, Status: present"}
//!
//! -> {"query": "mark X999 2023-10-26 present"}
//! <- {"error": "Person with ID X999 not found.", "status": 400}
//! ```

use serde::{Deserialize, Serialize};

/// Status code for requests the caller got wrong.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Status code for failures on the server side.
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Incoming request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Outgoing reply: either a response text or an error with a status code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryReply {
    Response { response: String },
    Error { error: String, status: u16 },
}

impl QueryReply {
    pub fn response(text: impl Into<String>) -> Self {
        Self::Response {
            response: text.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
            status: STATUS_BAD_REQUEST,
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
            status: STATUS_INTERNAL_ERROR,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Status code of an error reply, `None` for a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { .. } => None,
            Self::Error { status, .. } => Some(*status),
        }
    }
}
