//! Error types for the todo API client.
//!
//! # Design
//! Callers that only care whether a request failed can treat every variant
//! alike, which is what the controller does. The variants exist for the
//! diagnostic log: `NotFound` is split out from other non-2xx statuses, and
//! `Transport` covers requests that never produced a response.

/// Errors produced while building, executing, or parsing a todo API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response (DNS, connect, reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
