//! Error types for the task API client.
//!
//! # Design
//! Failures are passed through, not classified: a transport failure keeps the
//! underlying `reqwest::Error`, and a non-2xx response keeps its raw status
//! and body. Callers decide what a 404 or a 500 means to them.

use thiserror::Error;

/// Errors returned by `TaskService` operations and `TaskRequests` parsers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, I/O, protocol).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside 200..300.
    #[error("request rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Configuration errors raised while resolving startup settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{0}' is required but not set")]
    MissingEnvVar(String),
}
