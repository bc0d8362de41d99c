//! Error types for the sync layer.
//!
//! # Design
//! One flat enum covering the three ways an operation can fail on the way
//! back (transport, status, body) plus the one way it can fail on the way
//! out (encoding). None of the operations branch on a particular status
//! code, so there is no dedicated not-found variant; a 404 arrives as
//! `Status` with the raw code and body for debugging.

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by sync operations and by `ApiClient` build/parse
/// methods. Surfaced to the presentation layer rather than swallowed; the
/// store is untouched whenever one of these comes back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The transport failed before any HTTP response existed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a status the operation does not accept.
    #[error("unexpected HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// The request payload could not be encoded as JSON.
    #[error("request encoding failed: {0}")]
    Encode(String),
}
