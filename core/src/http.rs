//! HTTP plumbing for the host-executes-request pattern.
//!
//! # Design
//! Requests and responses are plain data. The client builds `HttpRequest`
//! values and parses `HttpResponse` values without ever touching the
//! network; a [`Transport`] chosen by the host performs the actual round
//! trip in between. This keeps the core deterministic, and lets tests
//! script responses without a server.

use thiserror::Error;

/// HTTP method for a request. Only the methods the client actually issues
/// are represented: the API surface sketches a DELETE endpoint as well, but
/// no operation uses it and the backend never wired a handler for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient::build_*` methods. A [`Transport`] executes it
/// against the network and returns the corresponding [`HttpResponse`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`], then handed to `ApiClient::parse_*` methods
/// for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Failure below the HTTP layer: the request never produced a response
/// (refused connection, resolution failure, interrupted body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Executes one HTTP round trip.
///
/// Implementations block until the server answers or the connection gives
/// up. No timeout is imposed and an in-flight request cannot be cancelled;
/// the caller waits for whichever of the two arrives first.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
