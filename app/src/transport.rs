//! Blocking [`Transport`] implementation over ureq.

use onelist_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Executes requests on a shared `ureq::Agent`.
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data for the client to interpret rather than as
/// transport errors. No timeout is configured; a call blocks until the
/// server answers or the connection fails.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (request.method, request.body) {
            (HttpMethod::Get, _) => {
                apply_headers(self.agent.get(&request.path), &request.headers).call()
            }
            (HttpMethod::Post, Some(body)) => {
                apply_headers(self.agent.post(&request.path), &request.headers)
                    .send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                apply_headers(self.agent.post(&request.path), &request.headers).send_empty()
            }
            (HttpMethod::Put, Some(body)) => {
                apply_headers(self.agent.put(&request.path), &request.headers)
                    .send(body.as_bytes())
            }
            (HttpMethod::Put, None) => {
                apply_headers(self.agent.put(&request.path), &request.headers).send_empty()
            }
        };

        let mut response = result.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn apply_headers<Any>(
    mut builder: ureq::RequestBuilder<Any>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<Any> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
