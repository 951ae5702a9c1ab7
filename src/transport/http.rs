//! Default HTTP transport over `reqwest::blocking`.
//!
//! One synchronous round trip per call, no retries, no connection state
//! beyond reqwest's own pooling. The per-request timeout is fixed at
//! construction time.

use std::time::Duration;

use crate::error::{NotebookError, Result};
use crate::protocol::{HttpMethod, PreparedRequest};

use super::{Transport, TransportResponse};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("notebook-client/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &PreparedRequest) -> Result<TransportResponse> {
        let mut req = match request.method {
            HttpMethod::Get => self.http.get(request.url.clone()),
            HttpMethod::Post => self.http.post(request.url.clone()),
        };
        for (name, value) in &request.headers {
            req = req.header(*name, *value);
        }
        if let Some(body) = &request.body {
            req = req.body(body.clone());
        }

        tracing::debug!(method = ?request.method, url = %request.url, "sending notebook request");

        let response = req
            .send()
            .map_err(|e| NotebookError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| NotebookError::Transport(e.to_string()))?
            .to_vec();

        Ok(TransportResponse { status, body })
    }
}
