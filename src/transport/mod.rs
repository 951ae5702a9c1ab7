//! Transport module - how prepared requests reach the server.
//!
//! The client core performs no I/O itself: it hands a
//! [`PreparedRequest`](crate::protocol::PreparedRequest) to a [`Transport`]
//! and receives a status code plus body bytes back. [`HttpTransport`] is
//! the default blocking implementation; tests and embedders may inject
//! their own.

mod http;

pub use http::HttpTransport;

use crate::error::Result;
use crate::protocol::PreparedRequest;

/// Raw outcome of one exchange: status code and body bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Body bytes as (lossy) UTF-8 text; used as error diagnostic detail.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A blocking request/response exchange.
///
/// Implementations surface connection-level failures as
/// [`NotebookError::Transport`](crate::NotebookError::Transport). Error
/// status codes are not errors at this layer; classification belongs to the
/// resolver. Timeouts, TLS, and cancellation are transport concerns and are
/// not specified here.
pub trait Transport: Send + Sync {
    fn send(&self, request: &PreparedRequest) -> Result<TransportResponse>;
}
