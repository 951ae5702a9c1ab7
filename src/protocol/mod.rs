//! Protocol module - wire payloads and request construction.
//!
//! This module turns (operation, notebook identifier, parameters) into a
//! transport-ready [`PreparedRequest`]:
//!
//! - [`EvalRequest`] / [`CallRequest`] - typed request bodies
//! - [`build_eval`] / [`build_call`] / [`build_static`] - URL + headers + body
//!
//! No I/O happens here; sending is the transport's job.

mod payload;
mod request;

pub use payload::{CallRequest, EvalRequest, EvalResponse};
pub use request::{build_call, build_eval, build_static, HttpMethod, PreparedRequest};
