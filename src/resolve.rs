//! Response resolution - from transport results to typed outcomes.
//!
//! Two layers live here:
//!
//! - status/decoding: anything >= 300 is a [`NotebookError::Remote`]
//!   carrying the raw body text; 2xx bodies go through the codec, and an
//!   eval response missing the requested key is an explicit
//!   [`NotebookError::MissingOutput`].
//! - variable/callable disambiguation: a remote failure whose detail
//!   carries the server's function marker converts into
//!   [`Resolved::Callable`] for the probed name. This reuses the same
//!   response; no extra request is made.

use serde_json::Value;

use crate::codec::JsonCodec;
use crate::error::{NotebookError, Result};
use crate::notebook::{CallableReference, Notebook};
use crate::protocol::EvalResponse;
use crate::transport::TransportResponse;

/// Token the server embeds in the error body when a name read as a
/// variable actually denotes a function.
///
/// Matching is a plain substring test. This is a fragile piece of the wire
/// contract; it is confined to [`is_function_marker`] so nothing else in
/// the crate depends on the exact trigger string.
const FUNCTION_MARKER: &str = "function";

/// Outcome of resolving a name on a notebook.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The name denotes a variable; this is its current value.
    Value(Value),
    /// The name denotes a server-side function.
    Callable(CallableReference),
}

/// True when a remote error detail carries the "this is a function" marker.
pub(crate) fn is_function_marker(detail: &str) -> bool {
    detail.contains(FUNCTION_MARKER)
}

/// Status >= 300 is an error; the body text is the diagnostic detail.
pub(crate) fn check_status(response: &TransportResponse) -> Result<()> {
    if response.status >= 300 {
        return Err(NotebookError::Remote {
            status: response.status,
            detail: response.body_text(),
        });
    }
    Ok(())
}

/// Interpret an eval exchange for a single requested output.
pub(crate) fn resolve_eval(response: TransportResponse, output: &str) -> Result<Value> {
    check_status(&response)?;
    let mut decoded: EvalResponse = JsonCodec::decode(&response.body)?;
    decoded
        .remove(output)
        .ok_or_else(|| NotebookError::MissingOutput(output.to_string()))
}

/// Interpret a call exchange: a successful body is the function's return
/// value, passed through unmodified.
pub(crate) fn resolve_call(response: TransportResponse) -> Result<Value> {
    check_status(&response)?;
    JsonCodec::decode(&response.body)
}

/// Resolve a variable-style read of `name`, converting the server's
/// function-marker failure into a callable for the same name. All other
/// errors propagate unchanged.
pub(crate) fn resolve_variable(
    notebook: &Notebook,
    name: &str,
    response: TransportResponse,
) -> Result<Resolved> {
    match resolve_eval(response, name) {
        Ok(value) => Ok(Resolved::Value(value)),
        Err(NotebookError::Remote { detail, .. }) if is_function_marker(&detail) => Ok(
            Resolved::Callable(CallableReference::new(notebook.clone(), name)),
        ),
        Err(e) => Err(e),
    }
}
