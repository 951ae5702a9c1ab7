//! Construction of transport-ready requests.
//!
//! Endpoints consumed, for a notebook `id` on base URL `<base>`:
//!
//! | Operation | Method | Path                               |
//! |-----------|--------|------------------------------------|
//! | eval      | POST   | `<base>/v1/notebook/{id}/eval`     |
//! | call      | POST   | `<base>/v1/notebook/{id}/call`     |
//! | static    | GET    | `<base>/v1/notebook/{id}/static`   |
//!
//! The identifier is percent-encoded as a single path segment on the
//! `eval` and `call` routes. The `static` route historically receives it
//! verbatim; that asymmetry is load-bearing for existing servers and is
//! kept here (see DESIGN.md).

use url::Url;

use crate::codec::JsonCodec;
use crate::error::{NotebookError, Result};

use super::payload::{CallRequest, EvalRequest};

/// HTTP method of a prepared request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully built request: everything the transport needs, nothing more.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<Vec<u8>>,
}

/// Headers for body-carrying requests: the codec's media type, declared
/// both for what we send and what we accept back.
fn codec_headers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Accept", JsonCodec::MEDIA_TYPE),
        ("Content-Type", JsonCodec::MEDIA_TYPE),
    ]
}

/// Build `<base>/v1/notebook/<escaped-id>/<action>` with the identifier
/// percent-encoded as one path segment (reserved characters included, so
/// identifiers containing `/` stay a single segment).
fn notebook_endpoint(base_url: &str, notebook_id: &str, action: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| NotebookError::InvalidUrl(format!("base URL `{base_url}`: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| {
            NotebookError::InvalidUrl(format!("base URL `{base_url}` cannot carry a path"))
        })?
        .pop_if_empty()
        .extend(["v1", "notebook"])
        .push(notebook_id)
        .push(action);
    Ok(url)
}

/// Build an `eval` request.
pub fn build_eval(base_url: &str, notebook_id: &str, request: &EvalRequest) -> Result<PreparedRequest> {
    Ok(PreparedRequest {
        method: HttpMethod::Post,
        url: notebook_endpoint(base_url, notebook_id, "eval")?,
        headers: codec_headers(),
        body: Some(JsonCodec::encode(request)?),
    })
}

/// Build a `call` request.
pub fn build_call(base_url: &str, notebook_id: &str, request: &CallRequest) -> Result<PreparedRequest> {
    Ok(PreparedRequest {
        method: HttpMethod::Post,
        url: notebook_endpoint(base_url, notebook_id, "call")?,
        headers: codec_headers(),
        body: Some(JsonCodec::encode(request)?),
    })
}

/// Build a `static` request: GET, no body, no codec headers.
///
/// The identifier goes into the path verbatim, not percent-encoded; the
/// inputs are comma-joined into a single query parameter.
pub fn build_static(
    base_url: &str,
    notebook_id: &str,
    output: &str,
    inputs: &[&str],
) -> Result<PreparedRequest> {
    let raw = format!(
        "{}/v1/notebook/{}/static",
        base_url.trim_end_matches('/'),
        notebook_id
    );
    let mut url = Url::parse(&raw)
        .map_err(|e| NotebookError::InvalidUrl(format!("static URL `{raw}`: {e}")))?;
    // Not query_pairs_mut(): form-encoding would turn the comma-joined
    // inputs list into `a%2Cb`, which the server does not accept.
    url.set_query(Some(&format!("outputs={}&inputs={}", output, inputs.join(","))));

    Ok(PreparedRequest {
        method: HttpMethod::Get,
        url,
        headers: Vec::new(),
        body: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn eval_request() -> EvalRequest {
        EvalRequest {
            outputs: vec!["c".to_string()],
            inputs: Map::new(),
        }
    }

    #[test]
    fn test_eval_url_plain_identifier() {
        let prepared = build_eval("http://localhost:1234", "physics.jl", &eval_request()).unwrap();
        assert_eq!(prepared.method, HttpMethod::Post);
        assert_eq!(
            prepared.url.as_str(),
            "http://localhost:1234/v1/notebook/physics.jl/eval"
        );
    }

    #[test]
    fn test_eval_url_escapes_reserved_characters() {
        let prepared =
            build_eval("http://localhost:1234", "dir/my notebook.jl", &eval_request()).unwrap();
        // `/` and space must be encoded so the identifier stays one segment.
        assert_eq!(
            prepared.url.path(),
            "/v1/notebook/dir%2Fmy%20notebook.jl/eval"
        );
    }

    #[test]
    fn test_eval_url_escapes_percent_sign() {
        // A literal `%` in the identifier must survive a decode round trip,
        // which requires encoding it rather than passing it through.
        let prepared = build_eval("http://localhost:1234", "100%.jl", &eval_request()).unwrap();
        assert_eq!(prepared.url.path(), "/v1/notebook/100%25.jl/eval");
    }

    #[test]
    fn test_eval_headers_declare_media_type() {
        let prepared = build_eval("http://localhost:1234", "nb.jl", &eval_request()).unwrap();
        assert!(prepared
            .headers
            .contains(&("Accept", "application/json")));
        assert!(prepared
            .headers
            .contains(&("Content-Type", "application/json")));
    }

    #[test]
    fn test_eval_body_is_encoded_request() {
        let mut inputs = Map::new();
        inputs.insert("a".to_string(), json!(3));
        let request = EvalRequest {
            outputs: vec!["c".to_string()],
            inputs,
        };
        let prepared = build_eval("http://localhost:1234", "nb.jl", &request).unwrap();

        let body: serde_json::Value =
            serde_json::from_slice(prepared.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"outputs": ["c"], "inputs": {"a": 3}}));
    }

    #[test]
    fn test_call_url_and_body() {
        let request = CallRequest {
            function: "add".to_string(),
            args: vec![json!(1), json!(2)],
            kwargs: Map::new(),
        };
        let prepared = build_call("http://localhost:1234", "math.jl", &request).unwrap();

        assert_eq!(
            prepared.url.as_str(),
            "http://localhost:1234/v1/notebook/math.jl/call"
        );
        let body: serde_json::Value =
            serde_json::from_slice(prepared.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"function": "add", "args": [1, 2], "kwargs": {}}));
    }

    #[test]
    fn test_base_url_trailing_slash_and_prefix_path() {
        let prepared = build_eval("http://host/", "nb.jl", &eval_request()).unwrap();
        assert_eq!(prepared.url.as_str(), "http://host/v1/notebook/nb.jl/eval");

        let prepared = build_eval("http://host/api", "nb.jl", &eval_request()).unwrap();
        assert_eq!(
            prepared.url.as_str(),
            "http://host/api/v1/notebook/nb.jl/eval"
        );
    }

    #[test]
    fn test_static_url_keeps_identifier_verbatim() {
        // Unlike eval/call, the static route does not escape the identifier;
        // a slash stays a path separator.
        let prepared =
            build_static("http://localhost:1234", "dir/nb.jl", "c", &["a", "b"]).unwrap();
        assert_eq!(prepared.method, HttpMethod::Get);
        assert_eq!(prepared.url.path(), "/v1/notebook/dir/nb.jl/static");
        assert!(prepared.body.is_none());
        assert!(prepared.headers.is_empty());
    }

    #[test]
    fn test_static_query_parameters() {
        let prepared =
            build_static("http://localhost:1234", "nb.jl", "c", &["a", "b"]).unwrap();
        assert_eq!(prepared.url.query(), Some("outputs=c&inputs=a,b"));
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        let err = build_eval("not a url", "nb.jl", &eval_request()).unwrap_err();
        assert!(matches!(err, NotebookError::InvalidUrl(_)));
    }
}
