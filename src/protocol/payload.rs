//! Request and response body shapes.
//!
//! Field names and nesting must match the server byte-for-byte; they are
//! part of the interoperability contract, not an internal detail.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of an `eval` request: requested output names plus input bindings.
///
/// `outputs` is non-empty on the single-value path; the server may answer
/// with a superset of the requested outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalRequest {
    pub outputs: Vec<String>,
    pub inputs: Map<String, Value>,
}

/// Body of a `call` request: function name, positional args, named args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub function: String,
    pub args: Vec<Value>,
    pub kwargs: Map<String, Value>,
}

/// Decoded body of a successful `eval` response: output name to value.
pub type EvalResponse = Map<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_eval_request_wire_shape() {
        let mut inputs = Map::new();
        inputs.insert("a".to_string(), json!(5.0));
        inputs.insert("b".to_string(), json!(12.0));
        let request = EvalRequest {
            outputs: vec!["c".to_string()],
            inputs,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"outputs": ["c"], "inputs": {"a": 5.0, "b": 12.0}})
        );
    }

    #[test]
    fn test_call_request_wire_shape() {
        let request = CallRequest {
            function: "add".to_string(),
            args: vec![json!(1), json!(2)],
            kwargs: Map::new(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"function": "add", "args": [1, 2], "kwargs": {}})
        );
    }
}
