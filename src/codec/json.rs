//! JSON codec using `serde_json`.
//!
//! # Example
//!
//! ```
//! use notebook_client::codec::JsonCodec;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Payload {
//!     outputs: Vec<String>,
//! }
//!
//! let payload = Payload { outputs: vec!["c".to_string()] };
//! let encoded = JsonCodec::encode(&payload).unwrap();
//! let decoded: Payload = JsonCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, payload);
//! ```

use crate::error::Result;

/// JSON codec for request and response bodies.
pub struct JsonCodec;

impl JsonCodec {
    /// Media type declared as both `Accept` and `Content-Type` on every
    /// body-carrying request.
    pub const MEDIA_TYPE: &'static str = "application/json";

    /// Encode a value to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(value)?)
    }

    /// Decode JSON bytes to a value.
    ///
    /// # Errors
    ///
    /// Returns error if the bytes cannot be deserialized to type T.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
