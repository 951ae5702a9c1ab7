//! Codec module - serialization boundary for wire payloads.
//!
//! The notebook protocol carries JSON bodies. [`JsonCodec`] is the single
//! point where typed payloads cross into body bytes and back; the rest of
//! the crate never serializes directly, so swapping the wire format means
//! touching this module only.

mod json;

pub use json::JsonCodec;
