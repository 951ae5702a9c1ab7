//! # notebook-client
//!
//! Rust client SDK for reactive notebook servers.
//!
//! A notebook server exposes named variables and functions over HTTP. This
//! crate turns a (input bindings, requested outputs) pair into a single
//! HTTP exchange and maps the response back to a typed value - including
//! the protocol's one twist: a name read as a variable may turn out to
//! denote a function, in which case resolution yields a
//! [`CallableReference`] from the same response instead of an error.
//!
//! ## Architecture
//!
//! - **protocol**: wire payloads and request construction (no I/O)
//! - **codec**: JSON payload boundary
//! - **transport**: blocking HTTP exchange, pluggable behind a trait
//! - **resolve**: response classification, incl. variable/callable dispatch
//!
//! ## Example
//!
//! ```no_run
//! use notebook_client::{Bindings, Notebook, Resolved, ServerConfig};
//!
//! fn main() -> notebook_client::Result<()> {
//!     let notebook = Notebook::open(ServerConfig::default(), "physics.jl");
//!
//!     // Bind inputs, read a dependent output.
//!     let mut inputs = Bindings::new();
//!     inputs.insert("a".to_string(), 5.0.into());
//!     inputs.insert("b".to_string(), 12.0.into());
//!     let c = notebook.bind(inputs).value("c")?;
//!     println!("c = {c}");
//!
//!     // A name may denote a function instead of a variable.
//!     match notebook.resolve("distance")? {
//!         Resolved::Value(v) => println!("distance = {v}"),
//!         Resolved::Callable(f) => {
//!             let d = f.call_positional(vec![3.into(), 4.into()])?;
//!             println!("distance(3, 4) = {d}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod protocol;
pub mod transport;

mod notebook;
mod resolve;
mod snippet;

pub use error::{NotebookError, Result};
pub use notebook::{
    Bindings, BoundParameters, CallableReference, Notebook, ServerConfig, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT,
};
pub use resolve::Resolved;
pub use snippet::StaticSnippet;
