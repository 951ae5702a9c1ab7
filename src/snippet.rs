//! Static snippet fetch - the secondary, server-bypassing path.
//!
//! Fetches the textual source fragment that computes one output from a set
//! of inputs. Whatever the caller does with that fragment (parsing,
//! compiling, executing) happens in the caller's own environment and
//! bypasses the server for all subsequent invocations. Because the source
//! comes from a remote, potentially untrusted host, a prominent warning is
//! logged before the request is even issued.

use crate::error::Result;
use crate::notebook::Notebook;
use crate::protocol;
use crate::resolve;

/// A fetched source fragment computing `output` from `inputs`.
///
/// The crate does not parse or evaluate `source`; caching a compiled form
/// is the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSnippet {
    pub output: String,
    pub inputs: Vec<String>,
    pub source: String,
}

impl Notebook {
    /// Fetch the static source fragment for `output` given `inputs`.
    ///
    /// The returned text is remote-supplied program code and must be
    /// treated as untrusted before anything is done with it.
    pub fn static_snippet(&self, output: &str, inputs: &[&str]) -> Result<StaticSnippet> {
        tracing::warn!(
            host = %self.base_url(),
            notebook = %self.identifier(),
            output,
            "fetching remote code for local use; treat the returned source as untrusted"
        );

        let prepared = protocol::build_static(self.base_url(), self.identifier(), output, inputs)?;
        let response = self.send(&prepared)?;
        resolve::check_status(&response)?;

        Ok(StaticSnippet {
            output: output.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            source: response.body_text(),
        })
    }
}
