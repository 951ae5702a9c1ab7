//! Notebook handles - the public entry points of the crate.
//!
//! A [`Notebook`] is an immutable (server, identifier) pair issuing
//! requests through a shared [`Transport`]. Binding inputs produces a
//! [`BoundParameters`] view; resolving a name through it yields either the
//! variable's value or a [`CallableReference`], depending on what the name
//! denotes on the server. All three types are immutable value types, so
//! sharing them across threads needs no synchronization.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::protocol::{self, CallRequest, EvalRequest, PreparedRequest};
use crate::resolve::{self, Resolved};
use crate::transport::{HttpTransport, Transport, TransportResponse};

/// Server address used when a [`ServerConfig`] is not customized.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1234";

/// Per-request timeout of the built-in HTTP transport, unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Named input bindings sent as the `inputs` of an eval request.
pub type Bindings = Map<String, Value>;

/// Connection settings for a notebook server.
///
/// Threaded explicitly through construction; the crate keeps no ambient
/// host state.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the server, e.g. `http://localhost:1234`.
    pub base_url: String,
    /// Per-request timeout applied by the built-in HTTP transport.
    pub timeout: Duration,
}

impl ServerConfig {
    /// Config for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Immutable handle to one notebook on one server.
///
/// Cloning is cheap; the transport is shared. Equality considers only the
/// base URL and identifier.
#[derive(Clone)]
pub struct Notebook {
    config: ServerConfig,
    identifier: String,
    transport: Arc<dyn Transport>,
}

impl Notebook {
    /// Open a notebook using the built-in blocking HTTP transport.
    ///
    /// No connection is made here; every operation is one independent
    /// round trip.
    pub fn open(config: ServerConfig, identifier: impl Into<String>) -> Self {
        let transport = Arc::new(HttpTransport::new(config.timeout));
        Self::with_transport(config, identifier, transport)
    }

    /// Open a notebook over a caller-supplied transport.
    pub fn with_transport(
        config: ServerConfig,
        identifier: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            identifier: identifier.into(),
            transport,
        }
    }

    /// Base URL of the server this notebook lives on.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Notebook identifier (filename or path on the server).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Bind input values for subsequent reads. Performs no network I/O.
    pub fn bind(&self, bindings: Bindings) -> BoundParameters {
        BoundParameters {
            notebook: self.clone(),
            bindings,
        }
    }

    /// Resolve a name with no input bindings; exactly one round trip.
    pub fn resolve(&self, name: &str) -> Result<Resolved> {
        self.bind(Bindings::new()).resolve(name)
    }

    /// Read a variable's current value with no input bindings.
    ///
    /// A name denoting a function surfaces as the server's own error here;
    /// use [`resolve`](Self::resolve) for transparent dispatch.
    pub fn value(&self, name: &str) -> Result<Value> {
        self.bind(Bindings::new()).value(name)
    }

    /// Handle to a remote function known by name, without a probe request.
    pub fn function(&self, name: impl Into<String>) -> CallableReference {
        CallableReference::new(self.clone(), name)
    }

    pub(crate) fn send(&self, request: &PreparedRequest) -> Result<TransportResponse> {
        self.transport.send(request)
    }

    fn eval_round_trip(&self, output: &str, bindings: &Bindings) -> Result<TransportResponse> {
        let request = EvalRequest {
            outputs: vec![output.to_string()],
            inputs: bindings.clone(),
        };
        let prepared = protocol::build_eval(&self.config.base_url, &self.identifier, &request)?;
        self.send(&prepared)
    }
}

impl fmt::Debug for Notebook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notebook")
            .field("base_url", &self.config.base_url)
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Notebook {
    fn eq(&self, other: &Self) -> bool {
        self.config.base_url == other.config.base_url && self.identifier == other.identifier
    }
}

impl Eq for Notebook {}

/// A transient binding of input values to a notebook.
///
/// Exists only to carry bindings into one or more reads; never mutated
/// after creation. No validation happens client-side beyond what the
/// server performs.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundParameters {
    notebook: Notebook,
    bindings: Bindings,
}

impl BoundParameters {
    /// Resolve one output name against the captured bindings.
    ///
    /// One eval round trip. The result is a value when the server reports
    /// a variable and a callable when it reports a function; the same
    /// response serves both cases.
    pub fn resolve(&self, name: &str) -> Result<Resolved> {
        let response = self.notebook.eval_round_trip(name, &self.bindings)?;
        resolve::resolve_variable(&self.notebook, name, response)
    }

    /// Read one output's value against the captured bindings.
    ///
    /// A name denoting a function surfaces as the server's own error; use
    /// [`resolve`](Self::resolve) for transparent dispatch.
    pub fn value(&self, name: &str) -> Result<Value> {
        let response = self.notebook.eval_round_trip(name, &self.bindings)?;
        resolve::resolve_eval(response, name)
    }

    /// Resolve several outputs, preserving requested order.
    ///
    /// Issues one eval request per name. Batching them into a single
    /// request would be observably equivalent apart from round-trip count;
    /// latency-sensitive callers should count one exchange per name.
    pub fn resolve_many(&self, names: &[&str]) -> Result<Vec<(String, Resolved)>> {
        let mut results = Vec::with_capacity(names.len());
        for name in names {
            results.push(((*name).to_string(), self.resolve(name)?));
        }
        Ok(results)
    }

    /// The captured input bindings.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// The notebook these bindings apply to.
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }
}

/// Handle to a remote function bound to one notebook.
///
/// Stateless beyond its identity; invocable any number of times. Obtained
/// from [`Notebook::function`] or from resolution of a name the server
/// reports as a function.
#[derive(Debug, Clone)]
pub struct CallableReference {
    notebook: Notebook,
    name: String,
}

impl CallableReference {
    pub(crate) fn new(notebook: Notebook, name: impl Into<String>) -> Self {
        Self {
            notebook,
            name: name.into(),
        }
    }

    /// Function name on the server.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The notebook this function belongs to.
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    /// Invoke the remote function with positional and named arguments.
    ///
    /// The decoded result is returned unmodified; call results are never
    /// reinterpreted as callables.
    pub fn call(&self, args: Vec<Value>, kwargs: Bindings) -> Result<Value> {
        let request = CallRequest {
            function: self.name.clone(),
            args,
            kwargs,
        };
        let prepared = protocol::build_call(
            self.notebook.base_url(),
            self.notebook.identifier(),
            &request,
        )?;
        let response = self.notebook.send(&prepared)?;
        resolve::resolve_call(response)
    }

    /// Invoke with positional arguments only.
    pub fn call_positional(&self, args: Vec<Value>) -> Result<Value> {
        self.call(args, Bindings::new())
    }
}

impl PartialEq for CallableReference {
    fn eq(&self, other: &Self) -> bool {
        self.notebook == other.notebook && self.name == other.name
    }
}

impl Eq for CallableReference {}
