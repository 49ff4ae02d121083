use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Per-call options forwarded to the transport, untouched by callers in
/// between. Recognized fields cover what the HTTP layer can honor; anything
/// else goes into `extensions` for transport-specific handling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
    pub query: Vec<(String, String)>,
    pub extensions: HashMap<String, Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }
}
