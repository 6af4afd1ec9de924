//! HTTP response type for the bundled transport.

use std::collections::HashMap;

use serde_json::Value;

/// A parsed HTTP response from the bundled reqwest transport.
///
/// The client itself never inspects responses; this type exists for
/// callers using [`crate::clients::ReqwestAdapter`], which returns every
/// status code as a response and reserves errors for network failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, names lowercased, values in arrival order.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body parsed as JSON. Empty bodies become an empty
    /// object; non-JSON bodies are wrapped under a `raw_body` key.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns true when the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of the named header, if present.
    ///
    /// Lookup is by lowercase name, matching how headers are stored.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
