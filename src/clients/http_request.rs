//! Request option types for the JSON:API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! describing a request before the client resolves it into a
//! [`crate::clients::TransportRequest`].

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

/// HTTP methods used by the JSON:API resource operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for fetching resources. The default.
    #[default]
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for updating resources.
    Patch,
}

impl HttpMethod {
    /// Returns the upper-case verb for this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request options handed to [`crate::Client::request`].
///
/// The client resolves these into a transport descriptor: the JSON:API
/// content negotiation headers are injected on top of `extra_headers`,
/// and `body`, when present, is serialized to the descriptor's data
/// string.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// // GET request (the default method)
/// let get_request = HttpRequest::builder("/widgets/7/").build();
/// assert_eq!(get_request.method, HttpMethod::Get);
///
/// // POST request with a JSON body
/// let post_request = HttpRequest::builder("/widgets/")
///     .method(HttpMethod::Post)
///     .body(json!({"data": {"type": "widgets"}}))
///     .build();
/// assert!(post_request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The fully resolved URL for this request.
    pub url: String,
    /// The request body, if any, serialized by the client on dispatch.
    pub body: Option<Value>,
    /// Additional headers to include in the request. The JSON:API
    /// `accept` and `content-type` headers override same-named entries.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for the given URL. The method defaults to
    /// GET.
    #[must_use]
    pub fn builder(url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    url: String,
    body: Option<Value>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
            extra_headers: None,
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: self.url,
            body: self.body,
            extra_headers: self.extra_headers,
        }
    }
}
