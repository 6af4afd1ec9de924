//! The request-building JSON:API client.
//!
//! [`Client`] translates resource-level operations into fully resolved
//! [`TransportRequest`] descriptors and delegates execution to the
//! configured [`Adapter`]. It holds no state beyond its configuration
//! and never mutates it; every call is independent and reentrant.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::{ClientError, MissingLinkError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::transport::{Adapter, TransportRequest};
use crate::error::ConfigError;
use crate::resources::{get_link, get_relationship, Resource};

/// The JSON:API media type carried by every outgoing descriptor.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// The URL prefix used when none is configured.
pub const DEFAULT_URL_PREFIX: &str = "/";

/// A request-building client for JSON:API services.
///
/// The client resolves a resource's navigational links (falling back to
/// canonical URLs built from type and id), shapes a request descriptor
/// with the JSON:API content negotiation headers, and hands it to the
/// adapter. Whatever the adapter returns is passed back unmodified.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{Client, HttpMethod, Resource, TransportRequest};
///
/// // An echo adapter returns the descriptor for inspection.
/// let client = Client::new(|request: TransportRequest| request);
///
/// let resource = Resource::new("widgets").with_id("7");
/// let request = client.fetch_resource(&resource, None).unwrap();
///
/// assert_eq!(request.method, HttpMethod::Get);
/// assert_eq!(request.url, "/widgets/7/");
/// assert_eq!(
///     request.headers.get("accept").map(String::as_str),
///     Some("application/vnd.api+json"),
/// );
/// ```
#[derive(Clone)]
pub struct Client<A> {
    adapter: A,
    url_prefix: String,
}

impl<A> fmt::Debug for Client<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("url_prefix", &self.url_prefix)
            .finish_non_exhaustive()
    }
}

impl<A: Adapter> Client<A> {
    /// Creates a client with the given adapter and the default URL
    /// prefix (`/`).
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
        }
    }

    /// Creates a new builder for constructing a `Client`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsonapi_client::{Client, TransportRequest};
    ///
    /// let client = Client::builder()
    ///     .adapter(|request: TransportRequest| request)
    ///     .url_prefix("https://api.example.com/v1")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(client.url_prefix(), "https://api.example.com/v1");
    /// ```
    #[must_use]
    pub fn builder() -> ClientBuilder<A> {
        ClientBuilder::default()
    }

    /// Returns the configured URL prefix.
    #[must_use]
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Builds the canonical URL for a resource type and optional id.
    ///
    /// The result is the prefix joined with `/{kind}/{id}/`, trailing
    /// slash always present and the id segment omitted when absent. The
    /// prefix itself may be absolute or relative.
    #[must_use]
    pub fn build_link_for(&self, kind: &str, id: Option<&str>) -> String {
        let prefix = self.url_prefix.trim_end_matches('/');
        id.map_or_else(
            || format!("{prefix}/{kind}/"),
            |id| format!("{prefix}/{kind}/{id}/"),
        )
    }

    /// Resolves request options into a descriptor and invokes the
    /// adapter.
    ///
    /// Header names are lowercased and the JSON:API `accept` and
    /// `content-type` values are injected, silently overriding any
    /// caller-supplied entries of those names. A body, when present, is
    /// serialized to the descriptor's data string.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialize`] when the body cannot be
    /// serialized to JSON.
    pub fn request(&self, request: HttpRequest) -> Result<A::Output, ClientError> {
        let HttpRequest {
            method,
            url,
            body,
            extra_headers,
        } = request;

        let mut headers: HashMap<String, String> = extra_headers
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
        headers.insert("accept".to_string(), JSON_API_MEDIA_TYPE.to_string());
        headers.insert("content-type".to_string(), JSON_API_MEDIA_TYPE.to_string());

        let data = body.as_ref().map(serde_json::to_string).transpose()?;

        tracing::debug!(%method, %url, has_body = data.is_some(), "dispatching request to adapter");

        Ok(self.adapter.call(TransportRequest {
            method,
            url,
            headers,
            data,
        }))
    }

    /// Fetches a single resource.
    ///
    /// GET on the resource's `self` link when present, else the
    /// canonical URL built from type and id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialize`] when dispatch fails; link
    /// resolution itself cannot fail because the canonical URL is always
    /// available as a fallback.
    pub fn fetch_resource(
        &self,
        resource: &Resource,
        query: Option<&HashMap<String, String>>,
    ) -> Result<A::Output, ClientError> {
        let canonical = self.build_link_for(&resource.kind, resource.id.as_deref());
        let url = get_link(resource, "self", Some(canonical.as_str()))?.to_string();

        self.request(HttpRequest::builder(append_query(&url, query)).build())
    }

    /// Lists resources of the given type.
    ///
    /// GET on the canonical collection URL for the type.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialize`] when dispatch fails.
    pub fn find_resources(
        &self,
        kind: &str,
        query: Option<&HashMap<String, String>>,
    ) -> Result<A::Output, ClientError> {
        let url = self.build_link_for(kind, None);

        self.request(HttpRequest::builder(append_query(&url, query)).build())
    }

    /// Creates a resource.
    ///
    /// POST on the canonical collection URL for the resource's type; a
    /// `self` link is never consulted since the resource has no identity
    /// yet. The body is the JSON text of `{"data": resource}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialize`] when the resource cannot be
    /// serialized.
    pub fn create_resource(
        &self,
        resource: &Resource,
        query: Option<&HashMap<String, String>>,
    ) -> Result<A::Output, ClientError> {
        let url = self.build_link_for(&resource.kind, None);

        self.request(
            HttpRequest::builder(append_query(&url, query))
                .method(HttpMethod::Post)
                .body(document_body(resource)?)
                .build(),
        )
    }

    /// Updates a resource.
    ///
    /// PATCH on the resource's `self` link when present, else the
    /// canonical URL built from type and id. The body is the JSON text
    /// of `{"data": resource}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialize`] when the resource cannot be
    /// serialized.
    pub fn update_resource(
        &self,
        resource: &Resource,
        query: Option<&HashMap<String, String>>,
    ) -> Result<A::Output, ClientError> {
        let canonical = self.build_link_for(&resource.kind, resource.id.as_deref());
        let url = get_link(resource, "self", Some(canonical.as_str()))?.to_string();

        self.request(
            HttpRequest::builder(append_query(&url, query))
                .method(HttpMethod::Patch)
                .body(document_body(resource)?)
                .build(),
        )
    }

    /// Follows a named relationship to its related resources.
    ///
    /// GET on the relationship's `related` link, taken verbatim apart
    /// from query-string appension. There is no fallback for a missing
    /// `related` link.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingField`] when the relationship is
    /// not defined on the resource, and [`ClientError::MissingLink`]
    /// when it lacks a `related` link.
    pub fn fetch_related_resource(
        &self,
        resource: &Resource,
        relationship: &str,
        query: Option<&HashMap<String, String>>,
    ) -> Result<A::Output, ClientError> {
        let related = get_relationship(resource, relationship)?;
        let url = get_link(related, "related", None).map_err(|_| MissingLinkError {
            relationship: relationship.to_string(),
        })?;

        self.request(HttpRequest::builder(append_query(url, query)).build())
    }
}

/// Builder for constructing [`Client`] instances.
///
/// The adapter is required; `url_prefix` defaults to `/`.
pub struct ClientBuilder<A> {
    adapter: Option<A>,
    url_prefix: Option<String>,
}

impl<A> Default for ClientBuilder<A> {
    fn default() -> Self {
        Self {
            adapter: None,
            url_prefix: None,
        }
    }
}

impl<A> fmt::Debug for ClientBuilder<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("adapter", &self.adapter.as_ref().map(|_| "<adapter>"))
            .field("url_prefix", &self.url_prefix)
            .finish()
    }
}

impl<A: Adapter> ClientBuilder<A> {
    /// Sets the transport adapter.
    #[must_use]
    pub fn adapter(mut self, adapter: A) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Sets the URL prefix used to build canonical resource URLs.
    #[must_use]
    pub fn url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.url_prefix = Some(url_prefix.into());
        self
    }

    /// Builds the [`Client`], validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAdapter`] when no adapter was
    /// supplied.
    pub fn build(self) -> Result<Client<A>, ConfigError> {
        let adapter = self.adapter.ok_or(ConfigError::MissingAdapter)?;
        Ok(Client {
            adapter,
            url_prefix: self
                .url_prefix
                .unwrap_or_else(|| DEFAULT_URL_PREFIX.to_string()),
        })
    }
}

/// Wraps a resource in the JSON:API document structure `{"data": ..}`.
fn document_body(resource: &Resource) -> Result<Value, ClientError> {
    let mut document = serde_json::Map::new();
    document.insert("data".to_string(), serde_json::to_value(resource)?);
    Ok(Value::Object(document))
}

/// Appends a query mapping to a URL with percent-encoding.
///
/// Pairs are sorted by key so produced URLs are stable. An absent or
/// empty query leaves the URL unchanged; a URL that already carries a
/// query string is extended with `&`.
fn append_query(url: &str, query: Option<&HashMap<String, String>>) -> String {
    let Some(query) = query.filter(|query| !query.is_empty()) else {
        return url.to_string();
    };

    let mut pairs: Vec<(&String, &String)> = query.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let encoded = pairs
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{encoded}")
}
