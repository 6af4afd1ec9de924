//! # jsonapi-client
//!
//! A transport-agnostic Rust client for services speaking the
//! [JSON:API](https://jsonapi.org) convention: resources with typed
//! identity, attributes, relationships, and navigational links.
//!
//! ## Overview
//!
//! This crate provides:
//! - Safe accessor functions over resource values with explicit presence
//!   checks and fallbacks ([`has_attribute`], [`get_attribute`],
//!   [`has_link`], [`get_link`], [`has_relationship`],
//!   [`get_relationship`])
//! - A request-building [`Client`] translating resource operations
//!   (fetch, list, create, update, follow a relationship) into
//!   [`TransportRequest`] descriptors
//! - An [`Adapter`] seam so network I/O is entirely caller-supplied —
//!   any `Fn(TransportRequest) -> R` closure works
//! - A bundled async [`ReqwestAdapter`] transport for callers who want
//!   one
//!
//! The client itself performs no network I/O, caching, pagination, or
//! retries; it shapes descriptors and passes the adapter's result back
//! unmodified.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_client::{Client, HttpMethod, Resource, TransportRequest};
//!
//! // The adapter is the transport boundary. An echo closure makes the
//! // descriptors directly inspectable.
//! let client = Client::builder()
//!     .adapter(|request: TransportRequest| request)
//!     .build()
//!     .unwrap();
//!
//! let resource = Resource::new("widgets").with_id("7");
//! let request = client.fetch_resource(&resource, None).unwrap();
//!
//! assert_eq!(request.method, HttpMethod::Get);
//! assert_eq!(request.url, "/widgets/7/");
//! ```
//!
//! ## Reading resource fields
//!
//! Presence is decided by exact key membership, never by truthiness, and
//! defaults are explicit:
//!
//! ```rust
//! use jsonapi_client::{get_attribute, has_attribute, Resource};
//! use serde_json::json;
//!
//! let resource = Resource::new("widgets").with_attribute("stock", json!(0));
//!
//! assert!(has_attribute(&resource, "stock"));
//! assert_eq!(get_attribute(&resource, "stock", None).unwrap(), &json!(0));
//!
//! let default = json!("unknown");
//! let color = get_attribute(&resource, "color", Some(&default)).unwrap();
//! assert_eq!(color, &default);
//! ```
//!
//! ## Making real requests
//!
//! ```rust,ignore
//! use jsonapi_client::{Client, Resource, ReqwestAdapter};
//!
//! let client = Client::builder()
//!     .adapter(ReqwestAdapter::new()?)
//!     .url_prefix("https://api.example.com/v1")
//!     .build()?;
//!
//! let resource = Resource::new("widgets").with_id("7");
//! let response = client.fetch_resource(&resource, None)?.await?;
//! ```
//!
//! ## Design Principles
//!
//! - **Transport-agnostic**: the adapter is an injected capability; the
//!   client never awaits, retries, or interprets its result
//! - **Exact presence semantics**: falsy-but-present values are present
//! - **Fail-fast validation**: builder construction returns `Result`
//! - **Stateless**: every call is an independent, reentrant
//!   transformation from inputs to a request descriptor

pub mod clients;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use clients::{
    Adapter, Client, ClientBuilder, ClientError, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, MissingLinkError, ReqwestAdapter, ResponseFuture,
    TransportRequest, DEFAULT_URL_PREFIX, JSON_API_MEDIA_TYPE,
};
pub use error::ConfigError;
pub use resources::{
    get_attribute, get_link, get_relationship, has_attribute, has_link, has_relationship, Linked,
    MissingFieldError, Relationship, Resource,
};
