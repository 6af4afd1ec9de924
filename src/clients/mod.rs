//! The request-building client and its transport seam.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: translates resource operations into request descriptors
//! - [`ClientBuilder`]: fail-fast construction with a required adapter
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: caller-facing request
//!   options (method, url, body, extra headers)
//! - [`TransportRequest`]: the resolved descriptor handed to the adapter
//! - [`Adapter`]: the single-method transport abstraction; any
//!   `Fn(TransportRequest) -> R` closure qualifies
//! - [`ReqwestAdapter`] / [`HttpResponse`]: the bundled async transport
//! - [`ClientError`], [`MissingLinkError`], [`HttpError`]: failure types
//!
//! The client performs no network I/O, no retries, and no response
//! interpretation; all of that lives behind the adapter boundary.

mod client;
mod errors;
mod http_request;
mod http_response;
mod reqwest_adapter;
mod transport;

pub use client::{Client, ClientBuilder, DEFAULT_URL_PREFIX, JSON_API_MEDIA_TYPE};
pub use errors::{ClientError, HttpError, MissingLinkError};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use reqwest_adapter::{ReqwestAdapter, ResponseFuture};
pub use transport::{Adapter, TransportRequest};
