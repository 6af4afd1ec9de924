//! The transport seam: request descriptors and the adapter abstraction.
//!
//! The client never performs I/O itself. Every operation resolves to a
//! [`TransportRequest`] which is handed to the configured [`Adapter`];
//! whatever the adapter returns is passed back to the caller unmodified.

use std::collections::HashMap;

use crate::clients::http_request::HttpMethod;

/// A fully resolved request descriptor handed to the transport.
///
/// The URL includes any query string; the headers always carry the
/// JSON:API `accept` and `content-type` values with names lowercased;
/// `data` is the exact JSON text of the request body when one exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The fully resolved URL, query string included.
    pub url: String,
    /// Header names (lowercase) to values.
    pub headers: HashMap<String, String>,
    /// The JSON-serialized request body, if any.
    pub data: Option<String>,
}

/// The transport function executing a [`TransportRequest`].
///
/// This is the sole I/O boundary of the crate. The output type is
/// implementation-defined: an adapter may return a response directly, a
/// future, or anything else; the client performs no awaiting, retrying,
/// or interpretation of the result. How HTTP-level failures are signaled
/// is the adapter's own documented contract.
///
/// Any `Fn(TransportRequest) -> R` closure is an adapter, which makes
/// test doubles trivial:
///
/// ```rust
/// use jsonapi_client::{Client, TransportRequest};
///
/// // An adapter that simply echoes the descriptor back.
/// let client = Client::new(|request: TransportRequest| request);
/// let echoed = client.find_resources("widgets", None).unwrap();
/// assert_eq!(echoed.url, "/widgets/");
/// ```
pub trait Adapter {
    /// The adapter's result type.
    type Output;

    /// Executes the request descriptor.
    fn call(&self, request: TransportRequest) -> Self::Output;
}

impl<F, R> Adapter for F
where
    F: Fn(TransportRequest) -> R,
{
    type Output = R;

    fn call(&self, request: TransportRequest) -> R {
        self(request)
    }
}

// Verify the descriptor is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportRequest>();
};
