//! A ready-made asynchronous transport built on reqwest.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{Adapter, TransportRequest};

/// The future type returned by [`ReqwestAdapter`].
pub type ResponseFuture = Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send>>;

/// An [`Adapter`] that performs the exchange with reqwest.
///
/// The descriptor is sent exactly as received: method, URL, headers, and
/// body text. Every HTTP status code is returned as an
/// [`HttpResponse`] — this adapter does not interpret HTTP-level
/// failures, retry, or time out; only network and protocol failures
/// surface as [`HttpError::Network`]. Callers check
/// [`HttpResponse::is_ok`] themselves.
///
/// # Example
///
/// ```rust,ignore
/// use jsonapi_client::{Client, Resource, ReqwestAdapter};
///
/// let client = Client::builder()
///     .adapter(ReqwestAdapter::new()?)
///     .url_prefix("https://api.example.com/v1")
///     .build()?;
///
/// let resource = Resource::new("widgets").with_id("7");
/// let response = client.fetch_resource(&resource, None)?.await?;
/// if response.is_ok() {
///     println!("widget: {}", response.body);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ReqwestAdapter {
    client: reqwest::Client,
}

impl ReqwestAdapter {
    /// Creates a new adapter with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] when the underlying client cannot
    /// be constructed (e.g. TLS backend initialization failure).
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Creates an adapter around an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let name = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(name).or_default().push(value);
        }
        result
    }
}

impl Adapter for ReqwestAdapter {
    type Output = ResponseFuture;

    fn call(&self, request: TransportRequest) -> Self::Output {
        let client = self.client.clone();

        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => client.get(&request.url),
                HttpMethod::Post => client.post(&request.url),
                HttpMethod::Patch => client.patch(&request.url),
            };

            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            if let Some(data) = request.data {
                builder = builder.body(data);
            }

            let response = builder.send().await?;

            let code = response.status().as_u16();
            let headers = Self::parse_response_headers(response.headers());
            let text = response.text().await.unwrap_or_default();

            // Lenient body parsing: empty bodies become an empty object,
            // non-JSON bodies are preserved under raw_body.
            let body = if text.is_empty() {
                Value::Object(serde_json::Map::new())
            } else {
                serde_json::from_str(&text)
                    .unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
            };

            Ok(HttpResponse::new(code, headers, body))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestAdapter>();
    }

    #[test]
    fn test_parse_response_headers_lowercases_and_groups() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("Content-Type", "application/vnd.api+json".parse().unwrap());
        headers.append("X-Multi", "one".parse().unwrap());
        headers.append("X-Multi", "two".parse().unwrap());

        let parsed = ReqwestAdapter::parse_response_headers(&headers);

        assert_eq!(
            parsed.get("content-type"),
            Some(&vec!["application/vnd.api+json".to_string()])
        );
        assert_eq!(
            parsed.get("x-multi"),
            Some(&vec!["one".to_string(), "two".to_string()])
        );
    }
}
