//! Error types for the request-building client and the default transport.
//!
//! # Error Handling
//!
//! Client operations fail fast on local precondition violations and
//! propagate the failure synchronously to the caller:
//!
//! - [`MissingLinkError`]: a relationship has no `related` link to follow
//! - [`ClientError`]: unified error for all client operations
//! - [`HttpError`]: network-level failures from the default transport
//!
//! HTTP-level failures (non-2xx responses) are never translated here;
//! signaling those is the transport's documented contract.

use thiserror::Error;

use crate::resources::MissingFieldError;

/// Error returned when a relationship object lacks a `related` link.
///
/// Unlike a resource's `self` link, which falls back to the canonical
/// URL built from type and id, relationship navigation has no fallback:
/// a missing `related` link always fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Relationship '{relationship}' has no 'related' link.")]
pub struct MissingLinkError {
    /// The relationship whose `related` link is missing.
    pub relationship: String,
}

/// Unified error type for client operations.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{Client, ClientError, Resource, TransportRequest};
///
/// let client = Client::new(|request: TransportRequest| request);
/// let resource = Resource::new("widgets").with_id("7");
///
/// // No 'owner' relationship exists on this resource.
/// let result = client.fetch_related_resource(&resource, "owner", None);
/// assert!(matches!(result, Err(ClientError::MissingField(_))));
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required attribute, link, or relationship was absent.
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    /// A relationship had no `related` link to follow.
    #[error(transparent)]
    MissingLink(#[from] MissingLinkError),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error type for the bundled reqwest transport.
///
/// Non-2xx responses are not errors at this layer; they are returned as
/// ordinary [`crate::clients::HttpResponse`] values for the caller to
/// inspect.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or protocol error while performing the exchange.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_link_error_names_relationship() {
        let error = MissingLinkError {
            relationship: "owner".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Relationship 'owner' has no 'related' link."
        );
    }

    #[test]
    fn test_client_error_is_transparent_for_missing_field() {
        let inner = MissingFieldError::Relationship {
            name: "owner".to_string(),
            on: "resource 'widgets'".to_string(),
        };
        let error = ClientError::from(inner.clone());
        assert_eq!(error.to_string(), inner.to_string());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let missing_link: &dyn std::error::Error = &MissingLinkError {
            relationship: "owner".to_string(),
        };
        let _ = missing_link;

        let client_error: &dyn std::error::Error = &ClientError::MissingLink(MissingLinkError {
            relationship: "owner".to_string(),
        });
        let _ = client_error;
    }
}
