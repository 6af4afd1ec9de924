//! Safe accessor functions over resource field containers.
//!
//! These functions implement a uniform three-state contract for reading
//! a named attribute, link, or relationship:
//!
//! 1. The key is present in its container: the stored value is returned,
//!    even when that value is falsy (`0`, `""`, `false`, `null`).
//! 2. The key is absent but a default was supplied: the default is
//!    returned exactly as given.
//! 3. Neither: a [`MissingFieldError`] naming the field and resource.
//!
//! Presence is decided by exact key membership, never by truthiness of
//! the stored value. The `Option` default argument is the sentinel that
//! distinguishes "default supplied" from "no default": `Some(..)` counts
//! as a default even when it wraps a falsy value.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_client::{get_attribute, has_attribute, Resource};
//! use serde_json::{json, Value};
//!
//! let resource = Resource::new("widgets").with_attribute("stock", json!(0));
//!
//! // A falsy value still counts as present.
//! assert!(has_attribute(&resource, "stock"));
//! assert_eq!(get_attribute(&resource, "stock", None).unwrap(), &json!(0));
//!
//! // A supplied default is used only when the key is absent.
//! let default = Value::from("n/a");
//! assert_eq!(get_attribute(&resource, "color", Some(&default)).unwrap(), &default);
//! ```

use serde_json::Value;

use crate::resources::errors::MissingFieldError;
use crate::resources::resource::{Linked, Relationship, Resource};

/// Returns true iff the resource has an attributes container that
/// directly holds the named key.
#[must_use]
pub fn has_attribute(resource: &Resource, name: &str) -> bool {
    resource
        .attributes
        .as_ref()
        .is_some_and(|attributes| attributes.contains_key(name))
}

/// Reads the named attribute from a resource.
///
/// Returns the stored value when present, else the supplied default,
/// else fails. The returned reference is identity-preserving: it points
/// into the resource or at the exact default that was passed in.
///
/// # Errors
///
/// Returns [`MissingFieldError::Attribute`] when the attribute is absent
/// and no default was supplied.
pub fn get_attribute<'a>(
    resource: &'a Resource,
    name: &str,
    default: Option<&'a Value>,
) -> Result<&'a Value, MissingFieldError> {
    if let Some(value) = resource
        .attributes
        .as_ref()
        .and_then(|attributes| attributes.get(name))
    {
        return Ok(value);
    }
    default.ok_or_else(|| MissingFieldError::Attribute {
        name: name.to_string(),
        on: resource.describe(),
    })
}

/// Returns true iff the target has a links container that directly
/// holds the named key.
///
/// Works on any [`Linked`] value: resources and relationship objects.
#[must_use]
pub fn has_link<L: Linked>(target: &L, name: &str) -> bool {
    target.links().is_some_and(|links| links.contains_key(name))
}

/// Reads the named link from a resource or relationship object.
///
/// Same three-state contract as [`get_attribute`]; an empty-string link
/// value counts as present.
///
/// # Errors
///
/// Returns [`MissingFieldError::Link`] when the link is absent and no
/// default was supplied.
pub fn get_link<'a, L: Linked>(
    target: &'a L,
    name: &str,
    default: Option<&'a str>,
) -> Result<&'a str, MissingFieldError> {
    if let Some(url) = target.links().and_then(|links| links.get(name)) {
        return Ok(url.as_str());
    }
    default.ok_or_else(|| MissingFieldError::Link {
        name: name.to_string(),
        on: target.describe(),
    })
}

/// Returns true iff the resource has a relationships container that
/// directly holds the named key.
#[must_use]
pub fn has_relationship(resource: &Resource, name: &str) -> bool {
    resource
        .relationships
        .as_ref()
        .is_some_and(|relationships| relationships.contains_key(name))
}

/// Reads the named relationship object from a resource.
///
/// There is no default form: absence always fails. Callers that want to
/// probe first should use [`has_relationship`].
///
/// # Errors
///
/// Returns [`MissingFieldError::Relationship`] when the relationship is
/// absent.
pub fn get_relationship<'a>(
    resource: &'a Resource,
    name: &str,
) -> Result<&'a Relationship, MissingFieldError> {
    resource
        .relationships
        .as_ref()
        .and_then(|relationships| relationships.get(name))
        .ok_or_else(|| MissingFieldError::Relationship {
            name: name.to_string(),
            on: resource.describe(),
        })
}
