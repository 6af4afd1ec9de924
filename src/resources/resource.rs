//! The JSON:API resource data model.
//!
//! This module provides the [`Resource`] and [`Relationship`] types along
//! with the [`Linked`] trait, the shared seam over values that carry a
//! navigational links map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A value that carries a JSON:API links map.
///
/// Both [`Resource`] and [`Relationship`] objects hold navigational links
/// (`self`, `related`, ...). Implementing this trait lets the link
/// accessors in [`crate::resources`] share one contract for both.
pub trait Linked {
    /// Returns the links map, if one is present.
    fn links(&self) -> Option<&HashMap<String, String>>;

    /// Returns a short human-readable description used in error messages.
    fn describe(&self) -> String;
}

/// A JSON:API resource: a typed, identified entity with attributes,
/// relationships, and navigational links.
///
/// All containers are optional; a resource fresh from a create form has
/// no `id` and may have no `links`. Serialization mirrors the JSON:API
/// document structure exactly, with absent containers omitted.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::Resource;
/// use serde_json::json;
///
/// let resource = Resource::new("widgets")
///     .with_id("7")
///     .with_attribute("name", json!("sprocket"))
///     .with_link("self", "https://api.example.com/widgets/7/");
///
/// assert_eq!(resource.kind, "widgets");
/// assert_eq!(resource.id.as_deref(), Some("7"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// The resource category identifier, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The resource identifier. Absent for not-yet-created resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Attribute fields, keyed by field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    /// Relationship objects, keyed by relationship name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<HashMap<String, Relationship>>,
    /// Navigational links (e.g. `self`), keyed by link name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, String>>,
}

impl Resource {
    /// Creates a new resource of the given kind with no identity and no
    /// containers.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Sets the resource identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds an attribute field, creating the container if needed.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Adds a relationship object, creating the container if needed.
    #[must_use]
    pub fn with_relationship(
        mut self,
        name: impl Into<String>,
        relationship: Relationship,
    ) -> Self {
        self.relationships
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), relationship);
        self
    }

    /// Adds a navigational link, creating the container if needed.
    #[must_use]
    pub fn with_link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.links
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), url.into());
        self
    }
}

impl Linked for Resource {
    fn links(&self) -> Option<&HashMap<String, String>> {
        self.links.as_ref()
    }

    fn describe(&self) -> String {
        self.id.as_ref().map_or_else(
            || format!("resource '{}'", self.kind),
            |id| format!("resource '{}' (id {id})", self.kind),
        )
    }
}

/// A JSON:API relationship object.
///
/// Relationship objects are resource-shaped values describing a named
/// relation, carrying their own links (typically `related`) used to
/// navigate to the linked resources.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Resource linkage data, if included by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Navigational links (e.g. `related`), keyed by link name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, String>>,
}

impl Relationship {
    /// Creates an empty relationship object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resource linkage data.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Adds a navigational link, creating the container if needed.
    #[must_use]
    pub fn with_link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.links
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), url.into());
        self
    }
}

impl Linked for Relationship {
    fn links(&self) -> Option<&HashMap<String, String>> {
        self.links.as_ref()
    }

    fn describe(&self) -> String {
        "relationship object".to_string()
    }
}

// Verify the model types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource>();
    assert_send_sync::<Relationship>();
};
