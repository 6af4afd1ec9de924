//! Error types for resource field access.

use thiserror::Error;

/// Error returned when a requested attribute, link, or relationship is
/// not defined on a resource and no default applies.
///
/// The variant carries the field category; the payload carries the field
/// name and a description of the resource (type and id when known) for
/// diagnostics.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{get_attribute, MissingFieldError, Resource};
///
/// let resource = Resource::new("widgets").with_id("7");
/// let result = get_attribute(&resource, "name", None);
///
/// assert!(matches!(result, Err(MissingFieldError::Attribute { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MissingFieldError {
    /// The named attribute is not defined on the resource.
    #[error("Attribute field '{name}' is not defined on {on}.")]
    Attribute {
        /// The attribute name that was requested.
        name: String,
        /// Description of the resource the lookup was made on.
        on: String,
    },

    /// The named link is not defined on the resource or relationship.
    #[error("Link '{name}' is not defined on {on}.")]
    Link {
        /// The link name that was requested.
        name: String,
        /// Description of the value the lookup was made on.
        on: String,
    },

    /// The named relationship is not defined on the resource.
    #[error("Relationship field '{name}' is not defined on {on}.")]
    Relationship {
        /// The relationship name that was requested.
        name: String,
        /// Description of the resource the lookup was made on.
        on: String,
    },
}

impl MissingFieldError {
    /// Returns the name of the missing field.
    #[must_use]
    pub fn field_name(&self) -> &str {
        match self {
            Self::Attribute { name, .. }
            | Self::Link { name, .. }
            | Self::Relationship { name, .. } => name,
        }
    }

    /// Returns the field category as a string.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Attribute { .. } => "attribute",
            Self::Link { .. } => "link",
            Self::Relationship { .. } => "relationship",
        }
    }
}
