//! JSON:API resource values and safe field accessors.
//!
//! # Overview
//!
//! The main items in this module are:
//!
//! - [`Resource`]: a typed, identified entity with attributes,
//!   relationships, and links
//! - [`Relationship`]: a resource-shaped relationship object with its own
//!   links
//! - [`Linked`]: the trait shared by values carrying a links map
//! - [`has_attribute`] / [`get_attribute`], [`has_link`] / [`get_link`],
//!   [`has_relationship`] / [`get_relationship`]: presence tests and
//!   accessors with an explicit three-state default contract
//! - [`MissingFieldError`]: the error carried by failed accesses
//!
//! Accessors never fail on missing nested containers; an absent
//! `attributes` map behaves exactly like an empty one.

mod access;
mod errors;
mod resource;

pub use access::{
    get_attribute, get_link, get_relationship, has_attribute, has_link, has_relationship,
};
pub use errors::MissingFieldError;
pub use resource::{Linked, Relationship, Resource};
