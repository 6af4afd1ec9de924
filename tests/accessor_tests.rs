//! Integration tests for the resource accessor functions.
//!
//! These tests verify the three-state access contract: stored value,
//! explicitly supplied default, or a categorized missing-field error.

use jsonapi_client::{
    get_attribute, get_link, get_relationship, has_attribute, has_link, has_relationship,
    MissingFieldError, Relationship, Resource,
};
use serde_json::{json, Value};

/// Creates a resource with a populated attributes container.
fn resource_with_attributes() -> Resource {
    Resource::new("test-resource")
        .with_id("0")
        .with_attribute("foo", json!("bar"))
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_get_attribute_returns_field_from_attributes() {
    let resource = resource_with_attributes();

    let value = get_attribute(&resource, "foo", None).unwrap();
    assert_eq!(value, &json!("bar"));
}

#[test]
fn test_get_attribute_returns_default_when_field_not_defined() {
    // An object default keeps a strong reference we can compare by identity.
    let default = json!({});
    let resource = resource_with_attributes();

    let value = get_attribute(&resource, "buz", Some(&default)).unwrap();
    assert!(std::ptr::eq(value, &default));
}

#[test]
fn test_get_attribute_returns_default_when_attributes_not_defined() {
    let default = json!({});
    let resource = Resource::new("test-resource").with_id("0");

    let value = get_attribute(&resource, "foo", Some(&default)).unwrap();
    assert!(std::ptr::eq(value, &default));
}

#[test]
fn test_get_attribute_fails_on_undefined_field() {
    let resource = resource_with_attributes();

    let error = get_attribute(&resource, "buz", None).unwrap_err();
    assert!(matches!(error, MissingFieldError::Attribute { .. }));
    assert_eq!(error.field_name(), "buz");
}

#[test]
fn test_get_attribute_fails_when_attributes_not_defined() {
    let resource = Resource::new("test-resource").with_id("0");

    assert!(get_attribute(&resource, "buz", None).is_err());
}

#[test]
fn test_attribute_presence_ignores_value_truthiness() {
    let resource = Resource::new("test-resource")
        .with_attribute("count", json!(0))
        .with_attribute("label", json!(""))
        .with_attribute("flag", json!(false));

    assert!(has_attribute(&resource, "count"));
    assert!(has_attribute(&resource, "label"));
    assert!(has_attribute(&resource, "flag"));

    // Stored falsy values win over a supplied default.
    let default = json!("fallback");
    assert_eq!(
        get_attribute(&resource, "count", Some(&default)).unwrap(),
        &json!(0)
    );
    assert_eq!(
        get_attribute(&resource, "label", Some(&default)).unwrap(),
        &json!("")
    );
}

#[test]
fn test_falsy_defaults_count_as_supplied() {
    let resource = Resource::new("test-resource");

    assert_eq!(
        get_attribute(&resource, "missing", Some(&Value::Null)).unwrap(),
        &Value::Null
    );
    assert_eq!(
        get_attribute(&resource, "missing", Some(&json!(false))).unwrap(),
        &json!(false)
    );
    assert_eq!(
        get_attribute(&resource, "missing", Some(&json!(""))).unwrap(),
        &json!("")
    );
}

// ============================================================================
// Links
// ============================================================================

#[test]
fn test_get_link_returns_member_from_links() {
    let resource = Resource::new("test-resource").with_id("0").with_link("zip", "zap");

    assert_eq!(get_link(&resource, "zip", None).unwrap(), "zap");
}

#[test]
fn test_get_link_returns_default_when_member_not_defined() {
    let resource = Resource::new("test-resource").with_id("0").with_link("zip", "zap");

    assert_eq!(get_link(&resource, "foo", Some("/d/")).unwrap(), "/d/");
}

#[test]
fn test_get_link_returns_default_when_links_not_defined() {
    let resource = Resource::new("test-resource").with_id("0");

    assert_eq!(get_link(&resource, "foo", Some("/d/")).unwrap(), "/d/");
}

#[test]
fn test_get_link_fails_when_member_not_defined() {
    let resource = Resource::new("test-resource").with_id("0");

    let error = get_link(&resource, "foo", None).unwrap_err();
    assert!(matches!(error, MissingFieldError::Link { .. }));
    assert_eq!(error.field_name(), "foo");
}

#[test]
fn test_get_link_works_on_relationship_objects() {
    let relationship = Relationship::new().with_link("related", "http://example.com/foo/test");

    assert!(has_link(&relationship, "related"));
    assert_eq!(
        get_link(&relationship, "related", None).unwrap(),
        "http://example.com/foo/test"
    );
}

// ============================================================================
// Relationships
// ============================================================================

#[test]
fn test_get_relationship_returns_field_from_relationships() {
    let relationship = Relationship::new().with_link("related", "/people/1/");
    let resource = Resource::new("test-resource")
        .with_id("0")
        .with_relationship("owner", relationship.clone());

    assert!(has_relationship(&resource, "owner"));
    assert_eq!(get_relationship(&resource, "owner").unwrap(), &relationship);
}

#[test]
fn test_get_relationship_fails_when_not_defined() {
    let resource = Resource::new("test-resource").with_id("0");

    let error = get_relationship(&resource, "owner").unwrap_err();
    assert!(matches!(error, MissingFieldError::Relationship { .. }));
    assert_eq!(error.field_name(), "owner");
    assert!(error.to_string().contains("owner"));
    assert!(error.to_string().contains("test-resource"));
}

#[test]
fn test_error_messages_carry_resource_context() {
    let resource = Resource::new("widgets").with_id("7");

    let error = get_attribute(&resource, "name", None).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("widgets"));
    assert!(message.contains("7"));
}
