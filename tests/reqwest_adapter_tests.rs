//! Integration tests for the bundled reqwest transport.
//!
//! These tests run the client end to end against a wiremock server and
//! verify the adapter delivers descriptors faithfully and returns every
//! HTTP status as a response rather than an error.

use jsonapi_client::{Client, Relationship, Resource, ReqwestAdapter, JSON_API_MEDIA_TYPE};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client backed by the reqwest adapter and rooted at the
/// mock server.
fn mock_client(server: &MockServer) -> Client<ReqwestAdapter> {
    Client::builder()
        .adapter(ReqwestAdapter::new().unwrap())
        .url_prefix(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fetch_resource_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"type": "widgets", "id": "7", "attributes": {"name": "sprocket"}}
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let resource = Resource::new("widgets").with_id("7");

    let response = client.fetch_resource(&resource, None).unwrap().await.unwrap();

    assert!(response.is_ok());
    assert_eq!(response.code, 200);
    assert_eq!(response.body["data"]["attributes"]["name"], json!("sprocket"));
}

#[tokio::test]
async fn test_jsonapi_headers_reach_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/"))
        .and(header("accept", JSON_API_MEDIA_TYPE))
        .and(header("content-type", JSON_API_MEDIA_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let response = client.find_resources("widgets", None).unwrap().await.unwrap();

    assert!(response.is_ok());
}

#[tokio::test]
async fn test_create_resource_sends_data_document() {
    let server = MockServer::start().await;

    let resource = Resource::new("widgets").with_attribute("name", json!("a"));
    let expected_body = json!({"data": {"type": "widgets", "attributes": {"name": "a"}}});

    Mock::given(method("POST"))
        .and(path("/widgets/"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"type": "widgets", "id": "1", "attributes": {"name": "a"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let response = client.create_resource(&resource, None).unwrap().await.unwrap();

    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_query_parameters_reach_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let mut query = std::collections::HashMap::new();
    query.insert("page".to_string(), "2".to_string());

    let response = client
        .find_resources("widgets", Some(&query))
        .unwrap()
        .await
        .unwrap();

    assert!(response.is_ok());
}

#[tokio::test]
async fn test_non_2xx_status_is_a_response_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/404/"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"errors": [{"title": "Not Found"}]})),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let resource = Resource::new("widgets").with_id("404");

    let response = client.fetch_resource(&resource, None).unwrap().await.unwrap();

    assert!(!response.is_ok());
    assert_eq!(response.code, 404);
    assert_eq!(response.body["errors"][0]["title"], json!("Not Found"));
}

#[tokio::test]
async fn test_related_link_is_followed_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"type": "people", "id": "1"}
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let resource = Resource::new("widgets").with_id("7").with_relationship(
        "owner",
        Relationship::new().with_link("related", format!("{}/people/1/", server.uri())),
    );

    let response = client
        .fetch_related_resource(&resource, "owner", None)
        .unwrap()
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(response.body["data"]["id"], json!("1"));
}

#[tokio::test]
async fn test_non_json_body_is_preserved_under_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let response = client.find_resources("widgets", None).unwrap().await.unwrap();

    assert_eq!(response.code, 502);
    assert_eq!(response.body["raw_body"], json!("Bad Gateway"));
}
