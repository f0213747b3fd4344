//! Integration tests for the connector HTTP client, against a mock
//! backend.

use connector_client::client::ConnectorClient;
use connector_client::error::ClientError;
use connector_core::RequestContext;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ConnectorClient {
    ConnectorClient::new(RequestContext::new(server.uri()))
}

#[tokio::test]
async fn health_reports_backend_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let health = client_for(&server).health().await.expect("health");
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn authorization_header_attached_after_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "u-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("secret-token").expect("login");

    let _: serde_json::Value = client.get_json("/profile").await.expect("authed GET");
}

#[tokio::test]
async fn latest_credential_wins_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("Authorization", "Bearer second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "u-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login("first").expect("login");
    client.login("second").expect("login");

    let _: serde_json::Value = client.get_json("/profile").await.expect("authed GET");
}

#[tokio::test]
async fn post_json_sends_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/connections"))
        .and(body_json(json!({ "name": "events" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "created": true })))
        .expect(1)
        .mount(&server)
        .await;

    let response: serde_json::Value = client_for(&server)
        .post_json("/connections", &json!({ "name": "events" }))
        .await
        .expect("POST");
    assert_eq!(response["created"], json!(true));
}

#[tokio::test]
async fn unauthenticated_request_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result: Result<serde_json::Value, _> = client_for(&server).get_json("/profile").await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));
}

#[tokio::test]
async fn unknown_path_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result: Result<serde_json::Value, _> = client_for(&server).get_json("/missing").await;
    match result {
        Err(ClientError::NotFound { path }) => assert_eq!(path, "/missing"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn server_failure_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
        .mount(&server)
        .await;

    let result = client_for(&server).health().await;
    match result {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 503);
            assert!(message.contains("maintenance window"));
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}
