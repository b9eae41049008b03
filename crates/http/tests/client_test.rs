//! Native integration tests for the API client wrapper

#![cfg(not(target_arch = "wasm32"))]

use std::sync::{Arc, Mutex};

use metroline_http::types::LoginRequest;
use metroline_http::{ApiClient, ClientError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_without_tokens(server: &MockServer) -> ApiClient {
    ApiClient::builder()
        .base_url(server.uri())
        .token_provider(Arc::new(|| None))
        .build()
        .unwrap()
}

fn client_with_token(server: &MockServer, token: &str) -> ApiClient {
    let token = token.to_string();
    ApiClient::builder()
        .base_url(server.uri())
        .token_provider(Arc::new(move || Some(token.clone())))
        .build()
        .unwrap()
}

async fn mount_envelope(server: &MockServer, result: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/stations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isSuccess": true,
            "statusCode": 200,
            "message": "",
            "result": result,
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn request_without_stored_token_has_no_authorization_header() {
    let server = MockServer::start().await;
    mount_envelope(&server, json!([])).await;

    let client = client_without_tokens(&server);
    let _: Vec<serde_json::Value> = client
        .execute_api(client.request(reqwest::Method::GET, "/api/stations"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn request_with_stored_token_carries_bearer_header() {
    let server = MockServer::start().await;
    mount_envelope(&server, json!([])).await;

    let client = client_with_token(&server, "tok-123");
    let _: Vec<serde_json::Value> = client
        .execute_api(client.request(reqwest::Method::GET, "/api/stations"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Bearer tok-123"
    );
}

#[tokio::test]
async fn token_is_resolved_fresh_on_every_request() {
    let server = MockServer::start().await;
    mount_envelope(&server, json!([])).await;

    let current: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(Some("first".into())));
    let provider = {
        let current = current.clone();
        Arc::new(move || current.lock().unwrap().clone())
    };
    let client = ApiClient::builder()
        .base_url(server.uri())
        .token_provider(provider)
        .build()
        .unwrap();

    let _: Vec<serde_json::Value> = client
        .execute_api(client.request(reqwest::Method::GET, "/api/stations"))
        .await
        .unwrap();

    // Rotate the token between requests; the wrapper must pick it up.
    *current.lock().unwrap() = Some("second".into());
    let _: Vec<serde_json::Value> = client
        .execute_api(client.request(reqwest::Method::GET, "/api/stations"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers.get("authorization").unwrap(), "Bearer first");
    assert_eq!(requests[1].headers.get("authorization").unwrap(), "Bearer second");
}

#[tokio::test]
async fn unauthorized_status_maps_to_authentication_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stations"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token rejected"))
        .mount(&server)
        .await;

    let client = client_with_token(&server, "stale");
    let result: Result<Vec<serde_json::Value>, _> = client
        .execute_api(client.request(reqwest::Method::GET, "/api/stations"))
        .await;

    match result {
        Err(err @ ClientError::AuthenticationFailed(_)) => assert!(err.is_auth_error()),
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_envelope_surfaces_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isSuccess": false,
            "statusCode": 401,
            "message": "invalid credentials",
        })))
        .mount(&server)
        .await;

    let client = client_without_tokens(&server);
    let err = client
        .login(LoginRequest {
            email: "ops@metroline.example".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    match err {
        ClientError::Api {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 401);
            assert_eq!(message, "invalid credentials");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn login_returns_token_pair() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isSuccess": true,
            "statusCode": 200,
            "message": "",
            "result": {"accessToken": "acc", "refreshToken": "ref"},
        })))
        .mount(&server)
        .await;

    let client = client_without_tokens(&server);
    let pair = client
        .login(LoginRequest {
            email: "ops@metroline.example".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(pair.access_token, "acc");
    assert_eq!(pair.refresh_token, "ref");
}
