//! Request and response handling against a mock backend.

use hirebase_api_client::{ApiError, Client, RequestOptions};
use hirebase_core::session::Session;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, token: Option<&str>) -> Client {
    let session = Session::in_memory();
    if let Some(token) = token {
        session.set_token(token).unwrap();
    }
    Client::with_http(reqwest::Client::new(), &server.uri(), session)
}

#[tokio::test]
async fn sends_bearer_token_from_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "ok": true } })))
        .expect(1)
        .mount(&server)
        .await;

    let value = client(&server, Some("tok-1"))
        .fetch_value("/api/auth/profile", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(value, Some(json!({ "data": { "ok": true } })));
}

#[tokio::test]
async fn token_changes_apply_to_the_next_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    let client = client(&server, None);
    client
        .fetch_value("/api/services", RequestOptions::get())
        .await
        .unwrap();
    client.session().set_token("fresh").unwrap();
    client
        .fetch_value("/api/services", RequestOptions::get())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(requests[1].headers.get("authorization").unwrap(), "Bearer fresh");
}

#[tokio::test]
async fn unauthenticated_request_omits_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "categories": [] } })))
        .mount(&server)
        .await;

    let categories = client(&server, Some("tok")).categories().await.unwrap();
    assert!(categories.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn json_body_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/subscriptions"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "type": "JOB_SEARCH" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let opts = RequestOptions::post()
        .json(&json!({ "type": "JOB_SEARCH" }))
        .unwrap();
    client(&server, Some("t"))
        .fetch_value("/api/subscriptions", opts)
        .await
        .unwrap();
}

#[tokio::test]
async fn error_message_comes_from_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Token expired" })),
        )
        .mount(&server)
        .await;

    let err = client(&server, Some("old"))
        .fetch_value("/api/auth/profile", RequestOptions::get())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.is_unauthorized());
    assert_eq!(err.display_message(), "Token expired");
    assert_eq!(err.payload(), Some(&json!({ "message": "Token expired" })));
}

#[tokio::test]
async fn error_without_message_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/jobs/j1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server, Some("t")).delete_job("j1").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.display_message(), "500 Internal Server Error");
    assert!(err.payload().is_none());
}

#[tokio::test]
async fn empty_or_non_json_success_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/services/a"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/services/b"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .mount(&server)
        .await;

    let client = client(&server, Some("t"));
    for id in ["a", "b"] {
        let value = client
            .fetch_value(&format!("/api/services/{id}"), RequestOptions::delete())
            .await
            .unwrap();
        assert_eq!(value, None);
    }
    client.delete_service("a").await.unwrap();
}

#[tokio::test]
async fn schema_mismatch_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "services": "nope" } })),
        )
        .mount(&server)
        .await;

    let err = client(&server, Some("t")).services().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { ref path, .. } if path == "/api/services"));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn query_parameters_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/usage/check-first-use"))
        .and(query_param("type", "DASHBOARD"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "firstUse": true } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server, Some("t")).check_first_use().await.unwrap());
}

#[tokio::test]
async fn network_failure_is_reported() {
    let session = Session::in_memory();
    let client = Client::with_http(reqwest::Client::new(), "http://127.0.0.1:9", session);
    let err = client
        .fetch_value("/api/services", RequestOptions::get())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn malformed_base_url_is_not_a_network_error() {
    let client = Client::with_http(reqwest::Client::new(), "not a url", Session::in_memory());
    let err = client
        .fetch_value("/api/services", RequestOptions::get())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));
    assert!(err.display_message().starts_with("Invalid request"));
}

#[tokio::test]
async fn upload_resume_posts_multipart_with_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/uploads/resume"))
        .and(header("authorization", "Bearer t"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "url": "https://cdn.example/cv.pdf" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = client(&server, Some("t"))
        .upload_resume("cv.pdf", b"%PDF-1.4".to_vec())
        .await
        .unwrap();
    assert_eq!(url.as_deref(), Some("https://cdn.example/cv.pdf"));

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"resume\""));
    assert!(body.contains("filename=\"cv.pdf\""));
}

#[tokio::test]
async fn upload_without_url_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/uploads/resume"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .mount(&server)
        .await;

    let url = client(&server, Some("t"))
        .upload_resume("cv.docx", vec![1, 2, 3])
        .await
        .unwrap();
    assert_eq!(url, None);
}
