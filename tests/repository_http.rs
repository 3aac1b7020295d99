//! Repository behaviour over real HTTP against the mock backend.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use std::sync::Arc;
use std::time::Duration;
use subpanel::api::{Outcome, ReqwestTransport, TimeoutConfig};
use subpanel::repository::Repository;
use subpanel::session::Session;

fn repository_for(backend: &MockBackend, session: Session) -> Repository {
    let transport = ReqwestTransport::new(TimeoutConfig::default()).unwrap();
    Repository::new(Arc::new(transport), backend.base_url(), session)
}

#[tokio::test]
async fn test_login_persists_credential_and_sends_it_verbatim() {
    let backend = MockBackend::start().await;
    let session = Session::in_memory();
    let repository = repository_for(&backend, session.clone());

    backend
        .enqueue_response(MockResponse::json(
            r#"{"data":{"token":"tok-1","auth_data":"Bearer abc"}}"#,
        ))
        .await;
    backend
        .enqueue_response(MockResponse::json(r#"{"data":{"email":"a@b.com","balance":250}}"#))
        .await;

    let login = repository.login("a@b.com", "x").await;
    assert!(login.is_success());
    assert!(session.is_logged_in());
    assert_eq!(session.auth_data().expose(), "Bearer abc");
    assert_eq!(session.token().expose(), "tok-1");
    assert_eq!(repository.user_email(), "a@b.com");

    let info = repository.get_user_info().await.success().unwrap();
    assert_eq!(info.balance, 250);

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 2);

    let login_req = &requests[0];
    assert_eq!(login_req.method, "POST");
    assert_eq!(login_req.path, "/api/v1/passport/auth/login");
    assert_eq!(login_req.header("content-type"), Some("application/json"));
    assert_eq!(login_req.header("accept"), Some("application/json"));
    assert_eq!(login_req.header("authorization"), None);
    assert_eq!(
        login_req.json(),
        serde_json::json!({"email": "a@b.com", "password": "x"})
    );

    let info_req = &requests[1];
    assert_eq!(info_req.method, "GET");
    assert_eq!(info_req.path, "/api/v1/user/getUserInfo");
    assert_eq!(info_req.header("authorization"), Some("Bearer abc"));
}

#[tokio::test]
async fn test_login_falls_back_to_token_field() {
    let backend = MockBackend::start().await;
    let session = Session::in_memory();
    let repository = repository_for(&backend, session.clone());

    backend
        .enqueue_response(MockResponse::json(r#"{"data":{"token":"only-token"}}"#))
        .await;

    assert!(repository.login("a@b.com", "x").await.is_success());
    assert_eq!(session.auth_data().expose(), "only-token");
}

#[tokio::test]
async fn test_validation_failure_is_classified_and_repeatable() {
    let backend = MockBackend::start().await;
    let session = Session::in_memory();
    let repository = repository_for(&backend, session.clone());

    let body = r#"{"message":"failed","errors":{"email":["already taken"]}}"#;
    backend.enqueue_response(MockResponse::status(422, body)).await;
    backend.enqueue_response(MockResponse::status(422, body)).await;

    let first = repository.login("a@b.com", "x").await;
    let second = repository.login("a@b.com", "x").await;

    match &first {
        Outcome::ValidationError {
            message,
            field_errors,
        } => {
            assert_eq!(message, "failed");
            assert_eq!(field_errors["email"], vec!["already taken".to_string()]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(first, second);
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_malformed_plan_list_is_empty() {
    let backend = MockBackend::start().await;
    let repository = repository_for(&backend, Session::in_memory());

    backend
        .enqueue_response(MockResponse::json(r#"{"data":{"not":"a list"}}"#))
        .await;

    assert_eq!(repository.get_plans().await, Outcome::Success(vec![]));
}

#[tokio::test]
async fn test_malformed_record_is_server_error() {
    let backend = MockBackend::start().await;
    let repository = repository_for(&backend, Session::in_memory());

    backend
        .enqueue_response(MockResponse::json(r#"{"data":["not","a","record"]}"#))
        .await;

    match repository.get_user_info().await {
        Outcome::ServerError(message) => {
            assert!(message.starts_with("Failed to decode user info"), "{}", message)
        }
        other => panic!("expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_subscribe_url_is_cached() {
    let backend = MockBackend::start().await;
    let repository = repository_for(&backend, Session::in_memory());

    backend
        .enqueue_response(MockResponse::json(
            r#"{"data":{"subscribe_url":"https://sub.example/s/1","u":1,"d":2,"transfer_enable":10}}"#,
        ))
        .await;

    let data = repository.get_subscribe().await.success().unwrap();
    assert_eq!(data.u + data.d, 3);
    assert_eq!(repository.stored_subscribe_url(), "https://sub.example/s/1");
}

#[tokio::test]
async fn test_order_then_checkout_bodies() {
    let backend = MockBackend::start().await;
    let repository = repository_for(&backend, Session::in_memory());

    backend
        .enqueue_response(MockResponse::json(r#"{"data":"2024010112345"}"#))
        .await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"type":1,"data":"https://pay.example/x"}"#,
        ))
        .await;

    let trade_no = repository
        .create_order(3, "month_price", None)
        .await
        .success()
        .unwrap();
    assert_eq!(trade_no, "2024010112345");

    let result = repository.checkout_order(&trade_no, 2).await.success().unwrap();
    assert_eq!(result.payment_url(), Some("https://pay.example/x"));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/api/v1/user/order/save");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({"plan_id": 3, "period": "month_price"})
    );
    assert_eq!(requests[1].path, "/api/v1/user/order/checkout");
    assert_eq!(
        requests[1].json(),
        serde_json::json!({"trade_no": "2024010112345", "method": 2})
    );
}

#[tokio::test]
async fn test_logout_stops_sending_credentials() {
    let backend = MockBackend::start().await;
    let session = Session::in_memory();
    session.store_credentials("Bearer abc", "tok", "a@b.com").unwrap();
    session.set_language("ja");
    let repository = repository_for(&backend, session.clone());

    repository.logout();
    assert!(!repository.is_logged_in());
    assert_eq!(repository.user_email(), "");
    assert_eq!(session.language(), "ja");

    repository.get_servers().await;
    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].header("authorization"), None);
}

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let backend = MockBackend::start().await;
    let repository = repository_for(&backend, Session::in_memory());

    backend
        .enqueue_response(MockResponse::status(403, r#"{"message":"Session expired"}"#))
        .await;

    assert_eq!(
        repository.get_user_info().await,
        Outcome::AuthError("Session expired".to_string())
    );
}

#[tokio::test]
async fn test_slow_backend_is_network_error() {
    let backend = MockBackend::start().await;
    let timeouts = TimeoutConfig {
        connect: Duration::from_millis(200),
        read: Duration::from_millis(100),
        write: Duration::from_millis(100),
    };
    let transport = ReqwestTransport::new(timeouts).unwrap();
    let repository = Repository::new(Arc::new(transport), backend.base_url(), Session::in_memory());

    backend
        .enqueue_response(MockResponse::json(r#"{"data":[]}"#).with_delay(2_000))
        .await;

    let outcome = repository.get_plans().await;
    assert!(
        matches!(outcome, Outcome::NetworkError(_)),
        "expected network error, got {:?}",
        outcome
    );
}

#[tokio::test]
async fn test_stalled_read_is_network_error_within_total_budget() {
    let backend = MockBackend::start().await;
    let timeouts = TimeoutConfig {
        connect: Duration::from_secs(1),
        read: Duration::from_millis(200),
        write: Duration::from_secs(5),
    };
    let transport = ReqwestTransport::new(timeouts).unwrap();
    let repository = Repository::new(Arc::new(transport), backend.base_url(), Session::in_memory());

    backend
        .enqueue_response(MockResponse::json(r#"{"data":[]}"#).with_delay(1_500))
        .await;

    let started = std::time::Instant::now();
    let outcome = repository.get_plans().await;
    assert!(
        matches!(outcome, Outcome::NetworkError(_)),
        "expected network error, got {:?}",
        outcome
    );
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let transport = ReqwestTransport::new(TimeoutConfig::default()).unwrap();
    let repository = Repository::new(
        Arc::new(transport),
        "http://127.0.0.1:1/api/v1",
        Session::in_memory(),
    );

    let outcome = repository.get_config().await;
    assert!(matches!(outcome, Outcome::NetworkError(_)), "{:?}", outcome);
}
