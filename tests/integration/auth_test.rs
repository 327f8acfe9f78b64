//! Integration tests for the session gate and auth endpoints.

mod helpers;

use axum::body::Body;
use http::header::AUTHORIZATION;
use http::{Request, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "admin", "password": "admin123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Login successful");

    let cookie = response
        .set_cookies()
        .into_iter()
        .find(|c| c.starts_with("admin_session="))
        .expect("session cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_cookie_lifetime_matches_capped_session() {
    let mut config = shelfdesk_core::config::AppConfig::default();
    config.auth.session_max_age_seconds = u64::MAX;
    let app = helpers::TestApp::with_config(config);

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "admin", "password": "admin123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let cookie = response
        .set_cookies()
        .into_iter()
        .find(|c| c.starts_with("admin_session="))
        .expect("session cookie");
    let ten_years = 10 * 365 * 24 * 60 * 60;
    assert!(cookie.contains(&format!("Max-Age={ten_years}")), "{cookie}");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "admin", "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid username or password");
    assert!(response.cookie("admin_session").is_none());
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/auth/login", Some(json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_protected_route_without_session() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/products", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Unauthorized");
}

#[tokio::test]
async fn test_protected_route_with_forged_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/products", None, Some("not-a-real-session"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mutation_rejected_before_store_write() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "name": "Desk", "price": 10, "stock": 1 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let token = app.login().await;
    let list = app.request("GET", "/api/products", None, Some(&token)).await;
    assert_eq!(list.body["total"], 0);
}

#[tokio::test]
async fn test_bearer_token_accepted() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let req = Request::get("/api/products")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_status_reflects_session() {
    let app = helpers::TestApp::new();

    let anonymous = app.request("GET", "/api/auth/status", None, None).await;
    assert_eq!(anonymous.body["authenticated"], false);

    let token = app.login().await;
    let signed_in = app
        .request("GET", "/api/auth/status", None, Some(&token))
        .await;
    assert_eq!(signed_in.body["authenticated"], true);
}

#[tokio::test]
async fn test_logout_revokes_and_clears_cookie() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.cookie("admin_session").as_deref(), Some(""));

    let after = app.request("GET", "/api/products", None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["backend"], "memory");
    assert_eq!(response.body["database"], "connected");
    assert!(response.body["version"].is_string());
}
