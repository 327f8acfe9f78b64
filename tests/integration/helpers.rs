//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::header::{CONTENT_TYPE, COOKIE, HeaderMap, SET_COOKIE};
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use shelfdesk_api::{AppState, build_app};
use shelfdesk_core::config::AppConfig;
use shelfdesk_database::{MemoryStore, Stores};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for direct inspection
    pub store: MemoryStore,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let store = MemoryStore::new();
        let state = AppState::new(config.clone(), Stores::from_memory(store.clone()))
            .expect("Failed to build app state");

        Self {
            router: build_app(state),
            store,
            config,
        }
    }

    /// Login with the configured admin credentials and return the session token
    pub async fn login(&self) -> String {
        let body = json!({
            "username": self.config.auth.admin_username,
            "password": self.config.auth.admin_password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .cookie(&self.config.auth.cookie_name)
            .expect("No session cookie in login response")
    }

    /// Make an HTTP request, presenting `token` as the session cookie
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            req = req.header(COOKIE, format!("{}={}", self.config.auth.cookie_name, token));
        }

        let body = match body {
            Some(b) => {
                req = req.header(CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_string(&b).expect("Failed to serialize body"))
            }
            None => Body::empty(),
        };

        self.send(req.body(body).expect("Failed to build request"))
            .await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a product through the API and return its JSON
    pub async fn create_product(&self, token: &str, body: Value) -> Value {
        let response = self
            .request("POST", "/api/products", Some(body), Some(token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create product failed: {:?}",
            response.body
        );
        response.body
    }

    /// Create a category through the API and return its JSON
    pub async fn create_category(&self, token: &str, name: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/categories",
                Some(json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create category failed: {:?}",
            response.body
        );
        response.body
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// All `Set-Cookie` header values
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(String::from)
            .collect()
    }

    /// Value of the named cookie set by this response
    pub fn cookie(&self, name: &str) -> Option<String> {
        let prefix = format!("{name}=");
        self.set_cookies().into_iter().find_map(|c| {
            c.split(';')
                .next()
                .and_then(|pair| pair.trim().strip_prefix(&prefix))
                .map(String::from)
        })
    }

    /// The `id` field of the body as a string
    pub fn id(&self) -> String {
        self.body["id"].as_str().expect("id").to_string()
    }
}
