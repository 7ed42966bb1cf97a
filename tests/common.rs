// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, auth, and server resource helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fitlog_server`
//!
//! Common setup functions to reduce duplication across integration tests.

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::Router;
use fitlog_server::{
    auth::AuthManager,
    config::{
        AuthConfig, ClassifierConfig, DatabaseUrl, LogLevel, ServerConfig, DEFAULT_HTTP_PORT,
    },
    database::Database,
    server::{HttpServer, ServerResources},
};
use http::{header::AUTHORIZATION, header::CONTENT_TYPE, Request, StatusCode};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};
use tower::ServiceExt;

/// JWT secret shared by all test resources
pub const TEST_JWT_SECRET: &[u8] = b"integration-test-jwt-secret";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default WARN keeps test output quiet
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    Ok(database)
}

/// Create test authentication manager
pub fn create_test_auth_manager() -> AuthManager {
    AuthManager::new(TEST_JWT_SECRET.to_vec(), 24)
}

/// Test configuration with the external classifier disabled
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: DEFAULT_HTTP_PORT,
        log_level: LogLevel::Info,
        database: DatabaseUrl::Memory,
        auth: AuthConfig {
            jwt_secret: String::from_utf8_lossy(TEST_JWT_SECRET).into_owned(),
            token_expiry_hours: 24,
        },
        cors_allowed_origins: vec!["*".to_owned()],
        classifier: ClassifierConfig {
            enabled: false,
            command: "python3".to_owned(),
            script_path: PathBuf::from("./bmi_classifier.py"),
            timeout_secs: 5,
        },
    }
}

/// Test configuration with the external classifier pointed at a script
pub fn test_config_with_classifier(command: &str, script_path: &Path) -> ServerConfig {
    let mut config = test_config();
    config.classifier = ClassifierConfig {
        enabled: true,
        command: command.to_owned(),
        script_path: script_path.to_path_buf(),
        timeout_secs: 5,
    };
    config
}

/// Full server resources over an in-memory database, classifier disabled
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    create_test_resources_with_config(test_config()).await
}

/// Full server resources over an in-memory database with a custom config
pub async fn create_test_resources_with_config(
    config: ServerConfig,
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    let auth_manager = create_test_auth_manager();
    Ok(Arc::new(ServerResources::new(
        database,
        auth_manager,
        Arc::new(config),
    )))
}

/// Build the full application router for `oneshot` testing
pub async fn create_test_app() -> Result<Router> {
    let resources = create_test_resources().await?;
    Ok(HttpServer::new(resources).router())
}

/// Construct a JSON request
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Construct a JSON request with a bearer token
pub fn authed_json_request(
    method: &str,
    uri: &str,
    token: &str,
    body: &serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Construct a body-less request with a bearer token
pub fn authed_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON
pub async fn response_json(response: axum::response::Response) -> Result<serde_json::Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Register a user through the API and return their bearer token
pub async fn register_user(app: &Router, email: &str) -> Result<String> {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users/register",
            &serde_json::json!({
                "email": email,
                "password": "password123",
                "name": "Test User"
            }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await?;
    Ok(body["token"]
        .as_str()
        .expect("registration response carries a token")
        .to_owned())
}
