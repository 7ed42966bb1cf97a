// ABOUTME: Health check and service banner route handlers
// ABOUTME: Reports process and database status for monitoring and client smoke tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! Health check and banner routes
//!
//! `/health` reports liveness plus database connectivity; `/` and `/api`
//! serve the discovery banners deployed clients and humans poke at.

use axum::{extract::State, response::Json, routing::get, Router};
use std::sync::Arc;

use crate::server::ServerResources;

/// Health and banner routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/", get(Self::handle_banner))
            .route("/api", get(Self::handle_api_index))
            .with_state(resources)
    }

    /// Liveness plus a live database connectivity probe
    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        let database = if resources.database.is_healthy().await {
            "Connected"
        } else {
            "Disconnected"
        };

        Json(serde_json::json!({
            "status": "OK",
            "message": "Fitlog API is running",
            "database": database,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }

    /// Service banner with an endpoint map
    #[allow(clippy::unused_async)]
    async fn handle_banner() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "success",
            "message": "Fitlog API is running",
            "endpoints": {
                "users": "/api/users",
                "health": "/health",
                "bmi": {
                    "analysis": "/api/users/bmi-analysis",
                    "history": "/api/users/bmi-history",
                    "calculate": "/api/users/calculate-bmi",
                },
            },
        }))
    }

    /// API base index
    #[allow(clippy::unused_async)]
    async fn handle_api_index() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "success",
            "message": "API base endpoint. See /api/users or /health for available endpoints.",
        }))
    }
}
