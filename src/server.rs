// ABOUTME: HTTP server assembly wiring routes, middleware, and shared resources
// ABOUTME: Holds the ServerResources dependency container and the axum serve loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! # HTTP Server
//!
//! Server assembly: [`ServerResources`] is the dependency container shared by
//! every route handler, and [`HttpServer`] composes the per-domain routers
//! into one application with CORS and request tracing applied.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::AuthManager;
use crate::bmi::{BmiAnalyzer, ProcessClassifier};
use crate::config::ServerConfig;
use crate::database::Database;
use crate::middleware::setup_cors;
use crate::routes::{AuthRoutes, BmiRoutes, HealthRoutes, TrackingRoutes, UserRoutes};

/// Centralized resource container for dependency injection
///
/// Holds the shared server resources behind `Arc` so route handlers never
/// recreate expensive objects per request.
#[derive(Clone)]
pub struct ServerResources {
    /// Database handle shared by all routes
    pub database: Arc<Database>,
    /// JWT signing and validation
    pub auth: Arc<AuthManager>,
    /// BMI analysis orchestrator, configured with or without the external delegate
    pub analyzer: Arc<BmiAnalyzer>,
    /// Full server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper `Arc` sharing
    ///
    /// The BMI analyzer is assembled here: when the external classifier is
    /// enabled in configuration, a process-based strategy with the configured
    /// command, script, and timeout is attached; otherwise the analyzer only
    /// ever uses the in-process standard calculation.
    #[must_use]
    pub fn new(database: Database, auth: AuthManager, config: Arc<ServerConfig>) -> Self {
        let analyzer = if config.classifier.enabled {
            let strategy = ProcessClassifier::new(
                config.classifier.command.clone(),
                config.classifier.script_path.clone(),
            )
            .with_timeout(config.classifier.timeout());
            tracing::info!(
                "External BMI classifier enabled: {} {}",
                config.classifier.command,
                config.classifier.script_path.display()
            );
            BmiAnalyzer::with_strategy(Arc::new(strategy))
        } else {
            tracing::info!("External BMI classifier disabled, using standard calculation only");
            BmiAnalyzer::standard_only()
        };

        Self {
            database: Arc::new(database),
            auth: Arc::new(auth),
            analyzer: Arc::new(analyzer),
            config,
        }
    }
}

/// The assembled HTTP server
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server from already-assembled resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    ///
    /// Also used by integration tests to drive the app without binding a
    /// socket.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes(self.resources.clone()))
            .merge(AuthRoutes::routes(self.resources.clone()))
            .merge(UserRoutes::routes(self.resources.clone()))
            .merge(TrackingRoutes::routes(self.resources.clone()))
            .merge(BmiRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(setup_cors(&self.resources.config))
    }

    /// Bind the configured port and serve requests until the process exits
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind the configured port
    /// or the accept loop fails
    pub async fn serve(&self) -> Result<()> {
        let port = self.resources.config.http_port;
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
            .await
            .with_context(|| format!("Failed to bind HTTP port {port}"))?;

        tracing::info!("HTTP server listening on port {port}");
        axum::serve(listener, app)
            .await
            .context("HTTP server terminated unexpectedly")?;

        Ok(())
    }
}
