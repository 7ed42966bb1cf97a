// ABOUTME: Main server binary serving the Fitlog REST API over HTTP
// ABOUTME: Loads environment configuration, opens the database, and runs the axum server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! # Fitlog API Server Binary
//!
//! Starts the fitness tracking REST API with user authentication, tracking
//! logs, and the BMI analysis engine.

use anyhow::Result;
use clap::Parser;
use fitlog_server::{
    auth::AuthManager, config::ServerConfig, database::Database, logging::LoggingConfig,
    server::HttpServer, server::ServerResources,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitlog-server")]
#[command(about = "Fitlog API - fitness and diet tracking with BMI analysis")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    LoggingConfig::from_env(config.log_level.clone()).init()?;

    info!("Starting Fitlog API");
    info!("{}", config.summary());

    // Open the database and run migrations
    let database = Database::new(&config.database.to_connection_string()).await?;
    info!("Database initialized: {}", config.database);

    // Initialize authentication manager
    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes().to_vec(),
        config.auth.token_expiry_hours,
    );
    info!("Authentication manager initialized");

    // Create server resources and server
    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        Arc::new(config.clone()),
    ));
    let server = HttpServer::new(resources);

    info!("Server starting on port {}", config.http_port);
    display_available_endpoints(&config);
    info!("Ready to serve!");

    if let Err(e) = server.serve().await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints with their port
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    display_account_endpoints(&host, config.http_port);
    display_tracking_endpoints(&host, config.http_port);
    display_bmi_endpoints(&host, config.http_port);
    info!("Health Check:       GET  http://{host}:{}/health", config.http_port);
    info!("=== End of Endpoint List ===");
}

#[allow(clippy::cognitive_complexity)]
fn display_account_endpoints(host: &str, port: u16) {
    info!("Accounts:");
    info!("   User Registration: POST http://{host}:{port}/api/users/register");
    info!("   User Login:        POST http://{host}:{port}/api/users/login");
    info!("   Profile:           GET  http://{host}:{port}/api/users/profile");
    info!("   Update Profile:    POST http://{host}:{port}/api/users/profile");
    info!("   Update Goals:      PUT  http://{host}:{port}/api/users/goals");
}

#[allow(clippy::cognitive_complexity)]
fn display_tracking_endpoints(host: &str, port: u16) {
    info!("Tracking:");
    info!("   Log Activity:      POST http://{host}:{port}/api/users/activities");
    info!("   List Activities:   GET  http://{host}:{port}/api/users/activities");
    info!("   Log Diet Entry:    POST http://{host}:{port}/api/users/diet");
    info!("   List Diet Entries: GET  http://{host}:{port}/api/users/diet");
    info!("   Record Progress:   POST http://{host}:{port}/api/users/progress");
    info!("   List Progress:     GET  http://{host}:{port}/api/users/progress");
}

#[allow(clippy::cognitive_complexity)]
fn display_bmi_endpoints(host: &str, port: u16) {
    info!("BMI Analysis:");
    info!("   Full Analysis:     POST http://{host}:{port}/api/users/bmi-analysis");
    info!("   Analysis History:  GET  http://{host}:{port}/api/users/bmi-history");
    info!("   Quick Calculate:   POST http://{host}:{port}/api/users/calculate-bmi");
}
