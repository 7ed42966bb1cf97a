// ABOUTME: Main library entry point for the Fitlog fitness tracking API
// ABOUTME: REST endpoints for accounts, tracking logs, and BMI analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

#![deny(unsafe_code)]

//! # Fitlog Server
//!
//! A fitness and diet tracking REST API. Users register, log activities,
//! diet, and progress entries, and receive BMI classifications with health
//! recommendations. The BMI pipeline optionally delegates classification to
//! an external process and falls back to an in-process calculation on any
//! delegate failure.
//!
//! ## Features
//!
//! - **JWT authentication**: bearer tokens with bcrypt password storage
//! - **Tracking logs**: append-and-list activities, diet, and progress
//! - **BMI analysis engine**: band classification, recommendation catalog,
//!   and a strict-fallback external classifier delegate
//! - **SQLite persistence**: embedded database, no external services
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers organized by domain
//! - **BMI**: calculator, classifier, catalog, delegate, and orchestrator
//! - **Database**: `SQLite` storage for users and tracking entries
//! - **Config**: environment-driven configuration with validation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitlog_server::config::ServerConfig;
//! use fitlog_server::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Fitlog server configured with port: HTTP={}",
//!              config.http_port);
//!
//!     Ok(())
//! }
//! ```

/// Authentication and session management
pub mod auth;

/// BMI analysis engine: calculator, classifier, catalog, and delegate
pub mod bmi;

/// Configuration management from environment variables
pub mod config;

/// `SQLite` persistence for users and tracking entries
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for cross-cutting request concerns
pub mod middleware;

/// Common data models for users, tracking entries, and BMI analyses
pub mod models;

/// HTTP routes for accounts, tracking, and BMI analysis
pub mod routes;

/// HTTP server assembly and shared resource container
pub mod server;
