// ABOUTME: Configuration module for centralized server settings and parameters
// ABOUTME: Re-exports environment-driven configuration types used across the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! Configuration module for the Fitlog server
//!
//! Centralized configuration management:
//!
//! - **Environment**: Server configuration from environment variables
//! - **Database**: Typed SQLite database locations
//! - **Classifier**: External BMI classifier delegate settings

/// Environment and server configuration
pub mod environment;

pub use environment::{
    AuthConfig, ClassifierConfig, DatabaseUrl, LogLevel, ServerConfig, DEFAULT_DATABASE_URL,
    DEFAULT_HTTP_PORT, DEFAULT_JWT_EXPIRY_HOURS,
};
