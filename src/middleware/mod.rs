// ABOUTME: HTTP middleware for cross-cutting request concerns
// ABOUTME: Currently provides CORS configuration for browser and mobile clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! HTTP middleware for cross-cutting request concerns

/// CORS configuration for browser and mobile clients
pub mod cors;

pub use cors::setup_cors;
