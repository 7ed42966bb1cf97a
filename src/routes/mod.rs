// ABOUTME: Route module organization for the Fitlog HTTP API
// ABOUTME: Domain route modules plus the shared bearer-authentication helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! Route modules for the Fitlog server
//!
//! Routes are organized by domain. Each module exposes a unit struct with a
//! `routes(resources)` constructor returning an axum [`Router`](axum::Router)
//! wired to the shared [`ServerResources`](crate::server::ServerResources);
//! handlers are thin and delegate real work to the database and BMI layers.

use std::sync::Arc;

use http::HeaderMap;
use uuid::Uuid;

use crate::auth::extract_bearer_token;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::server::ServerResources;

/// Registration and login routes
pub mod auth;
/// BMI analysis, history, and stateless calculation routes
pub mod bmi;
/// Health check and service banner routes
pub mod health;
/// Activity, diet, and progress tracking routes
pub mod tracking;
/// Profile and goals routes
pub mod users;

pub use auth::AuthRoutes;
pub use bmi::BmiRoutes;
pub use health::HealthRoutes;
pub use tracking::TrackingRoutes;
pub use users::UserRoutes;

/// Authenticate a request from its `Authorization: Bearer` header
///
/// Returns the authenticated user's id. Shared by every protected route.
pub(crate) fn authenticate(
    headers: &HeaderMap,
    resources: &Arc<ServerResources>,
) -> AppResult<Uuid> {
    let token = extract_bearer_token(headers)?;
    let claims = resources.auth.validate_token(token)?;
    Uuid::parse_str(&claims.sub).map_err(|_| AppError::auth_invalid("Invalid token"))
}

/// Load a user or fail with the `User not found` wire error
pub(crate) async fn load_user(resources: &ServerResources, user_id: Uuid) -> AppResult<User> {
    resources
        .database
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))
}
