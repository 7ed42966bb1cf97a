// ABOUTME: User profile and goals route handlers
// ABOUTME: Exposes profile read/update and goal replacement for authenticated users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! Profile and goals routes
//!
//! All handlers require a valid bearer token and operate on the
//! authenticated user's own record. Updates return the full user document,
//! which is what deployed clients re-render from.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{Gender, Goals};
use crate::server::ServerResources;

/// Profile and goals routes implementation
pub struct UserRoutes;

/// Partial profile update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    /// Display name
    pub name: Option<String>,
    /// Age in years
    pub age: Option<u32>,
    /// Gender
    pub gender: Option<Gender>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
}

impl UserRoutes {
    /// Create all profile and goals routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users/profile", get(Self::handle_get_profile))
            .route("/api/users/profile", post(Self::handle_update_profile))
            .route("/api/users/goals", put(Self::handle_update_goals))
            .with_state(resources)
    }

    /// Return the authenticated user's full profile
    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;
        let user = super::load_user(&resources, user_id).await?;

        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Apply a partial profile update and return the updated user
    async fn handle_update_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(update): Json<ProfileUpdate>,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;
        let mut user = super::load_user(&resources, user_id).await?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(age) = update.age {
            user.age = Some(age);
        }
        if let Some(gender) = update.gender {
            user.gender = Some(gender);
        }
        if let Some(height) = update.height {
            user.height_cm = Some(height);
        }
        if let Some(weight) = update.weight {
            user.weight_kg = Some(weight);
        }
        user.update_last_active();

        resources.database.update_profile(&user).await?;
        tracing::info!("Profile updated for user {}", user.id);

        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Replace the authenticated user's goals and return the updated user
    async fn handle_update_goals(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(goals): Json<Goals>,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;
        let mut user = super::load_user(&resources, user_id).await?;

        resources.database.update_goals(user_id, &goals).await?;
        user.goals = Some(goals);
        tracing::info!("Goals updated for user {}", user.id);

        Ok((StatusCode::OK, Json(user)).into_response())
    }
}
