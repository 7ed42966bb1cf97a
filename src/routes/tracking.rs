// ABOUTME: Activity, diet, and progress tracking route handlers
// ABOUTME: Append-and-list endpoints backing the workout, nutrition, and progress screens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! Tracking routes for activities, diet, and progress
//!
//! The list endpoints return plain arrays of stored entries because deployed
//! clients index straight into them; the append endpoints return the recorded
//! entry under a confirmation message.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{ActivityEntry, DietEntry, ProgressEntry};
use crate::server::ServerResources;

/// Tracking routes implementation
pub struct TrackingRoutes;

/// Request to log a workout
///
/// Accepts both the documented shape (entry nested under `activity`) and the
/// flat entry deployed clients actually send.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AddActivityRequest {
    /// Entry nested under an `activity` key
    Nested {
        /// The workout to record
        activity: ActivityEntry,
    },
    /// The entry itself as the whole body
    Flat(ActivityEntry),
}

impl AddActivityRequest {
    /// Unwrap to the workout entry regardless of request shape
    #[must_use]
    pub fn into_entry(self) -> ActivityEntry {
        match self {
            Self::Nested { activity } => activity,
            Self::Flat(entry) => entry,
        }
    }
}

impl TrackingRoutes {
    /// Create all tracking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users/activities", post(Self::handle_add_activity))
            .route("/api/users/activities", get(Self::handle_list_activities))
            .route("/api/users/diet", post(Self::handle_add_diet))
            .route("/api/users/diet", get(Self::handle_list_diet))
            .route("/api/users/progress", post(Self::handle_add_progress))
            .route("/api/users/progress", get(Self::handle_list_progress))
            .with_state(resources)
    }

    /// Record a workout for the authenticated user
    async fn handle_add_activity(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<AddActivityRequest>,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;
        let entry = request.into_entry();

        resources.database.add_activity(user_id, &entry).await?;
        tracing::debug!("Activity logged for user {user_id}");

        let body = serde_json::json!({
            "message": "Activity logged",
            "activity": entry,
        });
        Ok((StatusCode::CREATED, Json(body)).into_response())
    }

    /// List the authenticated user's workouts in insertion order
    async fn handle_list_activities(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;
        let entries = resources.database.list_activities(user_id).await?;

        Ok((StatusCode::OK, Json(entries)).into_response())
    }

    /// Record a food item for the authenticated user
    async fn handle_add_diet(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(entry): Json<DietEntry>,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;

        resources.database.add_diet_entry(user_id, &entry).await?;
        tracing::debug!("Diet entry logged for user {user_id}");

        let body = serde_json::json!({
            "message": "Diet entry logged",
            "entry": entry,
        });
        Ok((StatusCode::CREATED, Json(body)).into_response())
    }

    /// List the authenticated user's food log in insertion order
    async fn handle_list_diet(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;
        let entries = resources.database.list_diet_entries(user_id).await?;

        Ok((StatusCode::OK, Json(entries)).into_response())
    }

    /// Append a free-form progress entry for the authenticated user
    ///
    /// The body must be a JSON object; the server stamps its `date` field
    /// with the append time.
    async fn handle_add_progress(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(payload): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;

        if !payload.is_object() {
            return Err(AppError::invalid_input("Progress entry must be a JSON object"));
        }
        let entry = ProgressEntry::from_payload(payload);

        resources.database.append_progress(user_id, &entry).await?;
        tracing::debug!("Progress entry appended for user {user_id}");

        let body = serde_json::json!({
            "message": "Progress recorded",
            "entry": entry,
        });
        Ok((StatusCode::CREATED, Json(body)).into_response())
    }

    /// List the authenticated user's progress entries in insertion order
    async fn handle_list_progress(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;
        let entries = resources.database.list_progress(user_id).await?;

        Ok((StatusCode::OK, Json(entries)).into_response())
    }
}
