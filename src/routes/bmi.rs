// ABOUTME: BMI analysis route handlers for analysis, history, and stateless calculation
// ABOUTME: Bridges the HTTP surface to the BmiAnalyzer orchestrator and progress storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! BMI analysis routes
//!
//! Three endpoints share one request shape: authenticated analysis (persisted
//! to the caller's progress), authenticated history, and an unauthenticated
//! calculator used by onboarding screens before an account exists. Persisting
//! an analysis is log-and-continue; a storage failure never costs the caller
//! their result.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::models::{BmiInput, Gender, ProgressEntry};
use crate::server::ServerResources;

/// Tag stored progress entries carry for BMI snapshots
pub const BMI_PROGRESS_TYPE: &str = "bmi_analysis";

/// BMI routes implementation
pub struct BmiRoutes;

/// Request body shared by the analysis and calculation endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct BmiAnalysisRequest {
    /// Height in centimeters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Gender
    pub gender: Option<Gender>,
}

impl BmiAnalysisRequest {
    /// Convert to a validated analyzer input
    ///
    /// # Errors
    ///
    /// Fails with the `Height and weight are required fields` wire error when
    /// either measurement is absent. Positivity is the analyzer's check.
    pub fn into_input(self) -> AppResult<BmiInput> {
        match (self.height, self.weight) {
            (Some(height), Some(weight)) => {
                Ok(BmiInput::new(height, weight, self.age, self.gender))
            }
            _ => Err(AppError::missing_field(
                "Height and weight are required fields",
            )),
        }
    }
}

impl BmiRoutes {
    /// Create all BMI routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users/bmi-analysis", post(Self::handle_bmi_analysis))
            .route("/api/users/bmi-history", get(Self::handle_bmi_history))
            .route("/api/users/calculate-bmi", post(Self::handle_calculate_bmi))
            .with_state(resources)
    }

    /// Analyze and persist a BMI snapshot for the authenticated user
    async fn handle_bmi_analysis(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<BmiAnalysisRequest>,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;
        let input = request.into_input()?;

        let analysis = resources.analyzer.analyze(&input).await?;

        // Log-and-continue: the analysis response must never depend on
        // persistence succeeding
        let entry = ProgressEntry::from_payload(serde_json::json!({
            "type": BMI_PROGRESS_TYPE,
            "data": &analysis,
        }));
        if let Err(e) = resources.database.append_progress(user_id, &entry).await {
            tracing::warn!("Failed to persist BMI analysis for user {user_id}: {e}");
        }

        Ok((StatusCode::OK, Json(analysis)).into_response())
    }

    /// Return the authenticated user's stored BMI snapshots
    async fn handle_bmi_history(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = super::authenticate(&headers, &resources)?;
        // History 404s for users that no longer exist
        super::load_user(&resources, user_id).await?;

        let entries = resources
            .database
            .list_progress_by_type(user_id, BMI_PROGRESS_TYPE)
            .await?;

        Ok((StatusCode::OK, Json(entries)).into_response())
    }

    /// Analyze without persisting; no authentication required
    async fn handle_calculate_bmi(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<BmiAnalysisRequest>,
    ) -> Result<Response, AppError> {
        let input = request.into_input()?;
        let analysis = resources.analyzer.analyze(&input).await?;

        Ok((StatusCode::OK, Json(analysis)).into_response())
    }
}
