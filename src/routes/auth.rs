// ABOUTME: User authentication route handlers for registration and login
// ABOUTME: Issues JWT bearer tokens and verifies bcrypt password hashes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! Authentication routes for account registration and login
//!
//! Both endpoints return the same response shape deployed clients store:
//! a JWT bearer token plus a trimmed `{id, email, name}` user summary.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::User;
use crate::server::ServerResources;

/// Authentication routes implementation
pub struct AuthRoutes;

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Email address, also the login identifier
    pub email: String,
    /// Plaintext password, hashed with bcrypt before storage
    pub password: String,
    /// Display name
    pub name: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Trimmed user info returned alongside a token
#[derive(Debug, Serialize)]
pub struct UserSummary {
    /// User id
    pub id: String,
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
}

/// Response for both registration and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// JWT bearer token
    pub token: String,
    /// The authenticated user
    pub user: UserSummary,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users/register", post(Self::handle_register))
            .route("/api/users/login", post(Self::handle_login))
            .with_state(resources)
    }

    /// Validate email format
    #[must_use]
    pub fn is_valid_email(email: &str) -> bool {
        // Simple email validation
        if email.len() <= 5 {
            return false;
        }
        let Some(at_pos) = email.find('@') else {
            return false;
        };
        if at_pos == 0 || at_pos == email.len() - 1 {
            return false; // @ at start or end
        }
        let domain_part = &email[at_pos + 1..];
        domain_part.contains('.')
    }

    /// Validate password strength
    #[must_use]
    pub const fn is_valid_password(password: &str) -> bool {
        password.len() >= 8
    }

    /// Handle user registration
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        tracing::info!("User registration attempt for email: {}", request.email);

        if !Self::is_valid_email(&request.email) {
            return Err(AppError::invalid_input("Invalid email format"));
        }
        if !Self::is_valid_password(&request.password) {
            return Err(AppError::invalid_input(
                "Password must be at least 8 characters",
            ));
        }
        if request.name.trim().is_empty() {
            return Err(AppError::missing_field("Name is required"));
        }

        // Check if user already exists
        if resources
            .database
            .get_user_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::already_exists("User already exists"));
        }

        // Hash password
        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        let user = User::new(request.email.clone(), password_hash, request.name);
        let user_id = resources.database.create_user(&user).await?;

        let token = resources.auth.generate_token(&user)?;

        tracing::info!(
            "User registered successfully: {} ({})",
            request.email,
            user_id
        );

        let response = AuthResponse {
            token,
            user: UserSummary::from(&user),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle user login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        tracing::info!("User login attempt for email: {}", request.email);

        let user = resources
            .database
            .get_user_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::auth_invalid("Invalid credentials"))?;

        // Verify password using spawn_blocking to avoid blocking the async executor
        let password = request.password.clone();
        let password_hash = user.password_hash.clone();
        let is_valid =
            tokio::task::spawn_blocking(move || bcrypt::verify(&password, &password_hash))
                .await
                .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
                .map_err(|e| AppError::internal(format!("Password verification error: {e}")))?;

        if !is_valid {
            tracing::warn!("Invalid password for user: {}", request.email);
            return Err(AppError::auth_invalid("Invalid credentials"));
        }

        resources.database.update_last_active(user.id).await?;

        let token = resources.auth.generate_token(&user)?;

        tracing::info!("User logged in successfully: {} ({})", request.email, user.id);

        let response = AuthResponse {
            token,
            user: UserSummary::from(&user),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
