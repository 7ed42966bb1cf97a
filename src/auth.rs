// ABOUTME: JWT-based user authentication with HS256 signing
// ABOUTME: Token generation and validation plus bearer-header extraction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! # Authentication
//!
//! JWT bearer authentication. [`AuthManager`] signs and validates tokens
//! with a shared HS256 secret; password hashing lives at the route layer
//! with bcrypt. No refresh tokens, no external identity providers.

use anyhow::Result;
use chrono::{Duration, Utc};
use http::header::AUTHORIZATION;
use http::HeaderMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::{AppError, AppResult};
use crate::models::User;

/// `JWT` claims for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authentication manager for `JWT` tokens
pub struct AuthManager {
    jwt_secret: Vec<u8>,
    token_expiry_hours: i64,
    /// Monotonic counter to ensure unique issued-at values for tokens
    token_counter: AtomicU64,
}

impl AuthManager {
    /// Create a new authentication manager
    #[must_use]
    pub const fn new(jwt_secret: Vec<u8>, token_expiry_hours: i64) -> Self {
        Self {
            jwt_secret,
            token_expiry_hours,
            token_counter: AtomicU64::new(0),
        }
    }

    /// Generate an `HS256` `JWT` token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT` encoding fails
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.token_expiry_hours);

        // Unique issued-at so two tokens minted in the same second differ
        let counter = self.token_counter.fetch_add(1, Ordering::Relaxed);
        let unique_iat =
            now.timestamp() * 1000 + i64::from(u32::try_from(counter % 1000).unwrap_or(0));

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: unique_iat,
            exp: expiry.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&self.jwt_secret),
        )?;

        Ok(token)
    }

    /// Validate an `HS256` `JWT` token and return its claims
    ///
    /// # Errors
    ///
    /// Returns an authentication error if the token is expired, malformed,
    /// or its signature does not verify
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.jwt_secret),
            &validation,
        )
        .map_err(|e| Self::map_jwt_error(&e))?;

        Ok(token_data.claims)
    }

    /// Convert `JWT` library errors to application errors
    fn map_jwt_error(e: &jsonwebtoken::errors::Error) -> AppError {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::ExpiredSignature => AppError::auth_expired(),
            _ => {
                tracing::debug!("JWT validation failed: {e}");
                AppError::auth_invalid("Invalid token")
            }
        }
    }
}

/// Extract the bearer token from an `Authorization` header
///
/// # Errors
///
/// Returns an authentication error when the header is absent or does not
/// carry a `Bearer` scheme
pub fn extract_bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(AppError::auth_required)
}

/// Generate a random alphanumeric `JWT` secret
///
/// Used at startup when `JWT_SECRET` is not configured; tokens signed with
/// a generated secret do not survive a restart.
#[must_use]
pub fn generate_jwt_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
