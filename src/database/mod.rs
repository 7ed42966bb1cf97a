// ABOUTME: Database management over SQLite with schema migration and connection pooling
// ABOUTME: Splits user storage and tracking-entry storage into per-domain operation files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! # Database Management
//!
//! SQLite-backed persistence for user accounts and tracking history. All
//! operations go through the shared [`Database`] handle, which owns the
//! connection pool and runs idempotent schema migrations on startup.

mod tracking;
mod users;

use crate::errors::AppResult;
use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::info;

/// Database manager for user and tracking-entry storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration statement fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        info!("Database ready at {database_url}");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_tracking().await?;
        Ok(())
    }

    /// Lightweight connectivity probe for health reporting
    pub async fn is_healthy(&self) -> bool {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}
