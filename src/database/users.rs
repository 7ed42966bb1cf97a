// ABOUTME: User management database operations
// ABOUTME: Handles account creation, lookup, profile and goal updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Gender, Goals, User};
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the users table
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database schema migration fails
    /// - Table creation fails
    /// - Index creation fails
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                name TEXT NOT NULL,
                age INTEGER,
                gender TEXT CHECK (gender IN ('male', 'female', 'other')),
                height_cm REAL,
                weight_kg REAL,
                goals TEXT,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                last_active DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Insert a new user
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The email is already in use (`ResourceAlreadyExists`)
    /// - The database operation fails
    pub async fn create_user(&self, user: &User) -> AppResult<Uuid> {
        let goals_json = user
            .goals
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r"
            INSERT INTO users (
                id, email, password_hash, name, age, gender,
                height_cm, weight_kg, goals, created_at, last_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.age)
        .bind(user.gender.map(|g| g.as_str()))
        .bind(user.height_cm)
        .bind(user.weight_kg)
        .bind(goals_json)
        .bind(user.created_at)
        .bind(user.last_active)
        .execute(self.pool())
        .await
        .map_err(|err| {
            let duplicate = err
                .as_database_error()
                .is_some_and(sqlx::error::DatabaseError::is_unique_violation);
            if duplicate {
                AppError::already_exists("User already exists")
            } else {
                AppError::from(err)
            }
        })?;

        Ok(user.id)
    }

    /// Get a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        self.get_user_impl("id", &user_id.to_string()).await
    }

    /// Get a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.get_user_impl("email", email).await
    }

    /// Internal implementation for getting a user
    async fn get_user_impl(&self, field: &str, value: &str) -> AppResult<Option<User>> {
        let query = format!(
            r"
            SELECT id, email, password_hash, name, age, gender,
                   height_cm, weight_kg, goals, created_at, last_active
            FROM users WHERE {field} = $1
            "
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(self.pool())
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Convert a database row to a `User` struct
    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> AppResult<User> {
        let id: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("Invalid stored user id: {e}")))?;

        let gender = match row.try_get::<Option<String>, _>("gender")? {
            Some(raw) => Some(
                raw.parse::<Gender>()
                    .map_err(|e| AppError::database(format!("Invalid stored gender: {e}")))?,
            ),
            None => None,
        };

        let goals = match row.try_get::<Option<String>, _>("goals")? {
            Some(raw) => Some(serde_json::from_str::<Goals>(&raw)?),
            None => None,
        };

        Ok(User {
            id,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            gender,
            height_cm: row.try_get("height_cm")?,
            weight_kg: row.try_get("weight_kg")?,
            goals,
            created_at: row.try_get("created_at")?,
            last_active: row.try_get("last_active")?,
        })
    }

    /// Update a user's profile columns from the in-memory user
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn update_profile(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            r"
            UPDATE users SET
                name = $2,
                age = $3,
                gender = $4,
                height_cm = $5,
                weight_kg = $6,
                last_active = CURRENT_TIMESTAMP
            WHERE id = $1
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(user.age)
        .bind(user.gender.map(|g| g.as_str()))
        .bind(user.height_cm)
        .bind(user.weight_kg)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Replace a user's goals
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - JSON serialization fails
    /// - The database query fails
    pub async fn update_goals(&self, user_id: Uuid, goals: &Goals) -> AppResult<()> {
        let goals_json = serde_json::to_string(goals)?;

        sqlx::query("UPDATE users SET goals = $2, last_active = CURRENT_TIMESTAMP WHERE id = $1")
            .bind(user_id.to_string())
            .bind(goals_json)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Update user's last active timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn update_last_active(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE users SET last_active = CURRENT_TIMESTAMP WHERE id = $1")
            .bind(user_id.to_string())
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
