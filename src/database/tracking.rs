// ABOUTME: Tracking-entry database operations for activities, diet, and progress history
// ABOUTME: Append-only storage with per-user listing, progress payloads stored as JSON text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityEntry, ActivityType, DietEntry, MealType, ProgressEntry};
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create activity, diet, and progress tables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database schema migration fails
    /// - Table creation fails
    /// - Index creation fails
    pub(super) async fn migrate_tracking(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS activity_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                activity_type TEXT CHECK (activity_type IN ('cardio', 'strength', 'flexibility', 'sports')),
                duration_minutes INTEGER,
                calories_burned REAL,
                date DATETIME NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS diet_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                food_name TEXT NOT NULL,
                meal TEXT CHECK (meal IN ('breakfast', 'lunch', 'dinner', 'snack')),
                calories REAL,
                protein_g REAL,
                carbs_g REAL,
                fat_g REAL,
                date DATETIME NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS progress_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                entry_type TEXT,
                payload TEXT NOT NULL,
                recorded_at DATETIME NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_activity_entries_user ON activity_entries(user_id)",
        )
        .execute(self.pool())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_diet_entries_user ON diet_entries(user_id)")
            .execute(self.pool())
            .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_progress_entries_user_type
             ON progress_entries(user_id, entry_type)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Append an activity entry for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn add_activity(&self, user_id: Uuid, entry: &ActivityEntry) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO activity_entries (user_id, name, activity_type, duration_minutes, calories_burned, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(user_id.to_string())
        .bind(&entry.name)
        .bind(entry.activity_type.map(|t| t.as_str()))
        .bind(entry.duration_minutes)
        .bind(entry.calories_burned)
        .bind(entry.date)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// List a user's activity entries in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_activities(&self, user_id: Uuid) -> AppResult<Vec<ActivityEntry>> {
        let rows = sqlx::query(
            r"
            SELECT name, activity_type, duration_minutes, calories_burned, date
            FROM activity_entries WHERE user_id = $1 ORDER BY id ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(self.pool())
        .await?;

        rows.iter()
            .map(|row| {
                let activity_type = match row.try_get::<Option<String>, _>("activity_type")? {
                    Some(raw) => Some(raw.parse::<ActivityType>().map_err(|e| {
                        AppError::database(format!("Invalid stored activity type: {e}"))
                    })?),
                    None => None,
                };
                Ok(ActivityEntry {
                    name: row.try_get("name")?,
                    activity_type,
                    duration_minutes: row.try_get("duration_minutes")?,
                    calories_burned: row.try_get("calories_burned")?,
                    date: row.try_get("date")?,
                })
            })
            .collect()
    }

    /// Append a diet entry for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn add_diet_entry(&self, user_id: Uuid, entry: &DietEntry) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO diet_entries (user_id, food_name, meal, calories, protein_g, carbs_g, fat_g, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(user_id.to_string())
        .bind(&entry.food_name)
        .bind(entry.meal.map(|m| m.as_str()))
        .bind(entry.calories)
        .bind(entry.protein_g)
        .bind(entry.carbs_g)
        .bind(entry.fat_g)
        .bind(entry.date)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// List a user's diet entries in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_diet_entries(&self, user_id: Uuid) -> AppResult<Vec<DietEntry>> {
        let rows = sqlx::query(
            r"
            SELECT food_name, meal, calories, protein_g, carbs_g, fat_g, date
            FROM diet_entries WHERE user_id = $1 ORDER BY id ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(self.pool())
        .await?;

        rows.iter()
            .map(|row| {
                let meal = match row.try_get::<Option<String>, _>("meal")? {
                    Some(raw) => Some(
                        raw.parse::<MealType>()
                            .map_err(|e| AppError::database(format!("Invalid stored meal: {e}")))?,
                    ),
                    None => None,
                };
                Ok(DietEntry {
                    food_name: row.try_get("food_name")?,
                    meal,
                    calories: row.try_get("calories")?,
                    protein_g: row.try_get("protein_g")?,
                    carbs_g: row.try_get("carbs_g")?,
                    fat_g: row.try_get("fat_g")?,
                    date: row.try_get("date")?,
                })
            })
            .collect()
    }

    /// Append a progress entry for a user
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - JSON serialization fails
    /// - The database query fails
    pub async fn append_progress(&self, user_id: Uuid, entry: &ProgressEntry) -> AppResult<()> {
        let payload_json = serde_json::to_string(&entry.payload)?;

        sqlx::query(
            r"
            INSERT INTO progress_entries (user_id, entry_type, payload, recorded_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(user_id.to_string())
        .bind(&entry.entry_type)
        .bind(payload_json)
        .bind(entry.recorded_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// List all of a user's progress entries in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_progress(&self, user_id: Uuid) -> AppResult<Vec<ProgressEntry>> {
        let rows = sqlx::query(
            r"
            SELECT entry_type, payload, recorded_at
            FROM progress_entries WHERE user_id = $1 ORDER BY id ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(Self::row_to_progress_entry).collect()
    }

    /// List a user's progress entries with the given type, in insertion order
    ///
    /// BMI history uses this with `"bmi_analysis"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_progress_by_type(
        &self,
        user_id: Uuid,
        entry_type: &str,
    ) -> AppResult<Vec<ProgressEntry>> {
        let rows = sqlx::query(
            r"
            SELECT entry_type, payload, recorded_at
            FROM progress_entries WHERE user_id = $1 AND entry_type = $2 ORDER BY id ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(entry_type)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(Self::row_to_progress_entry).collect()
    }

    /// Convert a database row to a `ProgressEntry`
    fn row_to_progress_entry(row: &sqlx::sqlite::SqliteRow) -> AppResult<ProgressEntry> {
        let payload_json: String = row.try_get("payload")?;
        let payload = serde_json::from_str(&payload_json)?;

        Ok(ProgressEntry {
            entry_type: row.try_get("entry_type")?,
            payload,
            recorded_at: row.try_get("recorded_at")?,
        })
    }
}
