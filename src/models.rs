// ABOUTME: Core data models for the Fitlog fitness and diet tracking API
// ABOUTME: Defines User, Goals, tracking entries and the BMI analysis wire types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! # Data Models
//!
//! Core data structures shared across the server: user accounts with their
//! profile and goals, activity/diet/progress tracking entries, and the wire
//! types of the BMI analysis engine.
//!
//! ## Design Principles
//!
//! - **Serializable**: all wire-facing models serialize to the JSON shapes
//!   deployed mobile clients already parse
//! - **Type Safe**: closed vocabularies (gender, goal type, meal, activity
//!   kind) are enums, not free-form strings
//! - **Immutable analyses**: a computed BMI analysis is never mutated after
//!   creation; history entries are append-only

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Biological gender reported by the user, forwarded to BMI classification
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other / not disclosed
    Other,
}

impl Gender {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!("Invalid gender: {s}")).into()),
        }
    }
}

/// Overall fitness objective attached to a user's goals
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Reduce body weight
    LoseWeight,
    /// Increase body weight
    GainWeight,
    /// Hold current weight
    MaintainWeight,
    /// Gain muscle mass
    BuildMuscle,
}

impl Display for GoalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::LoseWeight => write!(f, "lose_weight"),
            Self::GainWeight => write!(f, "gain_weight"),
            Self::MaintainWeight => write!(f, "maintain_weight"),
            Self::BuildMuscle => write!(f, "build_muscle"),
        }
    }
}

/// Target metrics a user is working toward
///
/// Wire keys are camelCase (`targetCalories`, `goalType`) to match what
/// deployed clients send and read back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    /// Target body weight in kilograms (wire key `weight`)
    #[serde(rename = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Target daily calorie intake
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_calories: Option<u32>,
    /// Target daily step count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_steps: Option<u32>,
    /// Overall objective
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
}

/// Broad category of a logged workout
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Endurance work (running, cycling, swimming)
    Cardio,
    /// Resistance training
    Strength,
    /// Stretching, mobility, yoga
    Flexibility,
    /// Team or racket sports
    Sports,
}

impl ActivityType {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Flexibility => "flexibility",
            Self::Sports => "sports",
        }
    }
}

impl FromStr for ActivityType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cardio" => Ok(Self::Cardio),
            "strength" => Ok(Self::Strength),
            "flexibility" => Ok(Self::Flexibility),
            "sports" => Ok(Self::Sports),
            _ => Err(AppError::invalid_input(format!("Invalid activity type: {s}")).into()),
        }
    }
}

/// A single logged workout
///
/// Deployed clients send and render the workout name under the wire key
/// `type` (with the category under `activityType`), so the rename here is
/// load-bearing in both directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// What the user did (e.g. "Morning Run"); wire key `type`
    #[serde(rename = "type")]
    pub name: String,
    /// Broad category of the workout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    /// Duration in minutes (wire key `duration`)
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Estimated energy expenditure in kcal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    /// When the workout happened
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

/// Meal slot a diet entry belongs to
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// First meal of the day
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Anything between meals
    Snack,
}

impl MealType {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl FromStr for MealType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(AppError::invalid_input(format!("Invalid meal type: {s}")).into()),
        }
    }
}

/// A single logged food item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietEntry {
    /// Name of the food (wire key `foodName`)
    pub food_name: String,
    /// Meal slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal: Option<MealType>,
    /// Energy in kcal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams (wire key `protein`)
    #[serde(rename = "protein", skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams (wire key `carbs`)
    #[serde(rename = "carbs", skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat in grams (wire key `fat`)
    #[serde(rename = "fat", skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// When the food was eaten
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

/// A progress history record: an opaque JSON payload plus the envelope
/// fields used for storage-side filtering
///
/// On the wire an entry IS its payload (the envelope never leaks), so
/// history endpoints return exactly the objects clients appended.
#[derive(Debug, Clone)]
pub struct ProgressEntry {
    /// Discriminator extracted from the payload's `type` field, when present.
    /// BMI snapshots use `"bmi_analysis"`; plain measurements have none.
    pub entry_type: Option<String>,
    /// The payload as appended, with the server-stamped `date` field
    pub payload: serde_json::Value,
    /// When the entry was appended (mirrors the payload's `date`)
    pub recorded_at: DateTime<Utc>,
}

impl Serialize for ProgressEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload.serialize(serializer)
    }
}

impl ProgressEntry {
    /// Build an entry from a raw payload object
    ///
    /// Stamps the append time into the payload's `date` field (overwriting
    /// any client-sent value) and lifts the payload's `type` field (if any)
    /// into the envelope so history queries can filter without parsing JSON.
    #[must_use]
    pub fn from_payload(mut payload: serde_json::Value) -> Self {
        let recorded_at = Utc::now();
        if let Some(map) = payload.as_object_mut() {
            map.insert(
                "date".to_owned(),
                serde_json::Value::String(recorded_at.to_rfc3339()),
            );
        }
        let entry_type = payload
            .get("type")
            .and_then(serde_json::Value::as_str)
            .map(ToOwned::to_owned);
        Self {
            entry_type,
            payload,
            recorded_at,
        }
    }
}

/// Represents a registered user of the service
///
/// Profile responses expose camelCase keys with `height`/`weight` shorthand
/// for the physical measurements, matching what clients store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address (used for identification)
    pub email: String,
    /// Hashed password for authentication (never serialized)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender, used for BMI classification context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimeters (wire key `height`)
    #[serde(rename = "height", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms (wire key `weight`)
    #[serde(rename = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Target metrics, if the user set any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Goals>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// Last time the user accessed the system
    pub last_active: DateTime<Utc>,
}

impl User {
    /// Create a new user with the given email and password hash
    #[must_use]
    pub fn new(email: String, password_hash: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            age: None,
            gender: None,
            height_cm: None,
            weight_kg: None,
            goals: None,
            created_at: now,
            last_active: now,
        }
    }

    /// Update last active timestamp
    pub fn update_last_active(&mut self) {
        self.last_active = Utc::now();
    }
}

/// Validated input to a BMI analysis
///
/// Serializes to the exact JSON shape external classifier delegates receive
/// as their single positional argument: `{"height": .., "weight": ..}` plus
/// `age`/`gender` when present (absent optionals are omitted, not null).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiInput {
    /// Height in centimeters, must be positive
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Weight in kilograms, must be positive
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Age in years, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl BmiInput {
    /// Create an input from already-validated parts
    #[must_use]
    pub const fn new(
        height_cm: f64,
        weight_kg: f64,
        age: Option<u32>,
        gender: Option<Gender>,
    ) -> Self {
        Self {
            height_cm,
            weight_kg,
            age,
            gender,
        }
    }
}

/// Which code path produced an analysis result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    /// The external classifier delegate produced the result
    AiClassifier,
    /// The in-process calculator/classifier fallback produced the result
    StandardCalculation,
}

impl AnalysisMethod {
    /// Wire value of this method tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AiClassifier => "ai_classifier",
            Self::StandardCalculation => "standard_calculation",
        }
    }
}

impl Display for AnalysisMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// The standard-calculation analysis envelope
///
/// Produced whenever the external delegate is absent or fails. Field names
/// and the `-1` unknown `category_code` are load-bearing wire compatibility.
#[derive(Debug, Clone, Serialize)]
pub struct BmiAnalysisResult {
    /// Body mass index rounded to two decimals
    pub bmi: f64,
    /// Category key (`underweight`, `normal`, `overweight`, `obese`, or
    /// `unknown` for values the band table does not cover)
    pub category: &'static str,
    /// Zero-based index of the category in the band table, `-1` for unknown
    pub category_code: i32,
    /// Human-readable category label
    pub label: &'static str,
    /// Echo of the input height
    pub height_cm: f64,
    /// Echo of the input weight
    pub weight_kg: f64,
    /// Echo of the input age (`null` when not provided)
    pub age: Option<u32>,
    /// Echo of the input gender (`null` when not provided)
    pub gender: Option<Gender>,
    /// Category-appropriate advice from the static catalog
    pub recommendations: &'static crate::bmi::RecommendationSet,
    /// Always [`AnalysisMethod::StandardCalculation`] for this envelope
    pub method: AnalysisMethod,
}

/// A completed BMI analysis, from either code path
///
/// Serialized untagged: delegate payloads go to the wire exactly as merged,
/// standard results as the [`BmiAnalysisResult`] envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BmiAnalysis {
    /// The external delegate's payload, with recommendations and method merged in
    Delegated(serde_json::Value),
    /// The in-process fallback envelope
    Standard(BmiAnalysisResult),
}

impl BmiAnalysis {
    /// Which code path produced this analysis
    #[must_use]
    pub fn method(&self) -> AnalysisMethod {
        match self {
            Self::Delegated(_) => AnalysisMethod::AiClassifier,
            Self::Standard(_) => AnalysisMethod::StandardCalculation,
        }
    }
}
