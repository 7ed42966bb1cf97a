// ABOUTME: Integration tests for the SQLite persistence layer
// ABOUTME: Covers user accounts, goals, and append-only tracking entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::Utc;
use fitlog_server::errors::ErrorCode;
use fitlog_server::models::{
    ActivityEntry, ActivityType, DietEntry, Gender, GoalType, Goals, MealType, ProgressEntry, User,
};
use serde_json::json;
use uuid::Uuid;

fn sample_user(email: &str) -> User {
    let mut user = User::new(
        email.to_owned(),
        "hashed-password".to_owned(),
        "Alice Example".to_owned(),
    );
    user.age = Some(31);
    user.gender = Some(Gender::Female);
    user.height_cm = Some(167.5);
    user.weight_kg = Some(61.0);
    user
}

#[tokio::test]
async fn test_create_and_get_user_round_trip() -> Result<()> {
    common::init_test_logging();
    let database = common::create_test_database().await?;

    let user = sample_user("alice@example.com");
    let user_id = database.create_user(&user).await?;
    assert_eq!(user_id, user.id);

    let fetched = database
        .get_user(user_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("user not found after insert"))?;
    assert_eq!(fetched.email, "alice@example.com");
    assert_eq!(fetched.password_hash, "hashed-password");
    assert_eq!(fetched.name, "Alice Example");
    assert_eq!(fetched.age, Some(31));
    assert_eq!(fetched.gender, Some(Gender::Female));
    assert_eq!(fetched.height_cm, Some(167.5));
    assert_eq!(fetched.weight_kg, Some(61.0));
    assert_eq!(fetched.created_at.timestamp(), user.created_at.timestamp());

    Ok(())
}

#[tokio::test]
async fn test_get_user_by_email_and_missing_lookups() -> Result<()> {
    common::init_test_logging();
    let database = common::create_test_database().await?;

    let user = sample_user("bob@example.com");
    database.create_user(&user).await?;

    let by_email = database.get_user_by_email("bob@example.com").await?;
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    assert!(database.get_user_by_email("nobody@example.com").await?.is_none());
    assert!(database.get_user(Uuid::new_v4()).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() -> Result<()> {
    common::init_test_logging();
    let database = common::create_test_database().await?;

    database.create_user(&sample_user("carol@example.com")).await?;
    let err = database
        .create_user(&sample_user("carol@example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.message, "User already exists");

    Ok(())
}

#[tokio::test]
async fn test_update_profile_persists_fields() -> Result<()> {
    common::init_test_logging();
    let database = common::create_test_database().await?;

    let mut user = User::new(
        "dan@example.com".to_owned(),
        "hashed-password".to_owned(),
        "Dan".to_owned(),
    );
    database.create_user(&user).await?;

    user.name = "Daniel".to_owned();
    user.age = Some(45);
    user.gender = Some(Gender::Male);
    user.height_cm = Some(181.0);
    user.weight_kg = Some(88.5);
    database.update_profile(&user).await?;

    let fetched = database
        .get_user(user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("user not found after update"))?;
    assert_eq!(fetched.name, "Daniel");
    assert_eq!(fetched.age, Some(45));
    assert_eq!(fetched.gender, Some(Gender::Male));
    assert_eq!(fetched.height_cm, Some(181.0));
    assert_eq!(fetched.weight_kg, Some(88.5));

    Ok(())
}

#[tokio::test]
async fn test_goals_round_trip_through_json_column() -> Result<()> {
    common::init_test_logging();
    let database = common::create_test_database().await?;

    let user = sample_user("eve@example.com");
    database.create_user(&user).await?;

    let goals = Goals {
        weight_kg: Some(58.0),
        target_calories: Some(2200),
        target_steps: Some(9000),
        goal_type: Some(GoalType::LoseWeight),
    };
    database.update_goals(user.id, &goals).await?;

    let fetched = database
        .get_user(user.id)
        .await?
        .and_then(|u| u.goals)
        .ok_or_else(|| anyhow::anyhow!("goals not stored"))?;
    assert_eq!(fetched.weight_kg, Some(58.0));
    assert_eq!(fetched.target_calories, Some(2200));
    assert_eq!(fetched.target_steps, Some(9000));
    assert_eq!(fetched.goal_type, Some(GoalType::LoseWeight));

    Ok(())
}

#[tokio::test]
async fn test_activities_list_in_insertion_order() -> Result<()> {
    common::init_test_logging();
    let database = common::create_test_database().await?;

    let user = sample_user("frank@example.com");
    database.create_user(&user).await?;

    let run = ActivityEntry {
        name: "Morning run".to_owned(),
        activity_type: Some(ActivityType::Cardio),
        duration_minutes: Some(30),
        calories_burned: Some(280.0),
        date: Utc::now(),
    };
    let lift = ActivityEntry {
        name: "Deadlifts".to_owned(),
        activity_type: Some(ActivityType::Strength),
        duration_minutes: Some(45),
        calories_burned: None,
        date: Utc::now(),
    };
    database.add_activity(user.id, &run).await?;
    database.add_activity(user.id, &lift).await?;

    let entries = database.list_activities(user.id).await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Morning run");
    assert_eq!(entries[0].activity_type, Some(ActivityType::Cardio));
    assert_eq!(entries[0].duration_minutes, Some(30));
    assert_eq!(entries[0].calories_burned, Some(280.0));
    assert_eq!(entries[1].name, "Deadlifts");
    assert_eq!(entries[1].activity_type, Some(ActivityType::Strength));
    assert!(entries[1].calories_burned.is_none());

    Ok(())
}

#[tokio::test]
async fn test_diet_entries_round_trip() -> Result<()> {
    common::init_test_logging();
    let database = common::create_test_database().await?;

    let user = sample_user("grace@example.com");
    database.create_user(&user).await?;

    let entry = DietEntry {
        food_name: "Oatmeal".to_owned(),
        meal: Some(MealType::Breakfast),
        calories: Some(320.0),
        protein_g: Some(12.0),
        carbs_g: Some(54.0),
        fat_g: Some(6.5),
        date: Utc::now(),
    };
    database.add_diet_entry(user.id, &entry).await?;

    let entries = database.list_diet_entries(user.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].food_name, "Oatmeal");
    assert_eq!(entries[0].meal, Some(MealType::Breakfast));
    assert_eq!(entries[0].calories, Some(320.0));
    assert_eq!(entries[0].protein_g, Some(12.0));
    assert_eq!(entries[0].carbs_g, Some(54.0));
    assert_eq!(entries[0].fat_g, Some(6.5));

    Ok(())
}

#[tokio::test]
async fn test_progress_entries_append_and_filter_by_type() -> Result<()> {
    common::init_test_logging();
    let database = common::create_test_database().await?;

    let user = sample_user("heidi@example.com");
    database.create_user(&user).await?;

    let weigh_in = ProgressEntry {
        entry_type: None,
        payload: json!({"weight": 80.2, "note": "morning weigh-in"}),
        recorded_at: Utc::now(),
    };
    let analysis = ProgressEntry {
        entry_type: Some("bmi_analysis".to_owned()),
        payload: json!({"type": "bmi_analysis", "data": {"bmi": 24.22}}),
        recorded_at: Utc::now(),
    };
    database.append_progress(user.id, &weigh_in).await?;
    database.append_progress(user.id, &analysis).await?;

    let all = database.list_progress(user.id).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].payload["weight"], 80.2);
    assert!(all[0].entry_type.is_none());
    assert_eq!(all[1].entry_type.as_deref(), Some("bmi_analysis"));

    let analyses = database.list_progress_by_type(user.id, "bmi_analysis").await?;
    assert_eq!(analyses.len(), 1);
    assert_eq!(analyses[0].payload["data"]["bmi"], 24.22);

    Ok(())
}

#[tokio::test]
async fn test_tracking_rows_are_isolated_per_user() -> Result<()> {
    common::init_test_logging();
    let database = common::create_test_database().await?;

    let alice = sample_user("alice@example.com");
    let bob = sample_user("bob@example.com");
    database.create_user(&alice).await?;
    database.create_user(&bob).await?;

    database
        .add_activity(
            alice.id,
            &ActivityEntry {
                name: "Yoga".to_owned(),
                activity_type: Some(ActivityType::Flexibility),
                duration_minutes: Some(60),
                calories_burned: None,
                date: Utc::now(),
            },
        )
        .await?;
    database
        .append_progress(
            alice.id,
            &ProgressEntry {
                entry_type: Some("bmi_analysis".to_owned()),
                payload: json!({"type": "bmi_analysis"}),
                recorded_at: Utc::now(),
            },
        )
        .await?;

    assert_eq!(database.list_activities(alice.id).await?.len(), 1);
    assert!(database.list_activities(bob.id).await?.is_empty());
    assert!(database.list_diet_entries(bob.id).await?.is_empty());
    assert!(database
        .list_progress_by_type(bob.id, "bmi_analysis")
        .await?
        .is_empty());

    Ok(())
}
