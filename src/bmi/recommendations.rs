// ABOUTME: Static per-category health recommendation catalog
// ABOUTME: Lookup falls back to the normal set and can never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! Recommendation catalog
//!
//! Canned diet/exercise/lifestyle advice per BMI category. The text is
//! product copy reviewed by the content team; it is data, not logic, and
//! has no mutation API. Lookups for anything outside the four catalog keys
//! fall back to the `normal` set.

use serde::Serialize;

/// Advice bundle for one BMI category: exactly four tips per area
#[derive(Debug, Serialize)]
pub struct RecommendationSet {
    /// Diet adjustments
    pub diet: [&'static str; 4],
    /// Exercise guidance
    pub exercise: [&'static str; 4],
    /// Lifestyle habits
    pub lifestyle: [&'static str; 4],
}

static UNDERWEIGHT: RecommendationSet = RecommendationSet {
    diet: [
        "Increase caloric intake with nutrient-rich foods",
        "Include protein-rich foods like lean meats, eggs, and legumes",
        "Add healthy fats from nuts, avocados, and olive oil",
        "Consider protein shakes or smoothies",
    ],
    exercise: [
        "Focus on strength training to build muscle mass",
        "Include resistance exercises 2-3 times per week",
        "Avoid excessive cardio that burns too many calories",
        "Work with a trainer to develop a balanced program",
    ],
    lifestyle: [
        "Eat smaller, more frequent meals throughout the day",
        "Track your food intake to ensure adequate calories",
        "Get adequate sleep for muscle recovery",
        "Consider consulting a nutritionist",
    ],
};

static NORMAL: RecommendationSet = RecommendationSet {
    diet: [
        "Maintain a balanced diet with all food groups",
        "Focus on whole foods and limit processed foods",
        "Stay hydrated with plenty of water",
        "Practice portion control",
    ],
    exercise: [
        "Aim for 150 minutes of moderate exercise per week",
        "Include both cardio and strength training",
        "Find activities you enjoy to stay motivated",
        "Gradually increase intensity and duration",
    ],
    lifestyle: [
        "Maintain regular meal times",
        "Get 7-9 hours of quality sleep",
        "Manage stress through relaxation techniques",
        "Regular health check-ups",
    ],
};

static OVERWEIGHT: RecommendationSet = RecommendationSet {
    diet: [
        "Create a moderate calorie deficit",
        "Increase protein intake to preserve muscle",
        "Focus on fiber-rich foods for satiety",
        "Limit added sugars and refined carbohydrates",
    ],
    exercise: [
        "Start with low-impact cardio like walking or swimming",
        "Gradually increase exercise duration and intensity",
        "Include strength training to build muscle",
        "Aim for 200-300 minutes of exercise per week",
    ],
    lifestyle: [
        "Keep a food diary to track eating patterns",
        "Set realistic weight loss goals (1-2 lbs per week)",
        "Get adequate sleep to support metabolism",
        "Consider working with a health coach",
    ],
};

static OBESE: RecommendationSet = RecommendationSet {
    diet: [
        "Consult with a healthcare provider for personalized plan",
        "Focus on whole, unprocessed foods",
        "Practice mindful eating and portion control",
        "Consider working with a registered dietitian",
    ],
    exercise: [
        "Start with low-impact activities like walking",
        "Work with a fitness professional for safe progression",
        "Include both cardio and strength training",
        "Set realistic, achievable fitness goals",
    ],
    lifestyle: [
        "Address underlying health conditions",
        "Consider behavioral therapy for sustainable changes",
        "Build a support system for accountability",
        "Regular medical monitoring",
    ],
};

/// Look up the advice bundle for a category key
///
/// The match is exact and case-sensitive; anything that is not one of the
/// four catalog keys (including `unknown` and delegate-supplied labels like
/// `"Normal weight"`) falls back to the `normal` set. Never fails.
#[must_use]
pub fn recommendations_for(category: &str) -> &'static RecommendationSet {
    match category {
        "underweight" => &UNDERWEIGHT,
        "overweight" => &OVERWEIGHT,
        "obese" => &OBESE,
        // "normal" and every fallback case share the same set
        _ => &NORMAL,
    }
}
