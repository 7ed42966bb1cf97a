// ABOUTME: Pure BMI computation from metric height and weight
// ABOUTME: Output is rounded to two decimals, the precision stored in history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! BMI calculator
//!
//! Standard metric body-mass-index formula. The orchestrator validates
//! inputs before calling; this function itself assumes positive values.

/// Calculate BMI from height in centimeters and weight in kilograms
///
/// Formula: `weight_kg / (height_cm / 100)^2`, rounded to 2 decimal places
/// (multiply by 100, round half away from zero, divide by 100). The rounding
/// choice matches the values persisted in existing progress history.
#[must_use]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert!((calculate_bmi(170.0, 70.0) - 24.22).abs() < f64::EPSILON);
        assert!((calculate_bmi(165.0, 80.0) - 29.38).abs() < f64::EPSILON);
        assert!((calculate_bmi(180.0, 100.0) - 30.86).abs() < f64::EPSILON);
        assert!((calculate_bmi(160.0, 45.0) - 17.58).abs() < f64::EPSILON);
    }

    #[test]
    fn test_result_has_two_decimal_precision() {
        let bmi = calculate_bmi(173.0, 71.3);
        assert!((bmi * 100.0 - (bmi * 100.0).round()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_taller_is_leaner_at_same_weight() {
        assert!(calculate_bmi(190.0, 80.0) < calculate_bmi(160.0, 80.0));
    }
}
