// ABOUTME: Static BMI category band table and range-lookup classification
// ABOUTME: Band boundaries are frozen for wire compatibility, gaps included
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! BMI classifier
//!
//! Maps a BMI value to a category via a fixed band table. The table is the
//! one deployed clients and stored history were built against, so its exact
//! boundaries are load-bearing:
//!
//! - values strictly between 24.9 and 25.0, or between 29.9 and 30.0, match
//!   no band and classify as `unknown` (a known quirk; closing the gaps
//!   would silently reinterpret stored history)
//! - a value on a shared boundary belongs to the higher band: exactly 18.5
//!   is `normal`, not `underweight`

use serde::Serialize;

/// One contiguous BMI range mapped to a category
#[derive(Debug, Clone, Copy)]
pub struct CategoryBand {
    /// Stable category key used in wire payloads and catalog lookups
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Lower bound, inclusive
    pub min_inclusive: f64,
    /// Upper bound, inclusive
    pub max_inclusive: f64,
}

/// Category returned when no band matches
pub const UNKNOWN_CATEGORY: &str = "unknown";
/// Label returned when no band matches
pub const UNKNOWN_LABEL: &str = "Unknown";

/// The classification band table, ordered by ascending range
///
/// No mutation API exists; the table is fixed for the life of the process.
pub const CATEGORY_BANDS: [CategoryBand; 4] = [
    CategoryBand {
        key: "underweight",
        label: "Underweight",
        min_inclusive: 0.0,
        max_inclusive: 18.5,
    },
    CategoryBand {
        key: "normal",
        label: "Normal weight",
        min_inclusive: 18.5,
        max_inclusive: 24.9,
    },
    CategoryBand {
        key: "overweight",
        label: "Overweight",
        min_inclusive: 25.0,
        max_inclusive: 29.9,
    },
    CategoryBand {
        key: "obese",
        label: "Obese",
        min_inclusive: 30.0,
        max_inclusive: f64::INFINITY,
    },
];

/// Result of classifying a BMI value
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Classification {
    /// Band key, or `unknown` when no band matched
    pub category: &'static str,
    /// Band label, or `Unknown` when no band matched
    pub label: &'static str,
    /// The classified BMI value, unchanged
    pub bmi: f64,
}

/// Classify a BMI value against [`CATEGORY_BANDS`]
///
/// Bands are checked highest first so a value on a shared boundary lands in
/// the higher band. Values the table does not cover return the `unknown`
/// classification; this function never fails.
#[must_use]
pub fn classify(bmi: f64) -> Classification {
    for band in CATEGORY_BANDS.iter().rev() {
        if bmi >= band.min_inclusive && bmi <= band.max_inclusive {
            return Classification {
                category: band.key,
                label: band.label,
                bmi,
            };
        }
    }
    Classification {
        category: UNKNOWN_CATEGORY,
        label: UNKNOWN_LABEL,
        bmi,
    }
}

/// Zero-based index of a category key in the band table
///
/// Returns `-1` for anything that is not a band key, including `unknown`.
/// The `-1` reaches the wire as `category_code` and clients check for it.
#[must_use]
pub fn category_code(category: &str) -> i32 {
    CATEGORY_BANDS
        .iter()
        .position(|band| band.key == category)
        .and_then(|idx| i32::try_from(idx).ok())
        .unwrap_or(-1)
}
