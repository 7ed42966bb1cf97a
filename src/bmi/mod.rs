// ABOUTME: BMI analysis engine composed of calculator, classifier, catalog and delegate
// ABOUTME: The orchestrator in analyzer.rs is the single entry point for routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! # BMI Analysis Engine
//!
//! The analysis pipeline behind the BMI endpoints:
//!
//! - [`calculator`]: pure metric BMI computation
//! - [`classifier`]: static band table mapping a BMI value to a category
//! - [`recommendations`]: static per-category advice catalog
//! - [`delegate`]: optional out-of-process classifier with strict fallback
//! - [`analyzer`]: orchestrator composing the above into `analyze(input)`
//!
//! The calculator, classifier, and catalog never suspend; the only await
//! points in an analysis are the delegate's process I/O.

pub mod analyzer;
pub mod calculator;
pub mod classifier;
pub mod delegate;
pub mod recommendations;

pub use analyzer::BmiAnalyzer;
pub use calculator::calculate_bmi;
pub use classifier::{category_code, classify, Classification};
pub use delegate::{ClassifierStrategy, DelegateOutcome, ProcessClassifier};
pub use recommendations::{recommendations_for, RecommendationSet};
