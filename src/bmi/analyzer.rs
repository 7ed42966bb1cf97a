// ABOUTME: Analysis orchestrator composing calculator, classifier, catalog and delegate
// ABOUTME: Two-state fallback chain, no retries; persistence is the caller's concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! Analysis orchestrator
//!
//! [`BmiAnalyzer::analyze`] is the single entry point routes call. It
//! validates the input, attempts the configured delegate, and falls back to
//! the in-process calculation. The orchestrator is stateless apart from the
//! optional strategy handle, so one instance serves unlimited concurrent
//! requests without locking.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::delegate::{ClassifierStrategy, DelegateOutcome};
use super::{calculate_bmi, category_code, classify, recommendations_for};
use crate::errors::{AppError, AppResult};
use crate::models::{AnalysisMethod, BmiAnalysis, BmiAnalysisResult, BmiInput};

/// Orchestrates the BMI analysis pipeline
pub struct BmiAnalyzer {
    strategy: Option<Arc<dyn ClassifierStrategy>>,
}

impl BmiAnalyzer {
    /// Analyzer with no delegate: every analysis is the standard calculation
    #[must_use]
    pub const fn standard_only() -> Self {
        Self { strategy: None }
    }

    /// Analyzer that tries the given delegate before falling back
    #[must_use]
    pub fn with_strategy(strategy: Arc<dyn ClassifierStrategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Run one analysis
    ///
    /// Exactly one delegate attempt per call, no retries. A delegate payload
    /// is authoritative only if it carries no `error` field; otherwise the
    /// standard calculation produces the result and `method` says so.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when height or weight is not positive.
    /// Delegate unavailability is absorbed and never an error.
    pub async fn analyze(&self, input: &BmiInput) -> AppResult<BmiAnalysis> {
        if input.height_cm <= 0.0 || input.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Invalid height or weight values"));
        }

        if let Some(strategy) = &self.strategy {
            if let DelegateOutcome::Success(payload) = strategy.try_classify(input).await {
                if payload.get("error").is_none() {
                    return Ok(BmiAnalysis::Delegated(Self::merge_delegate_payload(
                        payload,
                    )));
                }
                debug!(
                    delegate = strategy.name(),
                    "delegate reported an error, falling back"
                );
            }
        }

        Ok(BmiAnalysis::Standard(Self::standard_result(input)))
    }

    /// Merge `recommendations` and the method tag into a delegate payload
    ///
    /// All other fields pass through untouched; `recommendations` and
    /// `method` are overwritten if the delegate supplied its own.
    fn merge_delegate_payload(payload: Value) -> Value {
        let mut map = match payload {
            Value::Object(map) => map,
            // Strategies only emit objects; anything else merges as empty
            _ => serde_json::Map::new(),
        };

        let category = map
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let recommendations =
            serde_json::to_value(recommendations_for(category)).unwrap_or_default();

        map.insert("recommendations".to_owned(), recommendations);
        map.insert(
            "method".to_owned(),
            Value::String(AnalysisMethod::AiClassifier.as_str().to_owned()),
        );
        Value::Object(map)
    }

    /// Build the full standard-calculation envelope
    fn standard_result(input: &BmiInput) -> BmiAnalysisResult {
        let bmi = calculate_bmi(input.height_cm, input.weight_kg);
        let classification = classify(bmi);
        BmiAnalysisResult {
            bmi,
            category: classification.category,
            category_code: category_code(classification.category),
            label: classification.label,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            age: input.age,
            gender: input.gender,
            recommendations: recommendations_for(classification.category),
            method: AnalysisMethod::StandardCalculation,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::Gender;
    use async_trait::async_trait;

    struct FixedStrategy(DelegateOutcome);

    #[async_trait]
    impl ClassifierStrategy for FixedStrategy {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn try_classify(&self, _input: &BmiInput) -> DelegateOutcome {
            self.0.clone()
        }
    }

    fn sample_input() -> BmiInput {
        BmiInput::new(165.0, 80.0, Some(30), Some(Gender::Female))
    }

    #[tokio::test]
    async fn test_non_positive_input_is_rejected() {
        let analyzer = BmiAnalyzer::standard_only();
        for (height, weight) in [(0.0, 70.0), (170.0, 0.0), (-170.0, 70.0), (170.0, -1.0)] {
            let err = analyzer
                .analyze(&BmiInput::new(height, weight, None, None))
                .await
                .unwrap_err();
            assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
        }
    }

    #[tokio::test]
    async fn test_standard_fallback_envelope() {
        let analyzer = BmiAnalyzer::standard_only();
        let analysis = analyzer.analyze(&sample_input()).await.unwrap();

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["method"], "standard_calculation");
        assert_eq!(json["category"], "overweight");
        assert_eq!(json["bmi"], 29.38);
        assert_eq!(json["category_code"], 2);
        assert_eq!(json["height_cm"], 165.0);
        assert_eq!(json["weight_kg"], 80.0);
        assert_eq!(json["age"], 30);
        assert_eq!(json["gender"], "female");
        assert_eq!(json["recommendations"]["diet"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_standard_envelope_nulls_absent_optionals() {
        let analyzer = BmiAnalyzer::standard_only();
        let analysis = analyzer
            .analyze(&BmiInput::new(170.0, 70.0, None, None))
            .await
            .unwrap();

        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json["age"].is_null());
        assert!(json["gender"].is_null());
        assert_eq!(json["bmi"], 24.22);
    }

    #[tokio::test]
    async fn test_delegate_payload_is_authoritative() {
        let delegate_payload = serde_json::json!({
            "bmi": 29.38,
            "category": "Overweight",
            "category_code": 2,
            "confidence": 0.93
        });
        let analyzer = BmiAnalyzer::with_strategy(Arc::new(FixedStrategy(
            DelegateOutcome::Success(delegate_payload),
        )));

        let analysis = analyzer.analyze(&sample_input()).await.unwrap();
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["method"], "ai_classifier");
        // Opaque fields pass through untouched
        assert_eq!(json["confidence"], 0.93);
        assert_eq!(json["category"], "Overweight");
        // Label-form category is not a catalog key, so the normal set applies
        assert_eq!(
            json["recommendations"]["diet"][0],
            "Maintain a balanced diet with all food groups"
        );
    }

    #[tokio::test]
    async fn test_delegate_error_payload_falls_back() {
        let analyzer = BmiAnalyzer::with_strategy(Arc::new(FixedStrategy(
            DelegateOutcome::Success(serde_json::json!({ "error": "model not loaded" })),
        )));

        let analysis = analyzer.analyze(&sample_input()).await.unwrap();
        assert_eq!(analysis.method(), AnalysisMethod::StandardCalculation);
    }

    #[tokio::test]
    async fn test_unavailable_delegate_falls_back() {
        let analyzer =
            BmiAnalyzer::with_strategy(Arc::new(FixedStrategy(DelegateOutcome::Unavailable)));

        let analysis = analyzer.analyze(&sample_input()).await.unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["method"], "standard_calculation");
        assert_eq!(json["bmi"], 29.38);
    }

    #[tokio::test]
    async fn test_delegate_method_tag_is_overwritten() {
        let analyzer = BmiAnalyzer::with_strategy(Arc::new(FixedStrategy(
            DelegateOutcome::Success(serde_json::json!({
                "category": "normal",
                "method": "something_else"
            })),
        )));

        let analysis = analyzer.analyze(&sample_input()).await.unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["method"], "ai_classifier");
    }
}
