// ABOUTME: External classifier delegate behind a pluggable strategy trait
// ABOUTME: Every failure mode resolves to Unavailable, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlog Contributors

//! External classifier delegate
//!
//! An optional out-of-process classifier can take over BMI classification.
//! Its contract is strict: the delegate receives the JSON-serialized input
//! as one positional argument, must print a single JSON object to stdout and
//! exit 0. Anything else (missing script, spawn failure, non-zero exit,
//! malformed output, timeout) resolves to
//! [`DelegateOutcome::Unavailable`] and the caller falls back to the
//! in-process calculation. Delegate trouble never surfaces as an error.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::models::BmiInput;

/// Default time budget for one delegate invocation
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Outcome of a delegate classification attempt
///
/// Two states only: either the delegate produced a payload, or it is
/// unavailable. There is no error state; the fallback contract absorbs
/// every failure mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegateOutcome {
    /// The delegate printed a JSON object and exited 0
    Success(serde_json::Value),
    /// The delegate is absent, failed, timed out, or emitted garbage
    Unavailable,
}

/// A pluggable classification strategy
///
/// The orchestrator only knows this trait; the process-based delegate is
/// one implementation, test doubles are another. Implementations must not
/// fail: any internal problem maps to [`DelegateOutcome::Unavailable`].
#[async_trait]
pub trait ClassifierStrategy: Send + Sync {
    /// Identifier used in logs
    fn name(&self) -> &'static str;

    /// Attempt a classification, absorbing all failures
    async fn try_classify(&self, input: &BmiInput) -> DelegateOutcome;
}

/// Process-based classifier strategy
///
/// Spawns `<command> <script> <json-input>` per call, accumulates stdout
/// and stderr fully, then parses. The child is disposable and killed when
/// the time budget expires.
pub struct ProcessClassifier {
    command: String,
    script_path: PathBuf,
    timeout: Duration,
}

impl ProcessClassifier {
    /// Create a classifier for the given interpreter command and script path
    pub fn new(command: impl Into<String>, script_path: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            script_path: script_path.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the per-invocation time budget
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ClassifierStrategy for ProcessClassifier {
    fn name(&self) -> &'static str {
        "process"
    }

    async fn try_classify(&self, input: &BmiInput) -> DelegateOutcome {
        // Absent script means no spawn at all
        if !tokio::fs::try_exists(&self.script_path).await.unwrap_or(false) {
            debug!(
                script = %self.script_path.display(),
                "external classifier script not found, falling back"
            );
            return DelegateOutcome::Unavailable;
        }

        let Ok(payload) = serde_json::to_string(input) else {
            return DelegateOutcome::Unavailable;
        };

        let mut command = TokioCommand::new(&self.command);
        command
            .arg(&self.script_path)
            .arg(&payload)
            .kill_on_drop(true);

        let output = match timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                warn!(command = %self.command, "external classifier spawn failed: {e}");
                return DelegateOutcome::Unavailable;
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.timeout.as_secs(),
                    "external classifier timed out, falling back"
                );
                return DelegateOutcome::Unavailable;
            }
        };

        if !output.status.success() {
            debug!(
                code = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr),
                "external classifier exited non-zero, falling back"
            );
            return DelegateOutcome::Unavailable;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        match serde_json::from_str::<serde_json::Value>(stdout.trim()) {
            Ok(value) if value.is_object() => DelegateOutcome::Success(value),
            Ok(_) => {
                debug!("external classifier produced non-object JSON, falling back");
                DelegateOutcome::Unavailable
            }
            Err(e) => {
                debug!("external classifier output was not JSON: {e}");
                DelegateOutcome::Unavailable
            }
        }
    }
}
