// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error surface of the reasoning tools
//!
//! Callers see exactly two tiers: a rejected request (`InvalidInput`) or an
//! opaque per-operation failure. Internal causes are logged, never carried.

use thiserror::Error;

/// Errors returned by [`crate::tools`] entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReasoningError {
    /// The request failed a structural precondition.
    ///
    /// Raised before any computation starts; no partial result exists.
    #[error("{0}")]
    InvalidInput(String),

    /// Argument analysis hit an unexpected internal fault
    #[error("Failed to analyze argument")]
    AnalysisFailed,

    /// Philosopher comparison hit an unexpected internal fault
    #[error("Failed to compare philosophers")]
    ComparisonFailed,
}

impl ReasoningError {
    pub const NO_PREMISES: &'static str = "No premises provided";
    pub const NO_VALID_PHILOSOPHERS: &'static str = "No valid philosophers provided";

    pub fn no_premises() -> Self {
        ReasoningError::InvalidInput(Self::NO_PREMISES.to_string())
    }

    pub fn no_valid_philosophers() -> Self {
        ReasoningError::InvalidInput(Self::NO_VALID_PHILOSOPHERS.to_string())
    }

    /// True for caller mistakes, false for internal failures
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ReasoningError::InvalidInput(_))
    }
}

/// Narrow an internal pipeline error to the stable two-tier surface.
///
/// `InvalidInput` passes through; anything else collapses to `fallback`.
pub(crate) fn narrow(err: anyhow::Error, fallback: ReasoningError, operation: &str) -> ReasoningError {
    match err.downcast::<ReasoningError>() {
        Ok(ReasoningError::InvalidInput(msg)) => ReasoningError::InvalidInput(msg),
        Ok(other) => {
            tracing::error!("Error in {}: {}", operation, other);
            fallback
        }
        Err(cause) => {
            tracing::error!("Error in {}: {:#}", operation, cause);
            fallback
        }
    }
}
