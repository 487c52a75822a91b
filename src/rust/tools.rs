// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tool entry points called by the conversational dispatch layer
//!
//! Both functions are `async` to fit an async caller; the work itself never
//! suspends. Internal failures are narrowed to [`ReasoningError`].

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::argument::ArgumentAnalyzer;
use crate::comparison::ComparisonEngine;
use crate::core::{ArgumentAnalysisResult, PhilosopherComparisonResult};
use crate::error::{narrow, ReasoningError};

/// Analyze an argument given its premises and conclusion
pub async fn analyze_argument<S: AsRef<str>>(
    premises: &[S],
    conclusion: &str,
) -> Result<ArgumentAnalysisResult, ReasoningError> {
    info!("Analyzing argument with {} premise(s)", premises.len());

    ArgumentAnalyzer::new()
        .analyze(premises, conclusion)
        .map_err(|e| narrow(e, ReasoningError::AnalysisFailed, "analyze_argument"))
}

/// Compare philosophers from the built-in knowledge base on a topic
pub async fn compare_philosophers<S: AsRef<str>>(
    philosophers: &[S],
    topic: &str,
) -> Result<PhilosopherComparisonResult, ReasoningError> {
    info!("Comparing {} philosopher(s) on '{}'", philosophers.len(), topic);

    ComparisonEngine::default()
        .compare(philosophers, topic)
        .map_err(|e| narrow(e, ReasoningError::ComparisonFailed, "compare_philosophers"))
}

/// Parsed arguments for [`analyze_argument`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentRequest {
    pub premises: Vec<String>,
    pub conclusion: String,
}

impl ArgumentRequest {
    pub async fn run(&self) -> Result<ArgumentAnalysisResult, ReasoningError> {
        analyze_argument(&self.premises, &self.conclusion).await
    }
}

/// Parsed arguments for [`compare_philosophers`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub philosophers: Vec<String>,
    pub topic: String,
}

impl ComparisonRequest {
    pub async fn run(&self) -> Result<PhilosopherComparisonResult, ReasoningError> {
        compare_philosophers(&self.philosophers, &self.topic).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_invalid_input() {
        let err = analyze_argument::<String>(&[], "x").await.unwrap_err();
        assert_eq!(err, ReasoningError::InvalidInput("No premises provided".to_string()));
    }

    #[tokio::test]
    async fn test_compare_invalid_input() {
        let err = compare_philosophers(&["Nobody"], "ethics").await.unwrap_err();
        assert_eq!(err.to_string(), "No valid philosophers provided");
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_requests_from_json() {
        let request: ArgumentRequest = serde_json::from_str(
            r#"{"premises": ["All men are mortal", "Socrates is a man"], "conclusion": "Socrates is mortal"}"#,
        )
        .unwrap();
        let result = request.run().await.unwrap();
        assert!(result.validity);

        let request: ComparisonRequest =
            serde_json::from_str(r#"{"philosophers": ["Plato", "Kant"], "topic": "metaphysics"}"#).unwrap();
        let result = request.run().await.unwrap();
        assert_eq!(result.differences.len(), 2);
    }
}
