// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! PHILO: rule-based argument analysis and philosopher comparison
//!
//! Two independent, side-effect-free pipelines over one compiled-in
//! philosopher table. The async entry points live in [`tools`].

pub mod core;
pub mod error;
pub mod knowledge;
pub mod argument;
pub mod comparison;
pub mod tools;

pub use self::core::{
    ArgumentAnalysisResult, ArgumentStructure, Fallacy, PhilosopherComparisonResult,
    PhilosopherEntry, Topic,
};
pub use error::ReasoningError;
pub use knowledge::KnowledgeBase;
pub use argument::ArgumentAnalyzer;
pub use comparison::ComparisonEngine;
pub use tools::{analyze_argument, compare_philosophers, ArgumentRequest, ComparisonRequest};
