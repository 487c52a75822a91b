// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Common test utilities for the PHILO test suite

#![allow(dead_code)]

use philo::{ArgumentAnalysisResult, PhilosopherComparisonResult, PhilosopherEntry};

/// The classic Socrates syllogism
pub fn socrates_syllogism() -> (Vec<String>, String) {
    (
        vec!["All men are mortal".to_string(), "Socrates is a man".to_string()],
        "Socrates is mortal".to_string(),
    )
}

/// Owned premise list from string literals
pub fn premises(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A throwaway entry with the given period
pub fn entry(name: &str, period: &str) -> PhilosopherEntry {
    PhilosopherEntry::new(
        name,
        &["First idea", "Second idea"],
        &format!("{} ethics", name),
        &format!("{} metaphysics", name),
        &format!("{} epistemology", name),
        period,
    )
}

/// Assert the fallacy labels of a result, in order
pub fn assert_fallacies(result: &ArgumentAnalysisResult, expected: &[&str]) {
    let labels: Vec<&str> = result.fallacies.iter().map(|f| f.name()).collect();
    pretty_assertions::assert_eq!(labels, expected.to_vec());
}

/// Assert that the key-idea mapping has exactly these names
pub fn assert_key_idea_names(result: &PhilosopherComparisonResult, expected: &[&str]) {
    let mut names: Vec<&str> = result.key_ideas.keys().map(String::as_str).collect();
    names.sort_unstable();
    let mut expected = expected.to_vec();
    expected.sort_unstable();
    pretty_assertions::assert_eq!(names, expected);
}
