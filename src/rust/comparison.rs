// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Philosopher comparison against the knowledge base

use anyhow::{anyhow, Result};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

use crate::core::{PhilosopherComparisonResult, PhilosopherEntry, Topic};
use crate::error::ReasoningError;
use crate::knowledge::KnowledgeBase;

/// Compares philosophers over a borrowed knowledge base
#[derive(Debug, Clone, Copy)]
pub struct ComparisonEngine<'kb> {
    knowledge: &'kb KnowledgeBase,
}

impl Default for ComparisonEngine<'static> {
    fn default() -> Self {
        ComparisonEngine::new(KnowledgeBase::global())
    }
}

impl<'kb> ComparisonEngine<'kb> {
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        ComparisonEngine { knowledge }
    }

    pub fn knowledge(&self) -> &'kb KnowledgeBase {
        self.knowledge
    }

    /// Compare `philosophers` on `topic`.
    ///
    /// Unknown names are dropped. Fails with [`ReasoningError::InvalidInput`]
    /// when none of the names resolve. An unknown topic yields no
    /// difference statements rather than an error.
    pub fn compare<S: AsRef<str>>(&self, philosophers: &[S], topic: &str) -> Result<PhilosopherComparisonResult> {
        let matched: Vec<&str> = philosophers
            .iter()
            .map(|p| p.as_ref())
            .filter(|name| {
                let known = self.knowledge.contains(name);
                if !known {
                    warn!("Dropping unknown philosopher: {}", name);
                }
                known
            })
            .collect();

        if matched.is_empty() {
            return Err(ReasoningError::no_valid_philosophers().into());
        }

        let resolved_topic = topic.parse::<Topic>().ok();
        if resolved_topic.is_none() {
            debug!("Topic '{}' is not a comparable field", topic);
        }

        let mut key_ideas = BTreeMap::new();
        let mut differences = Vec::new();
        let mut entries: Vec<&PhilosopherEntry> = Vec::with_capacity(matched.len());

        for name in &matched {
            let entry = self
                .knowledge
                .lookup(name)
                .ok_or_else(|| anyhow!("Philosopher '{}' vanished from the knowledge base", name))?;

            key_ideas.insert(name.to_string(), entry.main_ideas.clone());

            if let Some(topic_kind) = resolved_topic {
                let value = entry.topic_value(topic_kind);
                if !value.is_empty() {
                    differences.push(format!("{}'s view on {}: {}", name, topic, value));
                }
            }

            entries.push(entry);
        }

        let similarities = shared_period(&entries).into_iter().collect();

        debug!(
            "Compared {} of {} philosopher(s) on '{}'",
            matched.len(),
            philosophers.len(),
            topic
        );

        Ok(PhilosopherComparisonResult {
            comparison: format!("Comparison of {} on {}", enumerate_names(&matched), topic),
            similarities,
            differences,
            key_ideas,
        })
    }
}

/// Similarity statement when two or more entries share one period
fn shared_period(entries: &[&PhilosopherEntry]) -> Option<String> {
    if entries.len() < 2 {
        return None;
    }

    let periods: BTreeSet<&str> = entries.iter().map(|e| e.period.as_str()).collect();
    if periods.len() != 1 {
        return None;
    }

    let period = periods.into_iter().next()?;
    Some(if entries.len() == 2 {
        format!("Both philosophers are from the {} period", period)
    } else {
        format!("All {} philosophers are from the {} period", entries.len(), period)
    })
}

/// "A", "A and B", "A, B and C"
fn enumerate_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
