// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Compiled-in philosopher knowledge base
//!
//! A read-only table keyed by lowercase name. The process-wide instance is
//! built on first use and never changes afterwards.

use std::collections::HashMap;

use crate::core::PhilosopherEntry;

lazy_static::lazy_static! {
    static ref GLOBAL_KNOWLEDGE_BASE: KnowledgeBase = KnowledgeBase::builtin();
}

/// Immutable philosopher lookup table
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: HashMap<String, PhilosopherEntry>,
}

impl KnowledgeBase {
    /// The shared compiled-in table
    pub fn global() -> &'static KnowledgeBase {
        &GLOBAL_KNOWLEDGE_BASE
    }

    /// Build a table from explicit entries. Later duplicates replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = PhilosopherEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.name.to_lowercase(), entry))
            .collect();
        KnowledgeBase { entries }
    }

    /// Case-insensitive exact match on the full name
    pub fn lookup(&self, name: &str) -> Option<&PhilosopherEntry> {
        self.entries.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// All keys, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All entries, sorted by name
    pub fn entries(&self) -> Vec<&PhilosopherEntry> {
        let mut entries: Vec<&PhilosopherEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn builtin() -> Self {
        Self::from_entries(vec![
            PhilosopherEntry::new(
                "plato",
                &["Theory of Forms", "Immortality of the Soul", "The Republic"],
                "Virtue ethics based on knowledge of the Good",
                "Reality consists of perfect, unchanging Forms",
                "True knowledge comes from understanding the Forms",
                "Ancient Greek",
            ),
            PhilosopherEntry::new(
                "aristotle",
                &["Golden Mean", "Four Causes", "Logic"],
                "Virtue as the mean between extremes",
                "Form and matter are unified in substances",
                "Knowledge comes from empirical observation and logical reasoning",
                "Ancient Greek",
            ),
            PhilosopherEntry::new(
                "kant",
                &["Categorical Imperative", "Transcendental Idealism", "Critique of Pure Reason"],
                "Deontological ethics based on duty and universal laws",
                "Things-in-themselves are unknowable",
                "Knowledge requires both sensory experience and a priori categories",
                "Modern",
            ),
            PhilosopherEntry::new(
                "socrates",
                &["Socratic Method", "Virtue is Knowledge", "The Examined Life"],
                "No one does wrong knowingly; virtue is a kind of knowledge",
                "The soul is the true self and outlasts the body",
                "Wisdom begins in recognising one's own ignorance",
                "Ancient Greek",
            ),
            PhilosopherEntry::new(
                "descartes",
                &["Cogito, ergo sum", "Mind-Body Dualism", "Method of Doubt"],
                "Provisional morality guided by reason and firm resolution",
                "Mind and body are distinct substances",
                "Certain knowledge is built from clear and distinct ideas",
                "Modern",
            ),
            PhilosopherEntry::new(
                "hume",
                &["Problem of Induction", "Bundle Theory of the Self", "Is-Ought Gap"],
                "Morality is grounded in sentiment rather than reason",
                "Causation is constant conjunction, not observed necessity",
                "All ideas derive from sensory impressions",
                "Modern",
            ),
            PhilosopherEntry::new(
                "nietzsche",
                &["Will to Power", "Eternal Recurrence", "Death of God"],
                "Revaluation of values beyond good and evil",
                "Becoming rather than being; no world behind appearances",
                "Perspectivism: there are no facts, only interpretations",
                "Late Modern",
            ),
        ])
    }
}
