// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core types shared by the argument and comparison pipelines

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Topic a philosopher comparison can be asked about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Ethics,
    Metaphysics,
    Epistemology,
    Period,
}

impl Topic {
    pub fn all() -> Vec<Topic> {
        vec![Topic::Ethics, Topic::Metaphysics, Topic::Epistemology, Topic::Period]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Topic::Ethics => "ethics",
            Topic::Metaphysics => "metaphysics",
            Topic::Epistemology => "epistemology",
            Topic::Period => "period",
        }
    }
}

impl std::str::FromStr for Topic {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ethics" => Ok(Topic::Ethics),
            "metaphysics" => Ok(Topic::Metaphysics),
            "epistemology" => Ok(Topic::Epistemology),
            "period" => Ok(Topic::Period),
            _ => Err(anyhow::anyhow!("Unknown topic: {}", s)),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Shape of an argument, decided by premise count alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgumentStructure {
    /// Exactly one premise
    #[serde(rename = "Simple argument")]
    Simple,

    /// Exactly two premises
    #[serde(rename = "Standard syllogism")]
    StandardSyllogism,

    /// Three or more premises
    #[serde(rename = "Complex argument")]
    Complex,
}

impl ArgumentStructure {
    /// Classify by number of premises. Zero is treated like one; callers
    /// reject empty premise lists before classifying.
    pub fn from_premise_count(count: usize) -> Self {
        match count {
            0 | 1 => ArgumentStructure::Simple,
            2 => ArgumentStructure::StandardSyllogism,
            _ => ArgumentStructure::Complex,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArgumentStructure::Simple => "Simple argument",
            ArgumentStructure::StandardSyllogism => "Standard syllogism",
            ArgumentStructure::Complex => "Complex argument",
        }
    }
}

impl fmt::Display for ArgumentStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Informal fallacies recognised by keyword heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum Fallacy {
    #[serde(rename = "Hasty generalization")]
    HastyGeneralization,

    #[serde(rename = "Appeal to authority")]
    AppealToAuthority,

    #[serde(rename = "Non sequitur")]
    NonSequitur,
}

impl Fallacy {
    pub fn name(&self) -> &'static str {
        match self {
            Fallacy::HastyGeneralization => "Hasty generalization",
            Fallacy::AppealToAuthority => "Appeal to authority",
            Fallacy::NonSequitur => "Non sequitur",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Fallacy::HastyGeneralization => "Draws a universal claim from insufficient cases",
            Fallacy::AppealToAuthority => "Rests the claim on who asserts it rather than on evidence",
            Fallacy::NonSequitur => "The conclusion does not follow from the stated premises",
        }
    }
}

impl fmt::Display for Fallacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of the philosopher knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhilosopherEntry {
    /// Lowercase lookup key
    pub name: String,

    /// Main ideas, in display order
    pub main_ideas: Vec<String>,

    pub ethics: String,
    pub metaphysics: String,
    pub epistemology: String,

    /// Historical period label, e.g. "Ancient Greek"
    pub period: String,
}

impl PhilosopherEntry {
    pub fn new(
        name: &str,
        main_ideas: &[&str],
        ethics: &str,
        metaphysics: &str,
        epistemology: &str,
        period: &str,
    ) -> Self {
        PhilosopherEntry {
            name: name.to_lowercase(),
            main_ideas: main_ideas.iter().map(|s| s.to_string()).collect(),
            ethics: ethics.to_string(),
            metaphysics: metaphysics.to_string(),
            epistemology: epistemology.to_string(),
            period: period.to_string(),
        }
    }

    /// The entry's position on a topic
    pub fn topic_value(&self, topic: Topic) -> &str {
        match topic {
            Topic::Ethics => &self.ethics,
            Topic::Metaphysics => &self.metaphysics,
            Topic::Epistemology => &self.epistemology,
            Topic::Period => &self.period,
        }
    }
}

/// Outcome of analysing one argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentAnalysisResult {
    /// Surface well-formedness, not logical soundness
    pub validity: bool,
    pub structure: ArgumentStructure,

    /// Rendered narrative for display
    pub analysis: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallacies: Vec<Fallacy>,
}

/// Outcome of comparing philosophers on a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhilosopherComparisonResult {
    /// Summary line naming the matched philosophers and the topic
    pub comparison: String,
    pub similarities: Vec<String>,
    pub differences: Vec<String>,

    /// Main ideas keyed by the name exactly as the caller spelled it
    pub key_ideas: BTreeMap<String, Vec<String>>,
}
