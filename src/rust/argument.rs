// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Argument analysis
//!
//! Classifies an argument by premise count, checks that every part is
//! present, and flags informal fallacies through fixed trigger phrases.
//! Nothing here parses or interprets the sentences themselves.

use anyhow::{Context, Result};
use std::fmt::Write;
use tracing::debug;

use crate::core::{ArgumentAnalysisResult, ArgumentStructure, Fallacy};
use crate::error::ReasoningError;

/// Extra condition a fallacy rule places on the premise count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiseCondition {
    Any,
    /// Fires only with strictly fewer premises than this
    FewerThan(usize),
}

impl PremiseCondition {
    fn holds(&self, premise_count: usize) -> bool {
        match self {
            PremiseCondition::Any => true,
            PremiseCondition::FewerThan(limit) => premise_count < *limit,
        }
    }
}

/// Keyword signature for one fallacy
#[derive(Debug, Clone, Copy)]
pub struct FallacyRule {
    pub fallacy: Fallacy,
    /// Lowercase phrases; any one of them triggers the rule
    pub triggers: &'static [&'static str],
    pub condition: PremiseCondition,
}

impl FallacyRule {
    fn matches(&self, lowered_text: &str, premise_count: usize) -> bool {
        self.condition.holds(premise_count)
            && self.triggers.iter().any(|t| lowered_text.contains(t))
    }
}

/// Rule order is output order.
const FALLACY_RULES: &[FallacyRule] = &[
    FallacyRule {
        fallacy: Fallacy::HastyGeneralization,
        triggers: &["everyone", "all people"],
        condition: PremiseCondition::Any,
    },
    FallacyRule {
        fallacy: Fallacy::AppealToAuthority,
        triggers: &["because i said", "experts say"],
        condition: PremiseCondition::Any,
    },
    FallacyRule {
        fallacy: Fallacy::NonSequitur,
        triggers: &["therefore"],
        condition: PremiseCondition::FewerThan(2),
    },
];

/// Stateless argument analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentAnalyzer;

impl ArgumentAnalyzer {
    pub fn new() -> Self {
        ArgumentAnalyzer
    }

    /// The fixed fallacy signatures, in detection order
    pub fn fallacy_rules(&self) -> &'static [FallacyRule] {
        FALLACY_RULES
    }

    /// Run the full pipeline: precondition, validity, structure, fallacies, narrative.
    ///
    /// Fails with [`ReasoningError::InvalidInput`] when `premises` is empty.
    pub fn analyze<S: AsRef<str>>(&self, premises: &[S], conclusion: &str) -> Result<ArgumentAnalysisResult> {
        if premises.is_empty() {
            return Err(ReasoningError::no_premises().into());
        }

        let validity = Self::is_valid(premises, conclusion);
        let structure = ArgumentStructure::from_premise_count(premises.len());
        let fallacies = self.detect_fallacies(premises, conclusion);

        debug!(
            "Analyzed argument: {} premise(s), structure={}, valid={}, fallacies={}",
            premises.len(),
            structure,
            validity,
            fallacies.len()
        );

        let analysis = format_analysis(premises, conclusion, structure, validity, &fallacies)
            .context("Failed to render argument narrative")?;

        Ok(ArgumentAnalysisResult {
            validity,
            structure,
            analysis,
            fallacies,
        })
    }

    /// Surface well-formedness: every premise and the conclusion are non-empty
    pub fn is_valid<S: AsRef<str>>(premises: &[S], conclusion: &str) -> bool {
        premises.iter().all(|p| !p.as_ref().is_empty()) && !conclusion.is_empty()
    }

    /// Scan premises and conclusion, joined by spaces, for fallacy signatures
    pub fn detect_fallacies<S: AsRef<str>>(&self, premises: &[S], conclusion: &str) -> Vec<Fallacy> {
        let text = premises
            .iter()
            .map(|p| p.as_ref())
            .chain(std::iter::once(conclusion))
            .collect::<Vec<&str>>()
            .join(" ")
            .to_lowercase();

        FALLACY_RULES
            .iter()
            .filter(|rule| rule.matches(&text, premises.len()))
            .map(|rule| rule.fallacy)
            .collect()
    }
}

/// Render the narrative shown to the user
fn format_analysis<S: AsRef<str>>(
    premises: &[S],
    conclusion: &str,
    structure: ArgumentStructure,
    validity: bool,
    fallacies: &[Fallacy],
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Premises:")?;
    for (i, premise) in premises.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, premise.as_ref())?;
    }
    writeln!(out, "Conclusion: {}", conclusion)?;
    writeln!(out)?;
    writeln!(out, "Analysis:")?;
    writeln!(out, "- Structure: {}", structure)?;
    writeln!(out, "- Validity: {}", if validity { "Valid" } else { "Invalid" })?;
    if !fallacies.is_empty() {
        let names: Vec<&str> = fallacies.iter().map(Fallacy::name).collect();
        writeln!(out, "- Potential fallacies: {}", names.join(", "))?;
    }
    writeln!(out)?;
    write!(
        out,
        "{}",
        if validity {
            "The argument follows logical form."
        } else {
            "The argument may need restructuring."
        }
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(premises: &[&str], conclusion: &str) -> ArgumentAnalysisResult {
        ArgumentAnalyzer::new().analyze(premises, conclusion).unwrap()
    }

    #[test]
    fn test_empty_premises_rejected() {
        let err = ArgumentAnalyzer::new().analyze::<&str>(&[], "x").unwrap_err();
        let err = err.downcast::<ReasoningError>().unwrap();
        assert_eq!(err, ReasoningError::no_premises());
    }

    #[test]
    fn test_validity() {
        assert!(analyze(&["All men are mortal", "Socrates is a man"], "Socrates is mortal").validity);
        assert!(!analyze(&["All men are mortal", ""], "Socrates is mortal").validity);
        assert!(!analyze(&["All men are mortal"], "").validity);
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        assert!(analyze(&[" "], " ").validity);
    }

    #[test]
    fn test_structure() {
        assert_eq!(analyze(&["a"], "c").structure, ArgumentStructure::Simple);
        assert_eq!(analyze(&["a", "b"], "c").structure, ArgumentStructure::StandardSyllogism);
        assert_eq!(analyze(&["a", "b", "d"], "c").structure, ArgumentStructure::Complex);
    }

    #[test]
    fn test_hasty_generalization() {
        let result = analyze(&["Everyone agrees"], "So it's true");
        assert_eq!(result.fallacies, vec![Fallacy::HastyGeneralization]);

        let result = analyze(&["All people like cake", "Cake is food"], "Food is liked");
        assert_eq!(result.fallacies, vec![Fallacy::HastyGeneralization]);
    }

    #[test]
    fn test_appeal_to_authority() {
        let result = analyze(&["It is so Because I said so", "x"], "It is so");
        assert_eq!(result.fallacies, vec![Fallacy::AppealToAuthority]);

        let result = analyze(&["Experts say coffee is healthy", "x"], "Drink coffee");
        assert_eq!(result.fallacies, vec![Fallacy::AppealToAuthority]);
    }

    #[test]
    fn test_non_sequitur_needs_single_premise() {
        assert_eq!(analyze(&["P"], "Therefore Q").fallacies, vec![Fallacy::NonSequitur]);
        assert!(analyze(&["P", "R"], "Therefore Q").fallacies.is_empty());
    }

    #[test]
    fn test_multiple_fallacies_in_rule_order() {
        let result = analyze(&["Experts say everyone knows"], "therefore it is true");
        assert_eq!(
            result.fallacies,
            vec![
                Fallacy::HastyGeneralization,
                Fallacy::AppealToAuthority,
                Fallacy::NonSequitur
            ]
        );
    }

    #[test]
    fn test_trigger_can_span_premise_boundary() {
        // premises are joined with a single space before scanning
        let result = analyze(&["all", "people are here"], "fine");
        assert_eq!(result.fallacies, vec![Fallacy::HastyGeneralization]);
    }

    #[test]
    fn test_narrative_contents() {
        let result = analyze(&["Everyone agrees", "So do I"], "");
        let text = &result.analysis;

        assert!(text.contains("1. Everyone agrees"));
        assert!(text.contains("2. So do I"));
        assert!(text.contains("- Structure: Standard syllogism"));
        assert!(text.contains("- Validity: Invalid"));
        assert!(text.contains("- Potential fallacies: Hasty generalization"));
        assert!(text.ends_with("The argument may need restructuring."));

        let premises = text.find("Premises:").unwrap();
        let conclusion = text.find("Conclusion:").unwrap();
        let structure = text.find("- Structure:").unwrap();
        let validity = text.find("- Validity:").unwrap();
        assert!(premises < conclusion && conclusion < structure && structure < validity);
    }

    #[test]
    fn test_narrative_without_fallacies() {
        let result = analyze(&["A", "B"], "C");
        assert!(!result.analysis.contains("Potential fallacies"));
        assert!(result.analysis.ends_with("The argument follows logical form."));
    }

    #[test]
    fn test_rules_exposed_in_order() {
        let rules = ArgumentAnalyzer::new().fallacy_rules();
        let order: Vec<Fallacy> = rules.iter().map(|r| r.fallacy).collect();
        assert_eq!(
            order,
            vec![
                Fallacy::HastyGeneralization,
                Fallacy::AppealToAuthority,
                Fallacy::NonSequitur
            ]
        );
    }
}
