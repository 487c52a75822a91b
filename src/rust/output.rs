// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output formatting module for CLI
//!
//! Provides JSON and pretty-printed text output with colors

use anyhow::Result;
use colored::Colorize;
use philo::{ArgumentAnalysisResult, PhilosopherComparisonResult, PhilosopherEntry};
use serde::Serialize;
use std::str::FromStr;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown output format '{}' (expected text or json)", other),
        }
    }
}

/// Output formatter for different output formats
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Output an error message
    pub fn error(&self, message: &str) -> Result<()> {
        self.message("error", message, |m| eprintln!("{}", m.red().bold()))
    }

    /// Output a warning message
    pub fn warning(&self, message: &str) -> Result<()> {
        self.message("warning", message, |m| println!("{}", m.yellow()))
    }

    /// Output an info message
    pub fn info(&self, message: &str) -> Result<()> {
        self.message("info", message, |m| println!("{}", m))
    }

    /// Output a section header
    pub fn header(&self, title: &str) -> Result<()> {
        self.message("header", title, |t| {
            println!("\n{}", t.bold().underline());
            println!("{}", "=".repeat(t.len()));
        })
    }

    /// Output a section title
    pub fn section(&self, title: &str) -> Result<()> {
        self.message("section", title, |t| println!("\n{}", t.cyan().bold()))
    }

    /// Output a result item
    pub fn result(&self, item: &str) -> Result<()> {
        self.message("result", item, |i| println!("{}", i))
    }

    /// Output an argument analysis
    pub fn output_analysis(&self, result: &ArgumentAnalysisResult) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                println!();
                println!("{}", result.analysis);
                println!();
                if result.validity {
                    println!("{}", "✓ Well-formed argument".green().bold());
                } else {
                    println!("{}", "✗ Missing premise or conclusion".red().bold());
                }
                for fallacy in &result.fallacies {
                    println!("  {} {}: {}", "⚠".yellow(), fallacy.name().yellow().bold(), fallacy.description().dimmed());
                }
            }
            OutputFormat::Json => self.output_json(result)?,
        }
        Ok(())
    }

    /// Output a philosopher comparison
    pub fn output_comparison(&self, result: &PhilosopherComparisonResult) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                println!();
                println!("{}", result.comparison.cyan().bold());
                println!();

                println!("{}", "Key Ideas".yellow().bold());
                for (name, ideas) in &result.key_ideas {
                    println!("  {}: {}", name.bright_blue(), ideas.join(", "));
                }

                if !result.differences.is_empty() {
                    println!();
                    println!("{}", "Differences".magenta().bold());
                    for difference in &result.differences {
                        println!("  - {}", difference);
                    }
                }

                if !result.similarities.is_empty() {
                    println!();
                    println!("{}", "Similarities".green().bold());
                    for similarity in &result.similarities {
                        println!("  - {}", similarity);
                    }
                }
                println!();
            }
            OutputFormat::Json => self.output_json(result)?,
        }
        Ok(())
    }

    /// Output one knowledge-base entry
    pub fn output_entry(&self, entry: &PhilosopherEntry) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                println!();
                println!("{} ({})", entry.name.cyan().bold(), entry.period.dimmed());
                println!("  {}", "Main ideas:".yellow());
                for (i, idea) in entry.main_ideas.iter().enumerate() {
                    println!("    {}. {}", i + 1, idea);
                }
                println!("  {} {}", "Ethics:".yellow(), entry.ethics);
                println!("  {} {}", "Metaphysics:".yellow(), entry.metaphysics);
                println!("  {} {}", "Epistemology:".yellow(), entry.epistemology);
                println!();
            }
            OutputFormat::Json => self.output_json(entry)?,
        }
        Ok(())
    }

    fn message(&self, level: &str, message: &str, text: impl FnOnce(&str)) -> Result<()> {
        match self.format {
            OutputFormat::Text => text(message),
            OutputFormat::Json => self.output_json(&JsonMessage { level, message })?,
        }
        Ok(())
    }

    /// Output JSON
    fn output_json<T: Serialize>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        println!("{}", json);
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonMessage<'a> {
    level: &'a str,
    message: &'a str,
}
