// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! PHILO CLI - Main binary entry point
//!
//! Provides one-shot commands and a REPL over the argument analyzer and the
//! philosopher comparison engine

use anyhow::Result;
use clap::{Parser, Subcommand};
use philo::{ArgumentAnalyzer, KnowledgeBase, ReasoningError, Topic};
use tracing::info;

mod output;
mod repl;

use output::{OutputFormat, OutputFormatter};

/// PHILO - rule-based argument analysis and philosopher comparison
#[derive(Parser)]
#[command(name = "philo")]
#[command(version, about, long_about = None)]
#[command(author = "Philo Project Team")]
struct Cli {
    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the structure and surface validity of an argument
    Analyze {
        /// Premise (repeat for each premise, in order)
        #[arg(short, long = "premise")]
        premises: Vec<String>,

        /// Conclusion of the argument
        #[arg(short, long)]
        conclusion: String,
    },

    /// Compare philosophers on a topic
    Compare {
        /// Philosopher names (case-insensitive)
        #[arg(required = true)]
        philosophers: Vec<String>,

        /// Topic: ethics, metaphysics, epistemology or period
        #[arg(short, long)]
        topic: String,
    },

    /// List philosophers in the knowledge base
    Philosophers {
        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show the knowledge-base entry for one philosopher
    Info {
        /// Philosopher name
        name: String,
    },

    /// List the fallacy signatures the analyzer checks
    Fallacies,

    /// Start interactive REPL mode
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Disable colors if requested
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Create output formatter
    let formatter = OutputFormatter::new(cli.format);

    // Execute command
    match cli.command {
        Commands::Analyze { premises, conclusion } => {
            analyze_command(premises, conclusion, &formatter).await?;
        }

        Commands::Compare { philosophers, topic } => {
            compare_command(philosophers, topic, &formatter).await?;
        }

        Commands::Philosophers { detailed } => {
            list_philosophers_command(detailed, &formatter)?;
        }

        Commands::Info { name } => {
            info_command(&name, &formatter)?;
        }

        Commands::Fallacies => {
            fallacies_command(&formatter)?;
        }

        Commands::Interactive => {
            info!("Starting interactive REPL mode");
            repl::start_repl().await?;
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*};
    use tracing_subscriber::filter::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("philo=debug,info")
    } else {
        EnvFilter::new("philo=info,warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Analyze command implementation
async fn analyze_command(premises: Vec<String>, conclusion: String, formatter: &OutputFormatter) -> Result<()> {
    match philo::analyze_argument(&premises, &conclusion).await {
        Ok(result) => formatter.output_analysis(&result),
        Err(e) => fail(formatter, &e),
    }
}

/// Compare command implementation
async fn compare_command(philosophers: Vec<String>, topic: String, formatter: &OutputFormatter) -> Result<()> {
    if topic.parse::<Topic>().is_err() {
        formatter.warning(&format!(
            "'{}' is not a comparable topic; expected one of: {}",
            topic,
            Topic::all().iter().map(Topic::name).collect::<Vec<_>>().join(", ")
        ))?;
    }

    match philo::compare_philosophers(&philosophers, &topic).await {
        Ok(result) => formatter.output_comparison(&result),
        Err(e) => fail(formatter, &e),
    }
}

/// List philosophers command
fn list_philosophers_command(detailed: bool, formatter: &OutputFormatter) -> Result<()> {
    let knowledge = KnowledgeBase::global();

    formatter.header("Known Philosophers")?;
    formatter.info(&format!("Total: {} philosophers\n", knowledge.len()))?;

    for entry in knowledge.entries() {
        if detailed {
            formatter.output_entry(entry)?;
        } else {
            formatter.result(&format!("{:12} - {}", entry.name, entry.period))?;
        }
    }

    if !detailed {
        formatter.info("\nUse --detailed flag for more information")?;
    }

    Ok(())
}

/// Info command - show one philosopher
fn info_command(name: &str, formatter: &OutputFormatter) -> Result<()> {
    match KnowledgeBase::global().lookup(name) {
        Some(entry) => formatter.output_entry(entry),
        None => {
            formatter.error(&format!("✗ Unknown philosopher: {}", name))?;
            formatter.info(&format!(
                "Known philosophers: {}",
                KnowledgeBase::global().names().join(", ")
            ))?;
            std::process::exit(1);
        }
    }
}

/// Fallacies command - list the heuristic signatures
fn fallacies_command(formatter: &OutputFormatter) -> Result<()> {
    formatter.header("Fallacy Signatures")?;

    for rule in ArgumentAnalyzer::new().fallacy_rules() {
        formatter.section(rule.fallacy.name())?;
        formatter.info(&format!("  {}", rule.fallacy.description()))?;
        formatter.info(&format!("  Triggers: {}", rule.triggers.join(", ")))?;
        if let philo::argument::PremiseCondition::FewerThan(limit) = rule.condition {
            formatter.info(&format!("  Only with fewer than {} premises", limit))?;
        }
    }

    Ok(())
}

/// Report a failed operation and exit non-zero
fn fail(formatter: &OutputFormatter, error: &ReasoningError) -> Result<()> {
    formatter.error(&format!("✗ {}", error))?;
    std::process::exit(1);
}
