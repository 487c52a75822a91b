// SPDX-FileCopyrightText: 2025 Philo Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive REPL
//!
//! Read-eval-print loop over argument analysis and philosopher comparison

use anyhow::{bail, Result};
use colored::Colorize;
use philo::KnowledgeBase;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::output::{OutputFormat, OutputFormatter};

/// REPL state
pub struct ReplState {
    formatter: OutputFormatter,
    history: Vec<String>,
}

impl ReplState {
    pub fn new() -> Self {
        Self {
            formatter: OutputFormatter::new(OutputFormat::Text),
            history: Vec::new(),
        }
    }
}

/// A parsed REPL line
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Analyze { premises: Vec<String>, conclusion: String },
    Compare { philosophers: Vec<String>, topic: String },
    List,
    Info(String),
    History,
    Help,
    Quit,
}

/// Start the interactive REPL
pub async fn start_repl() -> Result<()> {
    let mut repl_state = ReplState::new();

    // Print welcome message
    print_welcome();

    // Create readline editor
    let mut rl = DefaultEditor::new()?;

    // Main REPL loop
    loop {
        let readline = rl.readline(&format!("{} ", "philo>".cyan().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                // Handle command
                match handle_command(&mut repl_state, line).await {
                    Ok(should_continue) => {
                        if !should_continue {
                            break;
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", format!("Error: {}", e).red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    println!("{}", "Goodbye!".green());
    Ok(())
}

/// Run one line; returns false when the loop should stop
async fn handle_command(state: &mut ReplState, line: &str) -> Result<bool> {
    let command = parse_command(line)?;
    state.history.push(line.to_string());

    match command {
        Command::Analyze { premises, conclusion } => {
            match philo::analyze_argument(&premises, &conclusion).await {
                Ok(result) => state.formatter.output_analysis(&result)?,
                Err(e) => state.formatter.error(&format!("✗ {}", e))?,
            }
        }
        Command::Compare { philosophers, topic } => {
            match philo::compare_philosophers(&philosophers, &topic).await {
                Ok(result) => state.formatter.output_comparison(&result)?,
                Err(e) => state.formatter.error(&format!("✗ {}", e))?,
            }
        }
        Command::List => {
            for entry in KnowledgeBase::global().entries() {
                state.formatter.result(&format!("  {:12} {}", entry.name, entry.period.dimmed()))?;
            }
        }
        Command::Info(name) => match KnowledgeBase::global().lookup(&name) {
            Some(entry) => state.formatter.output_entry(entry)?,
            None => state.formatter.error(&format!("✗ Unknown philosopher: {}", name))?,
        },
        Command::History => {
            for (i, entry) in state.history.iter().enumerate() {
                println!("  {}. {}", i + 1, entry);
            }
        }
        Command::Help => print_help(),
        Command::Quit => return Ok(false),
    }

    Ok(true)
}

/// Parse a REPL line.
///
/// `analyze P1; P2 => C` and `compare NAME... on TOPIC`.
fn parse_command(line: &str) -> Result<Command> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_lowercase().as_str() {
        "analyze" | "a" => {
            let Some((premises, conclusion)) = rest.split_once("=>") else {
                bail!("Usage: analyze <premise>; <premise> => <conclusion>");
            };
            let premises = premises
                .split(';')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            Ok(Command::Analyze {
                premises,
                conclusion: conclusion.trim().to_string(),
            })
        }
        "compare" | "c" => {
            let words: Vec<&str> = rest.split_whitespace().collect();
            let Some(on) = words.iter().rposition(|w| w.eq_ignore_ascii_case("on")) else {
                bail!("Usage: compare <name> [<name>...] on <topic>");
            };
            let topic = words[on + 1..].join(" ");
            if topic.is_empty() {
                bail!("Missing topic after 'on'");
            }
            Ok(Command::Compare {
                philosophers: words[..on].iter().map(|w| w.trim_matches(',').to_string()).collect(),
                topic,
            })
        }
        "list" | "ls" => Ok(Command::List),
        "info" | "i" => {
            if rest.is_empty() {
                bail!("Usage: info <name>");
            }
            Ok(Command::Info(rest.to_string()))
        }
        "history" => Ok(Command::History),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => bail!("Unknown command: {}. Type 'help' for usage", other),
    }
}

fn print_welcome() {
    println!("{}", "╔═══════════════════════════════════════════════════════════╗".cyan());
    println!("{}", "║  PHILO Interactive Mode                                   ║".cyan().bold());
    println!("{}", "╚═══════════════════════════════════════════════════════════╝".cyan());
    println!();
    println!("Type {} for available commands", "help".yellow());
    println!();
}

fn print_help() {
    println!("{}", "Commands:".yellow().bold());
    println!("  analyze <p1>; <p2> => <c>     - Analyze an argument");
    println!("  compare <a> <b> on <topic>    - Compare philosophers");
    println!("  list                          - List known philosophers");
    println!("  info <name>                   - Show a philosopher");
    println!("  history                       - Show command history");
    println!("  help                          - Show this help");
    println!("  quit                          - Exit the REPL");
}
