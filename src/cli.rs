//! CLI interface for commit-conventions.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod config;
pub mod formatting;
pub mod rules;

/// commit-conventions: checks commit messages against writing conventions.
#[derive(Parser)]
#[command(name = "commit-conventions")]
#[command(about = "Checks commit messages against writing conventions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Lints a commit message.
    Check(check::CheckCommand),
    /// Lists every rule with its severity.
    Rules(rules::RulesCommand),
    /// Shows the effective configuration.
    Config(config::ConfigCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Check(check_cmd) => check_cmd.execute(),
            Commands::Rules(rules_cmd) => rules_cmd.execute(),
            Commands::Config(config_cmd) => config_cmd.execute(),
        }
    }
}
