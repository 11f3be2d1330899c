//! Configuration-related CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::LintConfig;

/// Shows the effective configuration as YAML.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Path to the configuration file (defaults to ./.commit-conventions.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lists every rule under `rules`, not only the overridden ones.
    #[arg(long)]
    pub all_rules: bool,
}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self) -> Result<()> {
        let mut config = LintConfig::load(self.config.as_deref())?;
        if self.all_rules {
            config.rules = config.effective_rules().into_iter().collect();
        }

        let yaml = crate::data::to_yaml(&config).context("Failed to serialize configuration")?;
        println!("{yaml}");
        Ok(())
    }
}
