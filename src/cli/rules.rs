//! Rules command: lists the available rules.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::formatting::format_severity_label;
use crate::config::LintConfig;
use crate::data::check::Severity;
use crate::lint::RuleId;

/// Rules command options.
#[derive(Parser)]
pub struct RulesCommand {
    /// Path to the configuration file; without it the default severities are shown.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl RulesCommand {
    /// Executes the rules command.
    pub fn execute(self) -> Result<()> {
        let rules = match &self.config {
            Some(path) => LintConfig::load_from_path(path)?.effective_rules(),
            None => LintConfig::default().effective_rules(),
        };
        print!("{}", format_rule_list(&rules));
        Ok(())
    }
}

fn format_rule_list(rules: &[(RuleId, Severity)]) -> String {
    rules
        .iter()
        .map(|(rule, severity)| format!("{} {rule}\n", format_severity_label(*severity)))
        .collect()
}
