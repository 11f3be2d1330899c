//! Commit message linting.
//!
//! The rules in [`rules`] are pure functions over a [`CommitMessage`].
//! [`Linter`] runs the ones enabled by a [`LintConfig`] and collects their
//! verdicts into a [`LintReport`].

use tracing::debug;

use crate::config::LintConfig;
use crate::data::check::{LintReport, RuleResult, Severity};

pub mod abbreviations;
pub mod classify;
pub mod error;
pub mod message;
pub mod rules;
pub mod segment;
pub mod suggest;

pub use error::ContractError;
pub use message::{strip_comment_lines, CommitMessage};
pub use rules::{evaluate, RuleId, RuleOutcome, RuleParams};

/// Runs the configured rules against commit messages.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    /// Creates a linter for the given configuration.
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lints a message, evaluating every rule that is not disabled.
    pub fn lint(&self, message: &CommitMessage) -> LintReport {
        let results = RuleId::ALL
            .into_iter()
            .filter_map(|rule| {
                let severity = self.config.severity(rule);
                if severity == Severity::Disabled {
                    return None;
                }

                let outcome = evaluate(rule, message, &self.config.params);
                debug!(%rule, %severity, valid = outcome.valid, "Evaluated rule");
                Some(RuleResult {
                    rule,
                    severity,
                    valid: outcome.valid,
                    message: outcome.message,
                })
            })
            .collect();

        LintReport::new(message.header.clone(), results)
    }

    /// Parses and lints raw message text.
    pub fn lint_raw(&self, raw: &str) -> LintReport {
        self.lint(&CommitMessage::parse(raw))
    }
}
