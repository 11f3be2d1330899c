//! Lint result types for commit message validation.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::lint::RuleId;

/// Complete lint report for one commit message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    /// Title of the checked message.
    pub header: String,
    /// One entry per evaluated rule, in evaluation order.
    pub results: Vec<RuleResult>,
    /// Summary statistics.
    pub summary: LintSummary,
}

/// Result of evaluating a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// The evaluated rule.
    pub rule: RuleId,
    /// Severity the rule was evaluated with.
    pub severity: Severity,
    /// Whether the message conforms to the rule.
    pub valid: bool,
    /// Guidance for fixing a violation.
    pub message: String,
}

impl RuleResult {
    /// Returns `true` if the rule failed at error level.
    pub fn is_error(&self) -> bool {
        !self.valid && self.severity == Severity::Error
    }

    /// Returns `true` if the rule failed at warning level.
    pub fn is_warning(&self) -> bool {
        !self.valid && self.severity == Severity::Warning
    }
}

/// How a rule failure is reported.
///
/// Deserializes from a name or from the numeric levels 0, 1 and 2 used by
/// commitlint configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule is not evaluated.
    Disabled,
    /// Advisory (exit code 0, or 2 with --strict).
    Warning,
    /// Failures block CI (exit code 1).
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "DISABLED"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0" | "off" | "disabled" => Ok(Self::Disabled),
            "1" | "warn" | "warning" => Ok(Self::Warning),
            "2" | "error" => Ok(Self::Error),
            other => Err(anyhow::anyhow!("Unknown severity: {other}")),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Level {
            Number(u8),
            Name(String),
        }

        let text = match Level::deserialize(deserializer)? {
            Level::Number(n) => n.to_string(),
            Level::Name(name) => name,
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Summary statistics for a lint report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintSummary {
    /// Number of rules evaluated.
    pub total_rules: usize,
    /// Number of rules the message passes.
    pub passing_rules: usize,
    /// Number of failing error-level rules.
    pub error_count: usize,
    /// Number of failing warning-level rules.
    pub warning_count: usize,
}

impl LintSummary {
    /// Creates a summary from a list of rule results.
    pub fn from_results(results: &[RuleResult]) -> Self {
        Self {
            total_rules: results.len(),
            passing_rules: results.iter().filter(|r| r.valid).count(),
            error_count: results.iter().filter(|r| r.is_error()).count(),
            warning_count: results.iter().filter(|r| r.is_warning()).count(),
        }
    }
}

impl LintReport {
    /// Creates a new lint report from rule results.
    pub fn new(header: impl Into<String>, results: Vec<RuleResult>) -> Self {
        let summary = LintSummary::from_results(&results);
        Self {
            header: header.into(),
            results,
            summary,
        }
    }

    /// Checks if the report has any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.summary.error_count > 0
    }

    /// Checks if the report has any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.summary.warning_count > 0
    }

    /// Returns `true` if no evaluated rule failed.
    pub fn passes(&self) -> bool {
        self.results.iter().all(|r| r.valid)
    }

    /// Iterates over the failing rules.
    pub fn failures(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| !r.valid)
    }

    /// Looks up the result of a rule, if it was evaluated.
    pub fn result(&self, rule: RuleId) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.rule == rule)
    }

    /// Determines exit code based on report and options.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if self.has_errors() {
            1
        } else if strict && self.has_warnings() {
            2
        } else {
            0
        }
    }
}

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
