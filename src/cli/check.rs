//! Check command: lints a commit message.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use super::formatting::{determine_report_icon, format_failure, format_summary_text};
use crate::config::LintConfig;
use crate::data::check::{LintReport, OutputFormat};
use crate::lint::{strip_comment_lines, CommitMessage, Linter};

/// Check command options - lints a commit message against the conventions.
#[derive(Parser)]
pub struct CheckCommand {
    /// File containing the commit message (e.g. .git/COMMIT_EDITMSG).
    /// Reads stdin when neither a file nor --message is given.
    #[arg(value_name = "FILE", conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Commit message text to check.
    #[arg(long, short)]
    pub message: Option<String>,

    /// Path to the configuration file (defaults to ./.commit-conventions.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Exits with error code if any warnings are found.
    #[arg(long)]
    pub strict: bool,

    /// Only prints failing rules.
    #[arg(long)]
    pub quiet: bool,

    /// Keeps git template comments (lines that are '#' alone or start with
    /// '# ') instead of dropping them. Refs such as '#123' are always kept.
    #[arg(long)]
    pub keep_comments: bool,
}

impl CheckCommand {
    /// Executes the check command.
    pub fn execute(self) -> Result<()> {
        let output_format: OutputFormat = self.format.parse().unwrap_or(OutputFormat::Text);

        let config = LintConfig::load(self.config.as_deref())?;
        let text = self.read_message()?;
        let raw = if self.keep_comments {
            text
        } else {
            strip_comment_lines(&text)
        };

        let message = CommitMessage::parse(&raw);
        debug!(header = %message.header, "Linting commit message");
        let report = Linter::new(config).lint(&message);

        self.output_report(&report, output_format)?;

        let exit_code = report.exit_code(self.strict);
        if exit_code != 0 {
            std::process::exit(exit_code);
        }

        Ok(())
    }

    /// Reads the message from --message, the given file, or stdin.
    fn read_message(&self) -> Result<String> {
        if let Some(message) = &self.message {
            return Ok(message.clone());
        }

        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read commit message file: {}", path.display()));
        }

        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read commit message from stdin")?;
        Ok(text)
    }

    /// Outputs the report in the requested format.
    fn output_report(&self, report: &LintReport, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => {
                print!("{}", format_text_report(report, self.quiet));
                Ok(())
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(report)
                    .context("Failed to serialize report to JSON")?;
                println!("{json}");
                Ok(())
            }
            OutputFormat::Yaml => {
                let yaml =
                    crate::data::to_yaml(report).context("Failed to serialize report to YAML")?;
                println!("{yaml}");
                Ok(())
            }
        }
    }
}

/// Formats the text report: the title line, one entry per failing rule and
/// the summary. Quiet mode keeps only the failures.
fn format_text_report(report: &LintReport, quiet: bool) -> String {
    let mut output = String::new();

    if !quiet {
        output.push_str(&format!(
            "{} \"{}\"\n",
            determine_report_icon(report),
            report.header
        ));
    }

    for failure in report.failures() {
        output.push_str(&format_failure(failure));
        output.push('\n');
    }

    if !quiet {
        output.push('\n');
        output.push_str(&format_summary_text(&report.summary));
        output.push('\n');
    }

    output
}
