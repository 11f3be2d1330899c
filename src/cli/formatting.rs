//! Display formatting shared by the CLI commands.

use crate::data::check::{LintReport, LintSummary, RuleResult, Severity};

/// Returns an ANSI-colored severity label with fixed-width padding.
pub(crate) fn format_severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31mERROR\x1b[0m   ",
        Severity::Warning => "\x1b[33mWARNING\x1b[0m ",
        Severity::Disabled => "\x1b[90mDISABLED\x1b[0m",
    }
}

/// Returns an emoji icon representing the overall result.
///
/// - Passing messages get a checkmark.
/// - Messages with errors get a cross.
/// - Messages with only warnings get a warning sign.
pub(crate) fn determine_report_icon(report: &LintReport) -> &'static str {
    if report.passes() {
        "\u{2705}"
    } else if report.has_errors() {
        "\u{274c}"
    } else {
        "\u{26a0}\u{fe0f} "
    }
}

/// Formats a failing rule and its guidance, indented under the title line.
pub(crate) fn format_failure(result: &RuleResult) -> String {
    let mut lines = result.message.lines();
    let mut output = format!(
        "   {} [{}] {}",
        format_severity_label(result.severity),
        result.rule,
        lines.next().unwrap_or_default()
    );
    for line in lines {
        output.push_str(&format!("\n      {line}"));
    }
    output
}

/// Formats the summary block printed after the failures.
pub(crate) fn format_summary_text(summary: &LintSummary) -> String {
    format!(
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\
         Summary: {} rules checked\n\
         \x20 {} errors, {} warnings\n\
         \x20 {} passed",
        summary.total_rules, summary.error_count, summary.warning_count, summary.passing_rules,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;

    fn result(severity: Severity, valid: bool, message: &str) -> RuleResult {
        RuleResult {
            rule: RuleId::BodyProse,
            severity,
            valid,
            message: message.to_string(),
        }
    }

    // --- format_severity_label ---

    #[test]
    fn severity_label_error() {
        let label = format_severity_label(Severity::Error);
        assert!(label.contains("ERROR"));
        assert!(label.contains("\x1b[31m")); // red
    }

    #[test]
    fn severity_label_warning() {
        let label = format_severity_label(Severity::Warning);
        assert!(label.contains("WARNING"));
        assert!(label.contains("\x1b[33m")); // yellow
    }

    // --- determine_report_icon ---

    #[test]
    fn icon_passing() {
        let report = LintReport::new("t", vec![result(Severity::Error, true, "")]);
        assert_eq!(determine_report_icon(&report), "\u{2705}");
    }

    #[test]
    fn icon_errors() {
        let report = LintReport::new("t", vec![result(Severity::Error, false, "")]);
        assert_eq!(determine_report_icon(&report), "\u{274c}");
    }

    #[test]
    fn icon_warnings_only() {
        let report = LintReport::new("t", vec![result(Severity::Warning, false, "")]);
        assert!(determine_report_icon(&report).starts_with("\u{26a0}"));
    }

    // --- format_failure ---

    #[test]
    fn failure_indents_continuation_lines() {
        let text = format_failure(&result(Severity::Error, false, "First.\nSecond."));
        assert!(text.contains("[body-prose] First."));
        assert!(text.ends_with("\n      Second."));
    }

    // --- format_summary_text ---

    #[test]
    fn summary_counts() {
        let summary = LintSummary {
            total_rules: 23,
            passing_rules: 21,
            error_count: 1,
            warning_count: 1,
        };
        let text = format_summary_text(&summary);
        assert!(text.contains("23 rules checked"));
        assert!(text.contains("1 errors, 1 warnings"));
        assert!(text.contains("21 passed"));
    }
}
