use std::fs;

use anyhow::Result;
use commit_conventions::{CommitMessage, LintConfig, LintReport, Linter, RuleId, Severity};
use tempfile::TempDir;

fn lint(raw: &str) -> LintReport {
    Linter::default().lint_raw(raw)
}

fn is_valid(report: &LintReport, rule: RuleId) -> bool {
    report
        .result(rule)
        .map(|r| r.valid)
        .unwrap_or_else(|| panic!("{rule} was not evaluated"))
}

#[test]
fn title_without_blank_line_before_body() {
    let report = lint("foo: this is only a title\nBar baz.");
    assert!(!is_valid(&report, RuleId::BodyLeadingBlank));
    // Only a warning by default
    assert_eq!(report.exit_code(false), 0);
    assert_eq!(report.exit_code(true), 2);
}

#[test]
fn body_starting_lowercase() {
    let report = lint("foo: this is only a title\n\nbla blah bla.");
    assert!(!is_valid(&report, RuleId::BodyProse));
    assert_eq!(report.exit_code(false), 1);
}

#[test]
fn fixes_sentence_is_valid_prose() {
    let report = lint("foo: this is only a title\n\nFixes someUrl://blahblah.com");
    assert!(is_valid(&report, RuleId::BodyProse));
}

#[test]
fn backslash_in_scope() {
    let report = lint("foo\\bar: bla bla bla");
    assert!(!is_valid(&report, RuleId::PreferSlashOverBackslash));
}

#[test]
fn footer_references_must_match() {
    let good = "foo: this is only a title\n\nBla bla blah[1].\n\n[1] http://foo.bar/baz";
    assert!(is_valid(&lint(good), RuleId::FooterRefsValidity));

    let bad = good.replace("[1] http", "[2] http");
    assert!(!is_valid(&lint(&bad), RuleId::FooterRefsValidity));
}

#[test]
fn long_title_gets_abbreviation_suggestions() {
    let report = lint("Upgrade foo bla bla bla bla bla bla bla bla bla bla bla bla bla bla");
    let result = report
        .result(RuleId::HeaderMaxLengthWithSuggestions)
        .unwrap();
    assert!(!result.valid);
    assert!(result.message.contains("\"upgrade\" -> \"update\""));
}

#[test]
fn merge_commit_title_may_be_long() {
    let report = lint("Merge PR #42 from realmarv/fixFooterReferenceExistenceTruncatedBody");
    assert!(is_valid(&report, RuleId::HeaderMaxLengthWithSuggestions));
}

#[test]
fn host_body_without_trailing_footer_still_sees_it() {
    // Some hosts truncate the body field; raw-based rules must not be fooled
    let raw = "foo: title\n\nBla bla blah #42.\n\nFixes https://some/issue";
    let message = CommitMessage::new("foo: title", Some("Bla bla blah.".to_string()), raw);
    let report = Linter::default().lint(&message);
    assert!(!is_valid(&report, RuleId::ProperIssueRefs));
}

#[test]
fn host_body_without_footer_references_still_sees_them() {
    let raw = "foo: title\n\nBla bla blah[1].\n\n[1] http://foo.bar/baz";
    let message = CommitMessage::new("foo: title", Some("Bla bla blah[1].".to_string()), raw);
    let report = Linter::default().lint(&message);
    assert!(is_valid(&report, RuleId::FooterRefsValidity));
    assert!(is_valid(&report, RuleId::FooterNotesMisplacement));

    // A footer note dropped from the host body must still be placed last
    let raw = "foo: title\n\nFixes https://some/issue\n\nBla bla blah.";
    let message = CommitMessage::new("foo: title", None, raw);
    let report = Linter::default().lint(&message);
    assert!(!is_valid(&report, RuleId::FooterNotesMisplacement));
}

#[test]
fn config_file_sets_repository_and_severities() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join(".commit-conventions.yaml");
    fs::write(
        &path,
        "repository: nblockchain/conventions\n\
         header-max-length: 72\n\
         rules:\n\
         \x20 body-prose: warning\n\
         \x20 type-empty: 0\n",
    )?;

    let config = LintConfig::load(Some(path.as_path()))?;
    assert_eq!(config.severity(RuleId::BodyProse), Severity::Warning);
    assert_eq!(config.severity(RuleId::TypeEmpty), Severity::Disabled);

    let linter = Linter::new(config);
    let raw = "foo: link to a commit of this repository\n\n\
               https://github.com/nblockchain/conventions/commit/3ee07243edc30604088a4b04ca525204ea440710";
    let report = linter.lint_raw(raw);
    assert!(!is_valid(&report, RuleId::CommitHashAlone));
    assert!(is_valid(&report, RuleId::HeaderMaxLengthWithSuggestions));
    assert!(report.result(RuleId::TypeEmpty).is_none());
    Ok(())
}

#[test]
fn report_serializes_to_json_and_yaml() -> Result<()> {
    let report = lint("foo: Bar");
    let json = serde_json::to_value(&report)?;
    assert_eq!(json["header"], "foo: Bar");
    assert_eq!(json["summary"]["error_count"], 1);

    let yaml = commit_conventions::data::to_yaml(&report)?;
    assert!(yaml.contains("subject-lowercase"));
    Ok(())
}
