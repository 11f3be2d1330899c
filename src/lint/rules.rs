//! Commit message convention rules.
//!
//! Every rule is an independent pure function of the message fields it
//! inspects and returns a [`RuleOutcome`]. [`evaluate`] dispatches on
//! [`RuleId`] and hands each rule the fields and parameters it needs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::message::CommitMessage;
use super::segment::body_of_raw;
use crate::data::check::Severity;

pub mod body;
pub mod footer;
pub mod header;
pub mod whitespace;

/// Verdict of a single rule.
///
/// The message is always populated, even when the rule passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Whether the message conforms to the rule.
    pub valid: bool,
    /// Guidance for fixing a violation.
    pub message: String,
}

impl RuleOutcome {
    /// Creates a passing outcome.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    /// Creates a failing outcome.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Creates an outcome from a verdict computed elsewhere.
    pub fn new(valid: bool, message: impl Into<String>) -> Self {
        Self {
            valid,
            message: message.into(),
        }
    }
}

/// Numeric and environment parameters shared by the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RuleParams {
    /// Maximum title length.
    pub header_max_length: usize,
    /// Maximum length of a body line.
    pub body_max_line_length: usize,
    /// Maximum length of a footer line.
    pub footer_max_line_length: usize,
    /// Minimum length of a non-final line in a body paragraph.
    pub paragraph_line_min_length: usize,
    /// Repository identifier (`owner/name`) used to spot links to its own commits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            header_max_length: 50,
            body_max_line_length: 64,
            footer_max_line_length: 150,
            paragraph_line_min_length: 50,
            repository: None,
        }
    }
}

/// Identifies a rule by its kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Blank line between title and body.
    BodyLeadingBlank,
    /// Body lines wrapped too early.
    BodyParagraphLineMinLength,
    /// Paragraph capitalization and ending punctuation.
    BodyProse,
    /// Body line length limit.
    BodySoftMaxLineLength,
    /// Links to this repository's commits instead of bare hashes.
    CommitHashAlone,
    /// Bare "WIP" title.
    EmptyWip,
    /// Blank line before the footer.
    FooterLeadingBlank,
    /// Footer line length limit.
    FooterMaxLineLength,
    /// Footer notes mixed into the body.
    FooterNotesMisplacement,
    /// Inline references and footer definitions must match.
    FooterRefsValidity,
    /// Title length limit with abbreviation suggestions.
    HeaderMaxLengthWithSuggestions,
    /// Backslash in the title scope.
    PreferSlashOverBackslash,
    /// `#123` style issue references.
    ProperIssueRefs,
    /// Title ending with a dot.
    SubjectFullStop,
    /// Subject starting like a new sentence.
    SubjectLowercase,
    /// Scope-less title starting lowercase.
    TitleUppercase,
    /// Consecutive spaces.
    TooManySpaces,
    /// Leading or trailing whitespace on a line.
    TrailingWhitespace,
    /// Title without a `type:` prefix.
    TypeEmpty,
    /// Space after the first colon of the title.
    TypeSpaceAfterColon,
    /// Space after a comma in the title scope.
    TypeSpaceAfterComma,
    /// Space before a parenthesis in the title scope.
    TypeSpaceBeforeParen,
    /// `[scope]` style title.
    TypeWithSquareBrackets,
}

impl RuleId {
    /// Every rule, in evaluation order.
    pub const ALL: [Self; 23] = [
        Self::BodyLeadingBlank,
        Self::BodyParagraphLineMinLength,
        Self::BodyProse,
        Self::BodySoftMaxLineLength,
        Self::CommitHashAlone,
        Self::EmptyWip,
        Self::FooterLeadingBlank,
        Self::FooterMaxLineLength,
        Self::FooterNotesMisplacement,
        Self::FooterRefsValidity,
        Self::HeaderMaxLengthWithSuggestions,
        Self::PreferSlashOverBackslash,
        Self::ProperIssueRefs,
        Self::SubjectFullStop,
        Self::SubjectLowercase,
        Self::TitleUppercase,
        Self::TooManySpaces,
        Self::TrailingWhitespace,
        Self::TypeEmpty,
        Self::TypeSpaceAfterColon,
        Self::TypeSpaceAfterComma,
        Self::TypeSpaceBeforeParen,
        Self::TypeWithSquareBrackets,
    ];

    /// Returns the kebab-case rule name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BodyLeadingBlank => "body-leading-blank",
            Self::BodyParagraphLineMinLength => "body-paragraph-line-min-length",
            Self::BodyProse => "body-prose",
            Self::BodySoftMaxLineLength => "body-soft-max-line-length",
            Self::CommitHashAlone => "commit-hash-alone",
            Self::EmptyWip => "empty-wip",
            Self::FooterLeadingBlank => "footer-leading-blank",
            Self::FooterMaxLineLength => "footer-max-line-length",
            Self::FooterNotesMisplacement => "footer-notes-misplacement",
            Self::FooterRefsValidity => "footer-refs-validity",
            Self::HeaderMaxLengthWithSuggestions => "header-max-length-with-suggestions",
            Self::PreferSlashOverBackslash => "prefer-slash-over-backslash",
            Self::ProperIssueRefs => "proper-issue-refs",
            Self::SubjectFullStop => "subject-full-stop",
            Self::SubjectLowercase => "subject-lowercase",
            Self::TitleUppercase => "title-uppercase",
            Self::TooManySpaces => "too-many-spaces",
            Self::TrailingWhitespace => "trailing-whitespace",
            Self::TypeEmpty => "type-empty",
            Self::TypeSpaceAfterColon => "type-space-after-colon",
            Self::TypeSpaceAfterComma => "type-space-after-comma",
            Self::TypeSpaceBeforeParen => "type-space-before-paren",
            Self::TypeWithSquareBrackets => "type-with-square-brackets",
        }
    }

    /// Severity used when the configuration does not mention the rule.
    pub fn default_severity(self) -> Severity {
        match self {
            Self::BodyLeadingBlank | Self::FooterLeadingBlank | Self::TypeEmpty => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RuleId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown rule: {s}"))
    }
}

/// Runs a single rule against a message.
pub fn evaluate(rule: RuleId, message: &CommitMessage, params: &RuleParams) -> RuleOutcome {
    let header = message.header.as_str();
    let body = message.body.as_deref();
    let raw = message.raw.as_str();

    match rule {
        RuleId::BodyLeadingBlank => body::body_leading_blank(raw),
        RuleId::BodyParagraphLineMinLength => body::body_paragraph_line_min_length(
            raw,
            params.paragraph_line_min_length,
            params.body_max_line_length,
        ),
        RuleId::BodyProse => body::body_prose(raw),
        RuleId::BodySoftMaxLineLength => {
            body::body_soft_max_line_length(body, params.body_max_line_length)
        }
        RuleId::CommitHashAlone => body::commit_hash_alone(raw, params.repository.as_deref()),
        RuleId::EmptyWip => header::empty_wip(header),
        RuleId::FooterLeadingBlank => footer::footer_leading_blank(body_of_raw(raw).as_deref()),
        RuleId::FooterMaxLineLength => footer::footer_max_line_length(
            body_of_raw(raw).as_deref(),
            params.footer_max_line_length,
        ),
        RuleId::FooterNotesMisplacement => {
            footer::footer_notes_misplacement(body_of_raw(raw).as_deref())
        }
        RuleId::FooterRefsValidity => footer::footer_refs_validity(body_of_raw(raw).as_deref()),
        RuleId::HeaderMaxLengthWithSuggestions => {
            header::header_max_length_with_suggestions(header, params.header_max_length)
        }
        RuleId::PreferSlashOverBackslash => header::prefer_slash_over_backslash(header),
        RuleId::ProperIssueRefs => body::proper_issue_refs(raw),
        RuleId::SubjectFullStop => header::subject_full_stop(header),
        RuleId::SubjectLowercase => header::subject_lowercase(header),
        RuleId::TitleUppercase => header::title_uppercase(header),
        RuleId::TooManySpaces => whitespace::too_many_spaces(raw),
        RuleId::TrailingWhitespace => whitespace::trailing_whitespace(raw),
        RuleId::TypeEmpty => header::type_empty(header),
        RuleId::TypeSpaceAfterColon => header::type_space_after_colon(header),
        RuleId::TypeSpaceAfterComma => header::type_space_after_comma(header),
        RuleId::TypeSpaceBeforeParen => header::type_space_before_paren(header),
        RuleId::TypeWithSquareBrackets => header::type_with_square_brackets(header),
    }
}
