//! The commit message handed to the rules.

use serde::{Deserialize, Serialize};

use super::segment::{normalize_eols, split_header};

/// Line git writes above the diff in `commit --verbose`; everything below it
/// is dropped.
const SCISSORS_LINE: &str = "# ------------------------ >8 ------------------------";

/// A commit message split into its title and body.
///
/// `raw` keeps the text exactly as received. Several rules re-derive the body
/// from it because the `body` field handed over by some hosts is missing
/// trailing footer lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    /// First line of the message.
    pub header: String,
    /// Trimmed text after the first line; `None` when there is no line break.
    pub body: Option<String>,
    /// The message as received.
    pub raw: String,
}

impl CommitMessage {
    /// Creates a message from already split fields.
    pub fn new(header: impl Into<String>, body: Option<String>, raw: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body,
            raw: raw.into(),
        }
    }

    /// Splits raw message text into title and body.
    ///
    /// ```
    /// use commit_conventions::CommitMessage;
    ///
    /// let message = CommitMessage::parse("foo: bar\n\nBaz.\n");
    /// assert_eq!(message.header, "foo: bar");
    /// assert_eq!(message.body.as_deref(), Some("Baz."));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize_eols(raw);
        let (header, body) = split_header(&normalized);
        Self::new(header, body.map(str::to_string), raw)
    }
}

/// Returns `true` for the comment lines git writes into the message template:
/// a lone `#`, or `#` followed by a space or tab.
///
/// A `#` glued to a word, as in `#123`, is left for the rules to judge.
fn is_template_comment(line: &str) -> bool {
    line.strip_prefix('#')
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t']))
}

/// Removes the comment lines of git's message template.
///
/// Template comment lines are dropped, and so is everything from the
/// scissors line on.
pub fn strip_comment_lines(text: &str) -> String {
    let normalized = normalize_eols(text);
    let mut kept: Vec<&str> = Vec::new();
    for line in normalized.split('\n') {
        if line == SCISSORS_LINE {
            break;
        }
        if !is_template_comment(line) {
            kept.push(line);
        }
    }
    kept.join("\n")
}
