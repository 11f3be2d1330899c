//! Rules about footer notes and numbered references.
//!
//! They take the body recovered from the raw message, since the footer is
//! what a truncated host body loses first.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::RuleOutcome;
use crate::lint::classify::{
    is_empty_footer_reference, is_footer_note, is_footer_reference, remove_all_code_blocks, Line,
};
use crate::lint::segment::{lines, normalize_eols, prose_lines};

/// Body text with line endings normalized and code blocks removed.
fn stripped_body(body: &str) -> String {
    remove_all_code_blocks(&normalize_eols(body))
}

/// The footer must be separated from the body by a blank line.
pub fn footer_leading_blank(body: Option<&str>) -> RuleOutcome {
    const MESSAGE: &str = "Please leave a blank line before the footer notes.";

    let Some(body) = body else {
        return RuleOutcome::pass(MESSAGE);
    };

    let text = stripped_body(body);
    let all: Vec<Line<'_>> = lines(&text).collect();

    let mut footer_start = None;
    for (index, line) in all.iter().enumerate().rev() {
        if line.is_blank() {
            continue;
        }
        if !is_footer_note(*line) {
            break;
        }
        footer_start = Some(index);
    }

    let offence = footer_start
        .is_some_and(|start| start > 0 && !all[start - 1].is_blank());

    RuleOutcome::new(!offence, MESSAGE)
}

/// Footer notes must not exceed the limit.
pub fn footer_max_line_length(body: Option<&str>, max_length: usize) -> RuleOutcome {
    let message = format!("Please do not exceed {max_length} characters in the footer lines.");

    let Some(body) = body else {
        return RuleOutcome::pass(message);
    };

    let normalized = normalize_eols(body);
    let offending = prose_lines(&normalized)
        .into_iter()
        .find(|line| is_footer_note(*line) && line.char_len() > max_length);

    match offending {
        Some(line) => RuleOutcome::fail(format!("{message}\nOffending line: \"{}\"", line.as_str())),
        None => RuleOutcome::pass(message),
    }
}

/// Footer notes must form a trailing run of the body.
///
/// Once a footer note has been seen, every later non-blank line must be one
/// too.
pub fn footer_notes_misplacement(body: Option<&str>) -> RuleOutcome {
    const MESSAGE: &str = "Footer messages must be placed after body paragraphs, please move any message that starts with a \"[]\", \"Fixes\" or \"Closes\" to the end of the commit message.";

    let Some(body) = body else {
        return RuleOutcome::pass(MESSAGE);
    };

    let text = stripped_body(body);
    let mut seen_footer = false;
    for line in lines(&text).filter(|line| !line.is_empty()) {
        if is_footer_note(line) {
            seen_footer = true;
        } else if seen_footer {
            debug!(line = line.as_str(), "Body text after footer notes");
            return RuleOutcome::fail(format!("{MESSAGE}\nMisplaced line: \"{}\"", line.as_str()));
        }
    }

    RuleOutcome::pass(MESSAGE)
}

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([0-9]+)\]").unwrap());

/// Reference ids used in the body text and defined in the footer.
#[derive(Debug, Default, PartialEq, Eq)]
struct References {
    used: BTreeSet<String>,
    defined: BTreeSet<String>,
}

impl References {
    fn collect(text: &str) -> Self {
        let mut refs = Self::default();
        for line in lines(text) {
            let target = if is_footer_reference(line) {
                &mut refs.defined
            } else {
                &mut refs.used
            };
            target.extend(
                REFERENCE_PATTERN
                    .captures_iter(&line)
                    .filter_map(|caps| caps.get(1))
                    .map(|id| id.as_str().to_string()),
            );
        }
        refs
    }
}

/// Every `[n]` used in the body must be defined in the footer, and every
/// definition must be used.
pub fn footer_refs_validity(body: Option<&str>) -> RuleOutcome {
    const MESSAGE: &str =
        "All references in the body must be mentioned in the footer, and vice versa.";

    let Some(body) = body else {
        return RuleOutcome::pass(MESSAGE);
    };

    let text = stripped_body(body);

    if let Some(line) = lines(&text).find(|line| is_empty_footer_reference(*line)) {
        return RuleOutcome::fail(format!(
            "Please do not leave a footer reference empty: the value of \"{}\" must follow it on the same line, not after an EOL.",
            line.trim()
        ));
    }

    let refs = References::collect(&text);
    if refs.used == refs.defined {
        return RuleOutcome::pass(MESSAGE);
    }

    debug!(used = ?refs.used, defined = ?refs.defined, "Reference mismatch");
    let mut message = String::from(MESSAGE);
    let undefined: Vec<&str> = refs.used.difference(&refs.defined).map(String::as_str).collect();
    if !undefined.is_empty() {
        message.push_str(&format!("\nUndefined: [{}]", undefined.join("], [")));
    }
    let unused: Vec<&str> = refs.defined.difference(&refs.used).map(String::as_str).collect();
    if !unused.is_empty() {
        message.push_str(&format!("\nUnused: [{}]", unused.join("], [")));
    }
    RuleOutcome::fail(message)
}
