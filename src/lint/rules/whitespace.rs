//! Whitespace rules over the whole raw message.

use super::RuleOutcome;
use crate::lint::classify::remove_all_code_blocks;
use crate::lint::segment::{normalize_eols, prose_lines};

/// No run of two spaces, except right after a dot.
pub fn too_many_spaces(raw: &str) -> RuleOutcome {
    const MESSAGE: &str = "Please watch out for too many whitespaces in the text.";

    let chars: Vec<char> = remove_all_code_blocks(raw).chars().collect();
    let offence = chars
        .windows(3)
        .any(|w| w[0] != '.' && w[1] == ' ' && w[2] == ' ');

    RuleOutcome::new(!offence, MESSAGE)
}

/// No line outside a code block may start or end with a space or tab.
pub fn trailing_whitespace(raw: &str) -> RuleOutcome {
    const MESSAGE: &str = "Please watch out for leading or ending trailing whitespace.";

    let is_blank_char = |c: char| c == ' ' || c == '\t';
    let normalized = normalize_eols(raw);
    for line in prose_lines(&normalized) {
        if line.starts_with(is_blank_char) || line.ends_with(is_blank_char) {
            return RuleOutcome::fail(format!("{MESSAGE}\nOffending line: \"{}\"", line.as_str()));
        }
    }

    RuleOutcome::pass(MESSAGE)
}
