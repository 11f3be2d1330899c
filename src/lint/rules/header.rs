//! Rules that look at the title line.
//!
//! Most of these split the title at its first colon: the part before it is
//! the area/scope (`foo/bar`, `foo(bar)`, `foo,bar`) and the part after it the
//! subject.

use std::sync::LazyLock;

use regex::Regex;

use super::RuleOutcome;
use crate::lint::classify::{is_lower_case, is_proper_noun, is_upper_case, word_is_start_of_sentence};
use crate::lint::suggest::{append_suggestions, find_abbreviations, scope_stripped};

/// Returns the scope part of the title, if the title has a colon.
fn scope_of(header: &str) -> Option<&str> {
    header.find(':').map(|idx| &header[..idx])
}

/// Title equal to "WIP" with no number or description after it.
pub fn empty_wip(header: &str) -> RuleOutcome {
    RuleOutcome::new(
        header.to_lowercase() != "wip",
        "Please add a number or description after the WIP prefix.",
    )
}

/// Title longer than the limit, except merge commits.
///
/// The failure message lists abbreviations that would shorten the subject.
pub fn header_max_length_with_suggestions(header: &str, max_length: usize) -> RuleOutcome {
    let mut message = format!("Please do not exceed {max_length} characters in title.");

    if header.chars().count() <= max_length || header.starts_with("Merge ") {
        return RuleOutcome::pass(message);
    }

    let suggestions = find_abbreviations(&scope_stripped(header));
    append_suggestions(&mut message, &suggestions);
    RuleOutcome::fail(message)
}

/// Backslash in the scope, as in `foo\bar: baz`.
pub fn prefer_slash_over_backslash(header: &str) -> RuleOutcome {
    let offence = scope_of(header).is_some_and(|scope| scope.contains('\\'));
    RuleOutcome::new(
        !offence,
        "Please use slash instead of backslash in the area/scope/sub-area section of the title.",
    )
}

/// Title ending with a dot.
pub fn subject_full_stop(header: &str) -> RuleOutcome {
    RuleOutcome::new(
        !header.ends_with('.'),
        "Please do not end the commit message title with a dot.",
    )
}

/// First word of the subject capitalized like the start of a sentence.
///
/// Acronyms, PascalCase/camelCase identifiers and words with digits are
/// allowed.
pub fn subject_lowercase(header: &str) -> RuleOutcome {
    const MESSAGE: &str = "Please use lowercase as the first letter for your subject, i.e. the text after your area/scope.";

    let offence = match header.find(':') {
        Some(idx) if idx > 0 => {
            let subject = header[idx + 1..].trim();
            subject.chars().count() > 1
                && subject
                    .split(' ')
                    .next()
                    .is_some_and(word_is_start_of_sentence)
        }
        _ => false,
    };

    RuleOutcome::new(!offence, MESSAGE)
}

/// A title without an area/scope must start with an uppercase letter,
/// unless its first word is an identifier.
pub fn title_uppercase(header: &str) -> RuleOutcome {
    const MESSAGE: &str = "Please start the title with an upper-case letter if you are not using an area/scope.";

    if header.contains(':') {
        return RuleOutcome::pass(MESSAGE);
    }

    let offence = match header.split_whitespace().next() {
        Some(word) => {
            let starts_upper = word.chars().next().is_some_and(is_upper_case);
            let starts_lower = word.chars().next().is_some_and(is_lower_case);
            !starts_upper && starts_lower && !is_proper_noun(word)
        }
        None => false,
    };

    RuleOutcome::new(!offence, MESSAGE)
}

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static CONVENTIONAL_HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w*)(?:\((.*)\))?!?: (.*)$").unwrap());

/// Title without a `type(scope): subject` prefix.
pub fn type_empty(header: &str) -> RuleOutcome {
    let has_type = CONVENTIONAL_HEADER_PATTERN
        .captures(header)
        .and_then(|caps| caps.get(1))
        .is_some_and(|kind| !kind.as_str().is_empty());

    RuleOutcome::new(
        has_type,
        "Please prefix the title with a type or area, e.g. \"foo: subject\".",
    )
}

/// Exactly one space must follow the first colon.
pub fn type_space_after_colon(header: &str) -> RuleOutcome {
    let offence = match header.find(':') {
        Some(idx) if idx > 0 => {
            let after = &header[idx + 1..];
            !after.starts_with(' ') || after.starts_with("  ")
        }
        _ => false,
    };

    RuleOutcome::new(
        !offence,
        "Please place exactly one space after the first colon character in your commit message title.",
    )
}

/// Space after a comma in the scope.
pub fn type_space_after_comma(header: &str) -> RuleOutcome {
    let offence = scope_of(header).is_some_and(|scope| scope.contains(", "));
    RuleOutcome::new(
        !offence,
        "No need to use space after comma in the area/scope (so that commit title can be shorter).",
    )
}

/// Space before a parenthesis in the scope.
pub fn type_space_before_paren(header: &str) -> RuleOutcome {
    let offence = scope_of(header).is_some_and(|scope| {
        scope
            .find('(')
            .is_some_and(|paren| scope[..paren].ends_with(' '))
    });
    RuleOutcome::new(
        !offence,
        "No need to use space before parentheses in the area/scope/sub-area section of the title.",
    )
}

/// Title starting with a `[scope]` tag.
pub fn type_with_square_brackets(header: &str) -> RuleOutcome {
    let offence = header
        .strip_prefix('[')
        .is_some_and(|rest| rest.contains(']'));

    RuleOutcome::new(
        !offence,
        "Please use \"area/scope: subject\" or \"area(scope): subject\" style instead of wrapping area/scope under square brackets in your commit message title.",
    )
}
