//! Abbreviation suggestions for over-long titles.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use super::abbreviations::{Abbreviation, ABBREVIATIONS};

/// Whole-word matchers for every abbreviation, compiled once.
static MATCHERS: LazyLock<Vec<(&'static Abbreviation, Regex)>> = LazyLock::new(|| {
    ABBREVIATIONS
        .iter()
        .filter_map(|entry| {
            let pattern = format!(r"\b{}\b", regex::escape(&entry.long_form.to_lowercase()));
            match Regex::new(&pattern) {
                Ok(regex) => Some((entry, regex)),
                Err(e) => {
                    warn!(long_form = entry.long_form, "Skipping abbreviation: {e}");
                    None
                }
            }
        })
        .collect()
});

/// Returns the abbreviations whose long form appears in `text` as a whole
/// word, in table order.
///
/// `text` is expected to be lowercased already.
pub fn find_abbreviations(text: &str) -> Vec<&'static Abbreviation> {
    MATCHERS
        .iter()
        .filter(|(_, regex)| regex.is_match(text))
        .map(|(entry, _)| *entry)
        .collect()
}

/// Returns the part of a title that suggestions apply to: everything from the
/// first colon on, or the whole title when there is no colon. Lowercased.
pub fn scope_stripped(header: &str) -> String {
    let subject = header.find(':').map_or(header, |idx| &header[idx..]);
    subject.to_lowercase()
}

/// Appends one `"long" -> "short"` line per abbreviation to `message`.
pub fn append_suggestions(message: &mut String, suggestions: &[&Abbreviation]) {
    if suggestions.is_empty() {
        return;
    }

    message.push_str("\nThe following replacement(s) in your commit title are recommended:\n");
    for entry in suggestions {
        message.push_str(&format!(
            "\"{}\" -> \"{}\"\n",
            entry.long_form, entry.short_form
        ));
    }
}
