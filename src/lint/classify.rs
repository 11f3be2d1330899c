//! Line and character classification.
//!
//! Pure predicates over a single line of a commit message, or a single
//! character of it. Lines are carried as [`Line`], which cannot contain a line
//! break, so the single-line contract is checked once at construction time
//! instead of at every predicate.

use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::error::ContractError;

/// Delimiter line that opens and closes a code block.
pub const CODE_BLOCK_DELIMITER: &str = "```";

/// A single line of text, guaranteed not to contain `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a>(&'a str);

impl<'a> Line<'a> {
    /// Wraps `text` as a line, rejecting text that contains a line break.
    pub fn new(text: &'a str) -> Result<Self, ContractError> {
        if text.contains('\n') {
            return Err(ContractError::NotALine(text.to_string()));
        }
        Ok(Self(text))
    }

    /// Wraps one piece of a `'\n'` split.
    pub(crate) fn from_split(text: &'a str) -> Self {
        debug_assert!(!text.contains('\n'));
        Self(text)
    }

    /// Returns the underlying text.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Length in characters, which is what line-length limits count.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns the first whitespace-separated word, if any.
    pub fn first_word(&self) -> Option<&'a str> {
        self.0.split_whitespace().next()
    }

    /// Returns `true` for empty or whitespace-only lines.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Deref for Line<'_> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

/// Extracts the only character of `text`.
pub fn single_char(text: &str) -> Result<char, ContractError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ContractError::NotACharacter(text.to_string())),
    }
}

/// Returns `true` for a line that opens or closes a code block.
pub fn is_code_block_delimiter(line: Line<'_>) -> bool {
    line.as_str() == CODE_BLOCK_DELIMITER
}

/// Returns `true` for a reference definition such as `[1] https://...`.
pub fn is_footer_reference(line: Line<'_>) -> bool {
    line.starts_with('[') && line.find(']').is_some_and(|idx| idx > 1)
}

/// Returns `true` for a reference definition with nothing after its `]`.
///
/// This usually means the value was pushed onto the next line by a line
/// break, as in `"[1]\nhttps://..."`.
pub fn is_empty_footer_reference(line: Line<'_>) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('[') && trimmed.find(']') == Some(trimmed.len() - 1)
}

/// Returns `true` for `Fixes ...` and `Closes ...` issue links.
pub fn is_fixes_or_closes_sentence(line: Line<'_>) -> bool {
    line.starts_with("Fixes ") || line.starts_with("Closes ")
}

/// Returns `true` for a `Co-authored-by:` trailer.
pub fn is_co_authored_by_tag(line: Line<'_>) -> bool {
    line.starts_with("Co-authored-by: ")
}

/// Returns `true` if the line belongs in the footer of a message.
pub fn is_footer_note(line: Line<'_>) -> bool {
    is_footer_reference(line) || is_co_authored_by_tag(line) || is_fixes_or_closes_sentence(line)
}

/// Returns `true` for `* item`, `- item` and `1. item` style lines.
pub fn line_starts_with_bullet(line: Line<'_>) -> bool {
    let text = line.as_str();
    if let Some(rest) = text.strip_prefix("* ").or_else(|| text.strip_prefix("- ")) {
        return !rest.trim().is_empty();
    }

    let digits = text.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && text[digits..].starts_with('.')
}

/// Returns `true` if `text` parses as an absolute URL and has no spaces.
pub fn is_valid_url(text: &str) -> bool {
    if text.contains(' ') {
        return false;
    }
    Url::parse(text).is_ok()
}

/// Returns `true` if `url` points at a single commit.
pub fn is_commit_url(url: &str) -> bool {
    is_valid_url(url) && url.contains("/commit/")
}

/// A character is uppercase iff uppercasing leaves it unchanged and
/// lowercasing does not. Digits and punctuation are neither upper nor lower.
pub fn is_upper_case(letter: char) -> bool {
    maps_to_itself(letter.to_uppercase(), letter) && !maps_to_itself(letter.to_lowercase(), letter)
}

/// Mirror of [`is_upper_case`].
pub fn is_lower_case(letter: char) -> bool {
    maps_to_itself(letter.to_lowercase(), letter) && !maps_to_itself(letter.to_uppercase(), letter)
}

fn maps_to_itself(mut mapped: impl Iterator<Item = char>, letter: char) -> bool {
    mapped.next() == Some(letter) && mapped.next().is_none()
}

fn count_upper_case(word: &str) -> usize {
    word.chars().filter(|c| is_upper_case(*c)).count()
}

/// Heuristic for identifiers that are allowed to break capitalization rules:
/// acronyms (`BAR`), PascalCase (`TestFixtureSetup`), camelCase
/// (`testFixtureSetup`) and anything with digits or punctuation (`End2End`).
pub fn is_proper_noun(word: &str) -> bool {
    let Some(first) = word.chars().next() else {
        return false;
    };

    if word.chars().any(|c| !c.is_alphabetic()) {
        return true;
    }

    let upper_case = count_upper_case(word);
    (is_upper_case(first) && upper_case > 1) || (is_lower_case(first) && upper_case > 0)
}

/// Returns `true` for a plain capitalized word such as `Bar`, which suggests
/// a new sentence rather than an identifier.
pub fn word_is_start_of_sentence(word: &str) -> bool {
    match word.chars().next() {
        Some(first) if is_upper_case(first) => {
            count_upper_case(word) == 1 && word.chars().all(char::is_alphabetic)
        }
        _ => false,
    }
}

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static HASHTAG_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)#[0-9]+").unwrap());

/// Returns `true` if `text` contains a GitHub-style `#123` reference.
///
/// Only matches at the start of the text or after whitespace, so URL anchors
/// (`page#7-intro`) and colors (`color#123abc`) are not reported.
pub fn includes_hashtag_ref(text: &str) -> bool {
    HASHTAG_REF_PATTERN.is_match(text)
}

/// Removes every ```` ``` … ``` ```` span, pairing each opening fence with
/// the nearest following one. An unpaired fence is left in place.
pub fn remove_all_code_blocks(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(CODE_BLOCK_DELIMITER) {
        let after_open = &rest[open + CODE_BLOCK_DELIMITER.len()..];
        let Some(close) = after_open.find(CODE_BLOCK_DELIMITER) else {
            break;
        };
        result.push_str(&rest[..open]);
        rest = &after_open[close + CODE_BLOCK_DELIMITER.len()..];
    }

    result.push_str(rest);
    result
}
