//! Splitting commit message text into header, body, paragraphs and lines.

use super::classify::{is_code_block_delimiter, remove_all_code_blocks, Line};

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_eols(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Splits `text` on each run of `eols` consecutive line breaks.
///
/// `eols == 1` yields lines and `eols == 2` yields blank-line separated
/// paragraphs. Longer runs leave their extra line breaks on the following
/// piece, so callers that split paragraphs trim each piece.
pub fn split_by_eols(text: &str, eols: usize) -> Vec<&str> {
    let separator = "\n".repeat(eols.max(1));
    text.split(separator.as_str()).collect()
}

/// Iterates over the lines of `text`, which must already be normalized.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    split_by_eols(text, 1).into_iter().map(Line::from_split)
}

/// Splits normalized text into its header line and the trimmed remainder.
///
/// The remainder is `None` when the text has no line break at all, and
/// `Some("")` when there is one but nothing follows it.
pub fn split_header(text: &str) -> (&str, Option<&str>) {
    match text.split_once('\n') {
        Some((header, rest)) => (header, Some(rest.trim())),
        None => (text, None),
    }
}

/// Recovers the body from the raw message text.
///
/// Some hosts drop trailing footer lines from the body they hand over, so
/// rules that need the whole body derive it from the raw text instead.
pub fn body_of_raw(raw: &str) -> Option<String> {
    let normalized = normalize_eols(raw);
    let (_, body) = split_header(normalized.trim());
    body.map(str::to_string)
}

/// A blank-line separated block of body text, code blocks removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    /// Returns the trimmed paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the lines of the paragraph; never empty.
    pub fn lines(&self) -> Vec<Line<'_>> {
        lines(&self.text).collect()
    }
}

/// Splits a body into paragraphs.
///
/// Only blank lines outside code blocks separate paragraphs, so a block
/// containing a blank line is never cut in two and a block sitting inside a
/// paragraph does not split it. Code blocks are then removed from each
/// paragraph, and paragraphs left empty are skipped.
pub fn paragraphs(body: &str) -> Vec<Paragraph> {
    let normalized = normalize_eols(body);
    let mut tracker = CodeBlockTracker::default();
    let mut chunks: Vec<Vec<&str>> = vec![Vec::new()];

    for line in lines(&normalized) {
        if line.is_empty() && !tracker.is_inside() {
            chunks.push(Vec::new());
            continue;
        }
        tracker.is_prose(line);
        if let Some(chunk) = chunks.last_mut() {
            chunk.push(line.as_str());
        }
    }

    chunks
        .iter()
        .map(|chunk| remove_all_code_blocks(&chunk.join("\n")))
        .filter_map(|text| {
            let text = text.trim();
            (!text.is_empty()).then(|| Paragraph {
                text: text.to_string(),
            })
        })
        .collect()
}

/// Tracks whether a line-by-line scan is inside a code block.
///
/// Each delimiter line toggles the state, so an unpaired delimiter keeps the
/// rest of the message inside a block.
#[derive(Debug, Default)]
pub struct CodeBlockTracker {
    inside: bool,
}

impl CodeBlockTracker {
    /// Feeds the next line and returns `true` if it is prose to be checked,
    /// i.e. neither a delimiter nor inside a block.
    pub fn is_prose(&mut self, line: Line<'_>) -> bool {
        if is_code_block_delimiter(line) {
            self.inside = !self.inside;
            return false;
        }
        !self.inside
    }

    /// Returns `true` while inside an open code block.
    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

/// Returns the lines of `text` that lie outside code blocks.
pub fn prose_lines(text: &str) -> Vec<Line<'_>> {
    let mut tracker = CodeBlockTracker::default();
    lines(text).filter(|line| tracker.is_prose(*line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_windows_and_mac_eols() {
        assert_eq!(normalize_eols("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn split_by_one_and_two_eols() {
        assert_eq!(split_by_eols("a\nb\n\nc", 1), vec!["a", "b", "", "c"]);
        assert_eq!(split_by_eols("a\nb\n\nc", 2), vec!["a\nb", "c"]);
    }

    #[test]
    fn header_and_body() {
        assert_eq!(split_header("title"), ("title", None));
        assert_eq!(split_header("title\n"), ("title", Some("")));
        assert_eq!(split_header("title\n\nBody.\n"), ("title", Some("Body.")));
    }

    #[test]
    fn body_of_raw_normalizes_and_trims() {
        assert_eq!(body_of_raw("title"), None);
        assert_eq!(
            body_of_raw("title\r\n\r\nBody.\r\n").as_deref(),
            Some("Body.")
        );
    }

    #[test]
    fn paragraphs_skip_code_blocks() {
        let body = "Bar baz.\n\n```\nfirst\n\nsecond\n```\n\nEnd.";
        let texts: Vec<String> = paragraphs(body)
            .iter()
            .map(|p| p.text().to_string())
            .collect();
        assert_eq!(texts, vec!["Bar baz.", "End."]);
    }

    #[test]
    fn paragraph_lines() {
        let paragraphs = paragraphs("One\ntwo.\n\n\nThree.");
        assert_eq!(paragraphs.len(), 2);
        let first: Vec<&str> = paragraphs[0].lines().iter().map(|l| l.as_str()).collect();
        assert_eq!(first, vec!["One", "two."]);
        assert_eq!(paragraphs[1].text(), "Three.");
    }

    #[test]
    fn code_block_inside_a_paragraph_does_not_split_it() {
        let body = "Run this command\n```\nls -la\n```\nand observe the output.\n\nEnd.";
        let paragraphs = paragraphs(body);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(
            paragraphs[0].text(),
            "Run this command\n\nand observe the output."
        );
        assert_eq!(paragraphs[1].text(), "End.");
    }

    #[test]
    fn whitespace_only_line_is_not_a_separator() {
        let paragraphs = paragraphs("One\n  \nTwo.");
        assert_eq!(paragraphs.len(), 1);
    }

    #[test]
    fn tracker_toggles_on_delimiters() {
        let text = "before\n```\ninside\n```\nafter";
        let prose: Vec<&str> = prose_lines(text).iter().map(|l| l.as_str()).collect();
        assert_eq!(prose, vec!["before", "after"]);
    }

    #[test]
    fn unpaired_delimiter_hides_the_rest() {
        let text = "before\n```\ninside\nstill inside";
        let prose: Vec<&str> = prose_lines(text).iter().map(|l| l.as_str()).collect();
        assert_eq!(prose, vec!["before"]);

        let mut tracker = CodeBlockTracker::default();
        for line in lines(text) {
            tracker.is_prose(line);
        }
        assert!(tracker.is_inside());
    }
}
