//! Rules that look at the prose of the body.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::RuleOutcome;
use crate::lint::classify::{
    includes_hashtag_ref, is_commit_url, is_footer_note, is_lower_case, is_upper_case,
    is_valid_url, line_starts_with_bullet, remove_all_code_blocks, Line,
};
use crate::lint::segment::{body_of_raw, normalize_eols, paragraphs, prose_lines};

/// Length of a full SHA-1 commit hash in hex characters.
pub const FULL_HASH_LEN: usize = 40;

/// The line after the title must be blank.
pub fn body_leading_blank(raw: &str) -> RuleOutcome {
    const MESSAGE: &str = "Please leave a blank line between the title and the body.";

    let normalized = normalize_eols(raw);
    let offence = normalized
        .trim_end()
        .split('\n')
        .nth(1)
        .is_some_and(|second| !second.trim().is_empty());

    RuleOutcome::new(!offence, MESSAGE)
}

/// Paragraphs must start with an uppercase letter and end with punctuation.
///
/// URLs and footer notes are exempt, and so is anything inside a code block.
pub fn body_prose(raw: &str) -> RuleOutcome {
    const MESSAGE: &str = "Please begin a paragraph with uppercase letter and end it with a dot.";

    let Some(body) = body_of_raw(raw) else {
        return RuleOutcome::pass(MESSAGE);
    };

    for paragraph in paragraphs(&body) {
        let lines = paragraph.lines();
        let (Some(first_line), Some(last_line)) = (lines.first(), lines.last()) else {
            continue;
        };

        let starts_with_lower_case = paragraph.text().chars().next().is_some_and(is_lower_case);
        let is_lone_url = lines.len() == 1 && is_valid_url(first_line);
        if starts_with_lower_case && !is_lone_url {
            debug!(paragraph = paragraph.text(), "Paragraph starts with lowercase");
            return RuleOutcome::fail(format!(
                "{MESSAGE}\nThis paragraph starts with a lowercase letter: \"{}\"",
                first_line.as_str()
            ));
        }

        if !has_valid_ending(paragraph.text())
            && !is_valid_url(last_line)
            && !is_footer_note(*last_line)
        {
            debug!(paragraph = paragraph.text(), "Paragraph has no valid ending");
            return RuleOutcome::fail(format!(
                "{MESSAGE}\nThis paragraph does not end with a dot, colon, question or exclamation mark: \"{}\"",
                last_line.as_str()
            ));
        }
    }

    RuleOutcome::pass(MESSAGE)
}

/// A paragraph ends validly with a URL or with `.`, `:`, `!` or `?`, possibly
/// followed by closing parentheses as in `(like this.)` or `:)`.
fn has_valid_ending(paragraph: &str) -> bool {
    let mut text = paragraph.trim_end();
    loop {
        if text.split_whitespace().last().is_some_and(is_valid_url) {
            return true;
        }
        match text.chars().last() {
            Some('.' | ':' | '!' | '?') => return true,
            Some(')') => text = &text[..text.len() - 1],
            _ => return false,
        }
    }
}

/// Body lines must not exceed the limit.
///
/// URLs, footer notes and lines pushed over the limit only by a trailing
/// commit hash are tolerated. Code blocks are not checked.
pub fn body_soft_max_line_length(body: Option<&str>, max_length: usize) -> RuleOutcome {
    let message = format!(
        "Please do not exceed {max_length} characters in the lines of the commit message's body; \
         we recommend this unix command (for editing the last commit message):\n\
         git log --format=%B -n 1 | fmt -w 1111 -s | fmt -w {max_length} -s > msg.txt && git commit --amend -F msg.txt"
    );

    let Some(body) = body else {
        return RuleOutcome::pass(message);
    };

    let normalized = normalize_eols(body);
    for line in prose_lines(&normalized) {
        if line.char_len() > max_length
            && !is_valid_url(&line)
            && !is_footer_note(line)
            && !ends_with_commit_hash_within(line, max_length)
        {
            return RuleOutcome::fail(format!("{message}\nOffending line: \"{}\"", line.as_str()));
        }
    }

    RuleOutcome::pass(message)
}

/// Returns `true` if the line ends with a full commit hash (optionally
/// followed by one punctuation mark) that starts before `max_length`.
fn ends_with_commit_hash_within(line: Line<'_>, max_length: usize) -> bool {
    let text = line.as_str();
    let text = match text.chars().last() {
        Some(c) if c.is_ascii_punctuation() => &text[..text.len() - 1],
        _ => text,
    };

    let Some(hash_start) = text.len().checked_sub(FULL_HASH_LEN) else {
        return false;
    };
    if !text.is_char_boundary(hash_start) {
        return false;
    }

    let (prefix, hash) = text.split_at(hash_start);
    hash.chars().all(|c| c.is_ascii_hexdigit())
        && (prefix.is_empty() || prefix.ends_with(char::is_whitespace))
        && prefix.chars().count() < max_length
}

/// Non-final lines of a paragraph must not be wrapped too early.
///
/// A line counts as wrapped too early when it is shorter than `min_length`
/// and the first word of the next line would still have fit on it.
pub fn body_paragraph_line_min_length(
    raw: &str,
    min_length: usize,
    max_length: usize,
) -> RuleOutcome {
    let message = format!(
        "Please do not subceed {min_length} characters in the lines of the commit message's body \
         paragraphs; only break a line before {max_length} characters when the next word does not fit."
    );

    let Some(body) = body_of_raw(raw) else {
        return RuleOutcome::pass(message);
    };

    for paragraph in paragraphs(&body) {
        if let Some(line) = find_short_line(&paragraph.lines(), min_length, max_length) {
            debug!(line = line.as_str(), "Paragraph line wrapped too early");
            return RuleOutcome::fail(format!("{message}\nOffending line: \"{}\"", line.as_str()));
        }
    }

    RuleOutcome::pass(message)
}

fn all_bullets(lines: &[Line<'_>]) -> bool {
    lines.iter().all(|line| line_starts_with_bullet(*line))
}

/// Returns the first non-final line of a paragraph that is wrapped too early.
///
/// Bullet lists are allowed once the paragraph starts with a bullet or a
/// line ends with a colon; if every remaining non-final line is a bullet,
/// nothing is reported. Blank lines left by a removed code block break the
/// paragraph on purpose.
fn find_short_line<'a>(
    lines: &[Line<'a>],
    min_length: usize,
    max_length: usize,
) -> Option<Line<'a>> {
    let (_, non_final) = lines.split_last()?;
    let mut bullets_allowed = non_final
        .first()
        .is_some_and(|line| line_starts_with_bullet(*line));
    if bullets_allowed && all_bullets(non_final) {
        return None;
    }

    for (index, pair) in lines.windows(2).enumerate() {
        let (line, next) = (pair[0], pair[1]);

        if line.is_blank() || next.is_blank() {
            continue;
        }

        if line.ends_with(':') {
            bullets_allowed = true;
            let remainder = &non_final[index + 1..];
            if !remainder.is_empty() && all_bullets(remainder) {
                return None;
            }
        }

        if is_intentional_break(line, next, bullets_allowed, max_length) {
            continue;
        }

        if line.char_len() < min_length {
            return Some(line);
        }
    }

    None
}

fn is_intentional_break(
    line: Line<'_>,
    next: Line<'_>,
    bullets_allowed: bool,
    max_length: usize,
) -> bool {
    if is_valid_url(&line) || is_valid_url(next.trim()) || is_footer_note(line) {
        return true;
    }

    let next_word_len = next.first_word().map_or(0, |word| word.chars().count());
    if line.char_len() + 1 + next_word_len > max_length {
        return true;
    }

    // Sub-heading such as "Expected results:" followed by a sentence.
    if line.ends_with(':') && next.chars().next().is_some_and(is_upper_case) {
        return true;
    }

    bullets_allowed
        && line_starts_with_bullet(next)
        && (line_starts_with_bullet(line) || line.ends_with('.') || line.ends_with(':'))
}

/// Issues must be referenced by full URL, not `#123`.
pub fn proper_issue_refs(raw: &str) -> RuleOutcome {
    const MESSAGE: &str = "Please use full URLs instead of #XYZ refs.";

    let offence = body_of_raw(raw)
        .is_some_and(|body| includes_hashtag_ref(&remove_all_code_blocks(&body)));

    RuleOutcome::new(!offence, MESSAGE)
}

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^\s]+").unwrap());

/// Commits of the same repository must be referred to by hash, not URL.
///
/// Links to commits of other repositories are fine. Without a configured
/// repository the rule cannot tell the two apart and passes.
pub fn commit_hash_alone(raw: &str, repository: Option<&str>) -> RuleOutcome {
    const MESSAGE: &str = "Please use the commit hash instead of the commit full URL.";

    let Some(repository) = repository.filter(|repo| !repo.is_empty()) else {
        return RuleOutcome::pass(MESSAGE);
    };

    let offending = URL_PATTERN
        .find_iter(raw)
        .map(|m| m.as_str())
        .find(|url| is_commit_url(url) && url.contains(repository));

    match offending {
        Some(url) => RuleOutcome::fail(format!("{MESSAGE}\nOffending URL: {url}")),
        None => RuleOutcome::pass(MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: &str = "foo: this is only a title";

    fn message(body: &str) -> String {
        format!("{TITLE}\n\n{body}")
    }

    // --- body-leading-blank ---

    #[test]
    fn leading_blank() {
        assert!(!body_leading_blank("foo: this is only a title\nBar baz.").valid);
        assert!(body_leading_blank(&message("Bar baz.")).valid);
        assert!(body_leading_blank(TITLE).valid);
        assert!(body_leading_blank("foo: title\r\n\r\nBar baz.").valid);
    }

    // --- body-prose ---

    #[test]
    fn prose_rejects_lowercase_start() {
        assert!(!body_prose(&message("bla blah bla.")).valid);
    }

    #[test]
    fn prose_accepts_non_letters_and_urls() {
        assert!(body_prose(&message("1234 bla blah bla.")).valid);
        assert!(body_prose(&message("someUrl://blahblah.com")).valid);
        assert!(body_prose(&message("Bla blah[1] bla.\n\n[1] someUrl://blahblah.com")).valid);
    }

    #[test]
    fn prose_accepts_footer_notes() {
        assert!(body_prose(&message("Fixes someUrl://blahblah.com")).valid);
        assert!(body_prose(&message("Closes someUrl://blahblah.com")).valid);
        assert!(body_prose(&message("Co-authored-by: Jon Doe <jondoe@example.com>")).valid);
    }

    #[test]
    fn prose_ignores_code_blocks() {
        assert!(body_prose(&message("Bar baz.\n\n```\nif (foo) { bar(); }\n```")).valid);
        let large = "Network,TorHandshakes: handle handshake fail\n\n\
                     ```\nThe active test run was aborted. System.Exception: Key handshake failed!\n\n\
                     at System.Threading.ThreadPoolWorkQueue.Dispatch()\n```";
        assert!(body_prose(large).valid);
        let with_ref = "Backend/Ether: catch/retry new -32002 err code\n\n\
                        CI on master branch caught this[1]:\n\n\
                        ```\nUnhandled Exception\n```\n\n\
                        [1] https://github.com/nblockchain/geewallet/actions/runs/3507005645/jobs/5874411684";
        assert!(body_prose(with_ref).valid);
    }

    #[test]
    fn prose_code_block_inside_paragraph() {
        let body = "Run this command\n```\nls -la\n```\nand observe the output.";
        assert!(body_prose(&message(body)).valid);
        // A blank line before the block still ends the paragraph
        let split = "Run this command\n\n```\nls -la\n```\nand observe the output.";
        assert!(!body_prose(&message(split)).valid);
    }

    #[test]
    fn prose_endings() {
        assert!(body_prose(&message("Bar baz:\n\nBlah blah.")).valid);
        assert!(body_prose(&message("Increase verbosity, because why not?\n\nBlah blah.")).valid);
        assert!(body_prose(&message("Increase verbosity, because why not!\n\nBlah blah.")).valid);
        assert!(!body_prose(&message("Bar baz")).valid);
    }

    #[test]
    fn prose_endings_inside_parentheses() {
        let body = "Paragraph begin. (Some text inside parens.)\n\n\
                    Paragraph begin. (Some text inside parens?)\n\n\
                    Paragraph begin. (Some text inside parens!)\n\n\
                    Paragraph begin. Now a smiley! :)\n\n\
                    Blah blah.";
        assert!(body_prose(&message(body)).valid);
        assert!(!body_prose(&message("Paragraph begin. (Some text inside parens)")).valid);
    }

    #[test]
    fn prose_ending_with_url() {
        let body = "Foo bar:\nhttps://github.com/username/repo/commit/1234567891234567891234567891234567891234";
        assert!(body_prose(&message(body)).valid);
        let body = "Strangely enough it asks to install a workload.\n\n\
                    Original PR: https://github.com/nblockchain/geewallet/pull/190";
        assert!(body_prose(&message(body)).valid);
    }

    #[test]
    fn prose_with_windows_eols() {
        let raw = "title: this is only title\r\n\r\n\
                   Lorem ipsum dolor sit amet, consectetur adipiscing elit\r\n\
                   lorem ipsum dolor sit amet, consectetur porttitor jidga\r\n\
                   nam sed porttitor turpis, vitae erat curae.";
        assert!(body_prose(raw).valid);
    }

    #[test]
    fn prose_without_body() {
        assert!(body_prose(TITLE).valid);
    }

    #[test]
    fn valid_endings_loop_over_parentheses() {
        assert!(has_valid_ending("Done.)))"));
        assert!(!has_valid_ending(&")".repeat(500)));
    }

    // --- body-soft-max-line-length ---

    fn soft_max(body: &str) -> bool {
        body_soft_max_line_length(Some(body), 64).valid
    }

    #[test]
    fn soft_max_line_length_limit() {
        let sixty = "1234 67890".repeat(6);
        assert!(soft_max(&format!("{sixty}123.")));
        assert!(!soft_max(&format!("{sixty}1234.")));
    }

    #[test]
    fn soft_max_line_length_exemptions() {
        let seventy = "1234567890".repeat(7);
        assert!(soft_max(&format!("someUrl://{seventy}")));
        assert!(soft_max(&format!("Bla blah[1] bla.\n\n[1] someUrl://{seventy}")));
        assert!(soft_max(&format!("Fixes someUrl://{seventy}")));
        assert!(soft_max(&format!("Co-authored-by: Jon Doe <{seventy}@example.com>")));
    }

    #[test]
    fn soft_max_line_length_skips_code_blocks() {
        let seventy = "1234 67890".repeat(7);
        assert!(soft_max(&format!("Bar baz.\n```\n{seventy}\n```")));
    }

    #[test]
    fn soft_max_line_length_fails_plain_long_lines() {
        let body = "--- Line between dashes ---\n\
                    A very long line. A very long line. A very long line. A very long line. A very long line.";
        assert!(!body_soft_max_line_length(Some(body), 64).valid);
    }

    #[test]
    fn soft_max_line_length_trailing_commit_hash() {
        let body = "These mistakes were made in 45faeca2f0e7c9c5545f54fb3fcc815f52b8a7cf.";
        assert!(body_soft_max_line_length(Some(body), 64).valid);

        let body = "These mistakes were made in this GrpcService's RunIntoMeService commit: \
                    45faeca2f0e7c9c5545f54fb3fcc815f52b8a7cf.";
        assert!(!body_soft_max_line_length(Some(body), 64).valid);
    }

    #[test]
    fn soft_max_line_length_without_body() {
        assert!(body_soft_max_line_length(None, 64).valid);
    }

    // --- body-paragraph-line-min-length ---

    fn min_length(raw: &str) -> bool {
        body_paragraph_line_min_length(raw, 50, 64).valid
    }

    #[test]
    fn min_length_rejects_early_wrap() {
        let forty = "1234 67890".repeat(4);
        let sixty = "1234 67890".repeat(6);
        assert!(!min_length(&message(&format!("{forty}.\n{sixty}."))));
    }

    #[test]
    fn min_length_ignores_last_line_and_code() {
        let forty = "1234 67890".repeat(4);
        let sixty = "1234 67890".repeat(6);
        assert!(min_length(&message(&format!("{forty}."))));
        assert!(min_length(&message(&format!("Bar baz.\n```\n{forty}.\n{sixty}.\n```"))));
        assert!(min_length(&message(
            "Body with a link [1]:\n```\nsome code block\n```\n\n[1] https://foo.com/bar"
        )));
    }

    #[test]
    fn min_length_exemptions() {
        assert!(min_length(&message(
            "Foo bar:\nhttps://github.com/username/repo/commit/1234567891234567891234567891234567891234"
        )));
        assert!(min_length(&message(
            "Co-authored-by: Jon Doe <shortmail@example.com>\n\
             Co-authored-by: Jon Doe <JonDoeEmailAddress@example.com>"
        )));
        assert!(min_length(
            "Some title of less than 50 chars\n\n\
             This is a paragraph whose 2nd line is less than 50 chars\n\
             but should not make commitlint complain because\n\
             TheNextWordInThe3rdLineIsTooLongToBePlacedIn2ndLine."
        ));
        assert!(min_length(
            "Fixed bug (a title of less than 50 chars)\n\n\
             These were the steps to reproduce:\nDo foo.\n\n\
             Current results:\nBar happens.\n\n\
             Expected results:\nBaz happens."
        ));
    }

    #[test]
    fn min_length_bullets() {
        for body in [
            "This is a bullet list of things:\n* Foo.\n* Bar.",
            "This is a bullet list of things:\n- Foo.\n- Bar.",
            "* Foo.\n* Bar.",
            "- Foo.\n- Bar.",
            "This is a bullet list of things:\n1. Foo.\n2. Bar.",
            "1. Foo.\n2. Bar.",
        ] {
            assert!(min_length(&message(body)), "{body}");
        }
    }

    #[test]
    fn min_length_bullets_followed_by_closing_line() {
        for body in [
            "* Foo.\n* Bar.\nBaz.",
            "1. Foo.\n2. Bar.\nBaz.",
            "This is a bullet list of things:\n- Foo.\n- Bar.\nThat is all.",
        ] {
            assert!(min_length(&message(body)), "{body}");
        }
        // Prose before the list still counts
        assert!(!min_length(&message("Too short.\nAnother line here.\n* Foo.\nBaz.")));
    }

    #[test]
    fn min_length_code_block_inside_paragraph() {
        assert!(min_length(&message(
            "Run this command\n```\nls -la\n```\nand observe the output."
        )));
    }

    #[test]
    fn min_length_multi_line_bullets() {
        let wrapped = "* Foo bar baz foo bar baz foo bar baz foo bar baz foo bar baz\n\
                       foo bar baz.\n\
                       * Baz bar foo.";
        assert!(min_length(&message(&format!(
            "This is a bullet list of things:\n{wrapped}"
        ))));
        assert!(min_length(&message(wrapped)));
    }

    // --- proper-issue-refs ---

    #[test]
    fn issue_refs() {
        assert!(!proper_issue_refs(&message("Blah blah #123.")).valid);
        assert!(!proper_issue_refs(&message("#123 bug is fixed.")).valid);
        assert!(proper_issue_refs(&message("Fixes someUrl://blah.blah/158")).valid);
        assert!(proper_issue_refs(&message("Bar baz:\n\n```\ntype Foo = string #123\n```")).valid);
        assert!(proper_issue_refs(&message(
            "Some paragraph text with a ref[1].\n\n\
             [1] someUrl://someHostName/someFolder/someResource#666-anchor"
        ))
        .valid);
    }

    #[test]
    fn issue_refs_in_title_are_not_checked() {
        assert!(proper_issue_refs("Merge PR #42 from foo/bar").valid);
    }

    // --- commit-hash-alone ---

    #[test]
    fn commit_url_of_same_repository() {
        let raw = message(
            "https://github.com/nblockchain/conventions/commit/3ee07243edc30604088a4b04ca525204ea440710",
        );
        let outcome = commit_hash_alone(&raw, Some("nblockchain/conventions"));
        assert!(!outcome.valid);
        assert!(outcome.message.contains("/commit/3ee07243"));
    }

    #[test]
    fn commit_hash_or_external_url() {
        let repo = Some("nblockchain/conventions");
        let raw = message(
            "This is referring to [1] commit hash.\n\n[1] 3ee07243edc30604088a4b04ca525204ea440710",
        );
        assert!(commit_hash_alone(&raw, repo).valid);

        let raw = message(
            "https://github.com/anotherOrg/anotherRepo/commit/3ee07243edc30604088a4b04ca525204ea440710",
        );
        assert!(commit_hash_alone(&raw, repo).valid);
    }

    #[test]
    fn commit_url_without_repository() {
        let raw = message("https://github.com/org/repo/commit/3ee07243edc30604088a4b04ca525204ea440710");
        assert!(commit_hash_alone(&raw, None).valid);
        assert!(commit_hash_alone(&raw, Some("")).valid);
    }
}
