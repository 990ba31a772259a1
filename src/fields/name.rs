use std::sync::LazyLock;

use regex::Regex;

/// Names are assumed to appear near the top of a resume; lines past this
/// bound are never considered.
const MAX_SCAN_LINES: usize = 10;

/// Accepted name length in characters, inclusive on both ends.
const MIN_LEN: usize = 4;
const MAX_LEN: usize = 50;

/// Section headers that disqualify a line as a name candidate.
const SECTION_HEADERS: [&str; 10] = [
    "resume",
    "cv",
    "curriculum vitae",
    "objective",
    "summary",
    "experience",
    "education",
    "skills",
    "contact",
    "profile",
];

// Strict shape: two to four Title-Case words.
static TITLE_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?: [A-Z][a-z]+){1,3}$").unwrap());

static LONG_DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{5,}").unwrap());

// A line made up solely of digits and phone punctuation.
static PHONE_LIKE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s()+.\-]+$").unwrap());

/// Scan the first lines of the text for the candidate's name.
///
/// Each line is tested against the skip rules, then the strict Title-Case
/// shape, then the loose capitalized-words fallback; the first line (top
/// to bottom) passing either shape wins. Trades recall for a low
/// false-positive rate: unusual name formats go unextracted rather than
/// risking a job title being returned as a name.
#[must_use]
pub fn extract(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_SCAN_LINES)
        .find(|line| {
            !is_contactish(line)
                && !contains_section_header(line)
                && (is_strict_name(line) || is_loose_name(line))
        })
        .map(ToString::to_string)
}

/// Line carries an email, a long digit run, or is entirely phone-like.
fn is_contactish(line: &str) -> bool {
    line.contains('@') || LONG_DIGIT_RUN_RE.is_match(line) || PHONE_LIKE_LINE_RE.is_match(line)
}

/// Line case-insensitively contains a resume section header.
fn contains_section_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    SECTION_HEADERS.iter().any(|header| lower.contains(header))
}

fn length_ok(line: &str) -> bool {
    let len = line.chars().count();
    (MIN_LEN..=MAX_LEN).contains(&len)
}

/// Strict rule: 2-4 words, each uppercase-first with lowercase remainder.
fn is_strict_name(line: &str) -> bool {
    length_ok(line) && TITLE_CASE_RE.is_match(line)
}

/// Loose fallback: 2-4 whitespace-separated words, all capitalized-first,
/// alphabetic only (no digits, no punctuation).
fn is_loose_name(line: &str) -> bool {
    if !length_ok(line) {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }
    words.iter().all(|word| {
        word.chars().next().is_some_and(char::is_uppercase)
            && word.chars().all(char::is_alphabetic)
    })
}
