use std::sync::LazyLock;

use regex::Regex;

// Either a separated number (optional +country prefix, parenthesized or
// plain area code, two further digit groups) or a bare 10-digit run.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}|\d{10}").unwrap()
});

/// First phone-shaped match in document order, normalized to digits with
/// an optional leading `+`. No plausibility validation beyond the pattern.
#[must_use]
pub fn extract(text: &str) -> Option<String> {
    let raw = PHONE_RE.find(text)?.as_str();
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if raw.starts_with('+') {
        Some(format!("+{digits}"))
    } else {
        Some(digits)
    }
}
