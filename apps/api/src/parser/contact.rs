//! Name and contact-info heuristics.
//!
//! Contact scans run over the entire text, not just a "contact" section,
//! and duplicates are preserved as found. The name heuristic only looks at
//! the first three lines; the NER collaborator fallback lives at the
//! service layer (see `parser::resolve_name`).

use once_cell::sync::Lazy;
use regex::{Match, Regex};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern compiles")
});

/// Phone-shaped token groups: optional country code, optional area code
/// (possibly parenthesized), then a 3-4 digit pair with -/./space
/// separators. Digit-run adjacency is checked separately since the regex
/// crate has no look-around.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?(?:\d{3})?\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("phone pattern compiles")
});

/// Minimum plausible email length.
const MIN_EMAIL_LEN: usize = 5;

/// Tokens that disqualify a line from being the candidate name.
const NAME_STOPWORDS: &[&str] = &["resume", "cv", "curriculum"];

/// Email-shaped tokens across the whole text, duplicates preserved.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|e| e.len() >= MIN_EMAIL_LEN)
        .collect()
}

/// Phone-shaped token groups across the whole text, stripped to digits and
/// kept only when 10-15 digits remain. Duplicates preserved.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    PHONE_RE
        .find_iter(text)
        .filter(|m| !touches_digit(text, m))
        .map(|m| m.as_str().chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|digits| (10..=15).contains(&digits.len()))
        .collect()
}

/// Rejects candidates embedded in a longer digit run (serial numbers,
/// zip+id concatenations).
fn touches_digit(text: &str, m: &Match) -> bool {
    let before = text[..m.start()].chars().next_back();
    let after = text[m.end()..].chars().next();
    before.is_some_and(|c| c.is_ascii_digit()) || after.is_some_and(|c| c.is_ascii_digit())
}

/// First-three-lines name heuristic: a line of 1-3 whitespace-separated
/// tokens, none of which is a stopword, is accepted verbatim.
pub fn extract_name_heuristic(lines: &[String]) -> Option<String> {
    for line in lines.iter().take(3) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if (1..=3).contains(&parts.len())
            && !parts
                .iter()
                .any(|p| NAME_STOPWORDS.contains(&p.to_lowercase().as_str()))
        {
            return Some(line.clone());
        }
    }
    None
}
