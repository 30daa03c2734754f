//! Date heuristics shared by the experience and certifications extractors.
//!
//! An explicit "date1 - date2" range wins over a single bare date; the
//! single-date fallback fills only the start. Nothing here ever fails:
//! unparseable text yields a pair of empty strings.

use once_cell::sync::Lazy;
use regex::Regex;

const MONTH: &str = "(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)";

/// "Jan 2019 - Dec 2021", "2016 - 2020", "Mar 2020 – Present".
/// Accepts hyphen and en-dash separators.
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b({MONTH}[a-z]*\.?\s*\d{{2,4}}|{MONTH}[a-z]*\.?|\d{{4}})\s*[-–]\s*({MONTH}[a-z]*\.?\s*\d{{2,4}}|{MONTH}[a-z]*\.?|\d{{4}}|Present)\b"
    ))
    .expect("date range pattern compiles")
});

/// A single date: month-year, bare year, or "Present".
static SINGLE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{MONTH}[a-z]*\.?\s*\d{{4}}|{MONTH}[a-z]*\.?\s*\d{{2}}|\d{{4}}|Present)\b"
    ))
    .expect("single date pattern compiles")
});

/// Extracts a `(start, end)` date pair from free text.
pub fn extract_date_range(text: &str) -> (String, String) {
    if let Some(caps) = DATE_RANGE_RE.captures(text) {
        return (
            caps[1].trim().to_string(),
            caps[2].trim().to_string(),
        );
    }
    if let Some(m) = SINGLE_DATE_RE.find(text) {
        return (m.as_str().trim().to_string(), String::new());
    }
    (String::new(), String::new())
}
