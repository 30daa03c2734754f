//! Education extractor.
//!
//! Line 0 is the institution, line 1 the degree, lines 2+ the description.
//! Date patterns only drive entry splitting in the segmenter; they are
//! deliberately not recorded on the record, so `start_date`/`end_date`
//! stay empty.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::resume::EducationRecord;

/// Degree recognizers, evaluated in order. Used for diagnostics: the raw
/// degree line is recorded whether or not a pattern fires.
static DEGREE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(B\.?Tech|M\.?Tech|Ph\.?D|B\.?Sc|M\.?Sc|MBA|B\.?A|M\.?A|B\.?S|M\.?S|Bachelor|Master|Associate|Doctorate|Higher Secondary|Secondary)\b",
        r"(?i)\b(Bachelor|Master|Doctor|Associate)s?\s+of\s+[A-Za-z\s]+\b",
        r"(?i)\bHigher Secondary Education\b",
        r"(?i)\bSecondary Education\b",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("degree pattern compiles"))
    .collect()
});

const DEGREE_NOT_SPECIFIED: &str = "Degree not specified";
const INSTITUTION_NOT_SPECIFIED: &str = "Institution not specified";

/// Transforms segmented education entries into structured records.
pub fn parse_education(entries: &[Vec<String>]) -> Vec<EducationRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| parse_entry(idx, entry))
        .collect()
}

fn parse_entry(idx: usize, entry: &[String]) -> EducationRecord {
    let institution = entry.first().cloned().unwrap_or_default();

    let degree = if entry.len() >= 2 {
        let degree_line = entry[1].clone();
        if !DEGREE_PATTERNS.iter().any(|p| p.is_match(&degree_line)) {
            debug!(line = %degree_line, "no degree keyword recognized, keeping raw line");
        }
        degree_line
    } else {
        String::new()
    };

    let description = if entry.len() > 2 {
        entry[2..].join(" ")
    } else {
        String::new()
    };

    EducationRecord {
        id: idx,
        degree: non_empty_or(degree, DEGREE_NOT_SPECIFIED),
        institution: non_empty_or(institution, INSTITUTION_NOT_SPECIFIED),
        start_date: String::new(),
        end_date: String::new(),
        description,
    }
}

fn non_empty_or(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}
