//! Experience extractor.
//!
//! Title/company resolution is an explicit precedence cascade, evaluated
//! per line in order:
//!
//! 1. preposition split — a line containing "at"/"for"/"with" is split on
//!    the first preposition; the left segment fills the title (if unset),
//!    the right segment sets the company (later lines overwrite);
//! 2. role-keyword patterns — fill the title only when still unset;
//! 3. positional fallback — when neither resolved anything, line 0 is the
//!    title and line 1 the company.
//!
//! The preposition split runs first so "Software Engineer at TechCorp"
//! yields the full title, not the bare keyword "Engineer".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ExperienceRecord;
use crate::parser::dates::extract_date_range;
use crate::parser::skills::match_skills;

/// Role-keyword patterns, evaluated in order; first match wins.
static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?i)\b(Developer|Engineer|Intern|Manager|Analyst|Designer|Consultant|Director|Lead|Coordinator|Specialist)\b",
        )
        .expect("role keyword pattern compiles"),
        Regex::new(r"(?i)\b(Senior|Junior|Principal|Associate|Assistant)\s+[A-Za-z\s]+\b")
            .expect("qualified role pattern compiles"),
    ]
});

/// Word-bounded split on the title/company prepositions.
static COMPANY_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bat\b|\bfor\b|\bwith\b").expect("company split pattern compiles"));

/// Cheap lower-cased containment check before running the split regex.
const COMPANY_INDICATORS: &[&str] = &["at ", "for ", "with "];

const POSITION_NOT_SPECIFIED: &str = "Position not specified";
const COMPANY_NOT_SPECIFIED: &str = "Company not specified";

/// Transforms segmented experience entries into structured records.
pub fn parse_experience(entries: &[Vec<String>]) -> Vec<ExperienceRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| parse_entry(idx, entry))
        .collect()
}

fn parse_entry(idx: usize, entry: &[String]) -> ExperienceRecord {
    let entry_text = entry.join("\n");
    let (start_date, end_date) = extract_date_range(&entry_text);

    let mut title = String::new();
    let mut company = String::new();

    for line in entry {
        let lowered = line.to_lowercase();
        if COMPANY_INDICATORS.iter().any(|ind| lowered.contains(ind)) {
            let parts: Vec<&str> = COMPANY_SPLIT_RE.split(line).collect();
            if parts.len() > 1 {
                if title.is_empty() {
                    title = parts[0].trim().to_string();
                }
                company = parts[1].trim().to_string();
            }
        }
        if title.is_empty() {
            for pattern in TITLE_PATTERNS.iter() {
                if let Some(m) = pattern.find(line) {
                    title = m.as_str().to_string();
                    break;
                }
            }
        }
    }

    // Positional fallback: nothing matched anywhere in the entry.
    if title.is_empty() && company.is_empty() && !entry.is_empty() {
        title = entry[0].clone();
        company = entry
            .get(1)
            .cloned()
            .unwrap_or_else(|| COMPANY_NOT_SPECIFIED.to_string());
    }

    let description = entry
        .iter()
        .filter(|line| !line.is_empty() && **line != title && **line != company)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let skills = match_skills(&description);

    ExperienceRecord {
        id: idx,
        title: non_empty_or(title, POSITION_NOT_SPECIFIED),
        company: non_empty_or(company, COMPANY_NOT_SPECIFIED),
        start_date,
        end_date,
        description,
        skills,
    }
}

fn non_empty_or(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}
