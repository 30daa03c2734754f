//! Certifications extractor.
//!
//! The whole entry joins into the certification name; an issuer phrase
//! ("by/from/issued by/awarded by <issuer>") and an extracted date are
//! stripped back out of the name once recognized.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::CertificationRecord;
use crate::parser::dates::extract_date_range;

static ISSUER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:by|from|issued by|awarded by)\s+([A-Za-z\s]+)")
        .expect("issuer pattern compiles")
});

const CERTIFICATION_NOT_SPECIFIED: &str = "Certification not specified";

pub fn parse_certifications(entries: &[Vec<String>]) -> Vec<CertificationRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| parse_entry(idx, entry))
        .collect()
}

fn parse_entry(idx: usize, entry: &[String]) -> CertificationRecord {
    let entry_text = entry.join("\n");
    let (date, _) = extract_date_range(&entry_text);

    let mut name = entry_text.trim().to_string();
    let mut issuer = String::new();

    if let Some(caps) = ISSUER_RE.captures(&entry_text) {
        issuer = caps[1].trim().to_string();
        name = name.replace(&caps[0], "").trim().to_string();
    }
    if !date.is_empty() {
        name = name.replace(&date, "").trim().to_string();
    }

    CertificationRecord {
        id: idx,
        name: if name.is_empty() {
            CERTIFICATION_NOT_SPECIFIED.to_string()
        } else {
            name
        },
        date,
        issuer,
    }
}
