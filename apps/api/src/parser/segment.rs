//! Entry segmenter.
//!
//! Splits a section's line range into entries. Blank lines delimit entries
//! everywhere. Education sections get two extra rules so consecutive degree
//! blocks split correctly even without blank separators:
//!
//! - a date-range line is appended and then *terminates* the entry
//!   (dates close a degree block);
//! - a degree-keyword line starts a fresh entry before being appended, but
//!   only when the buffer already holds a degree-keyword line; an
//!   institution line must stay attached to the degree that follows it, so
//!   the line immediately preceding the split is carried into the new entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::sections::{SectionSpan, SectionTag};

/// Date forms that close an education entry: "2016 - 2020", "2018 - Present",
/// or an abbreviated month followed by a 2-4 digit year.
static EDUCATION_DATE_TRIGGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:\d{4}\s*-\s*(?:\d{4}|Present)|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s*\d{2,4})\b",
    )
    .expect("education date trigger pattern compiles")
});

/// Lower-cased substrings that mark a line as a degree line.
const DEGREE_TRIGGER_KEYWORDS: &[&str] = &[
    "b.tech",
    "m.tech",
    "ph.d",
    "b.sc",
    "m.sc",
    "mba",
    "b.a",
    "m.a",
    "bachelor",
    "master",
    "associate",
    "doctorate",
    "higher secondary",
    "secondary",
];

/// Splits the lines of `tag`'s section into entries.
/// Returns an empty list when the section was not detected.
pub fn segment_entries(
    lines: &[String],
    spans: &HashMap<SectionTag, SectionSpan>,
    tag: SectionTag,
) -> Vec<Vec<String>> {
    let Some(span) = spans.get(&tag) else {
        return Vec::new();
    };

    let end = span.end.min(lines.len());
    let start = span.start.min(end);

    let mut entries: Vec<Vec<String>> = Vec::new();
    let mut entry: Vec<String> = Vec::new();

    for line in &lines[start..end] {
        if line.is_empty() {
            flush(&mut entries, &mut entry);
            continue;
        }

        if tag == SectionTag::Education {
            let lowered = line.to_lowercase();
            if is_degree_line(&lowered) && entry.iter().any(|l| is_degree_line(&l.to_lowercase())) {
                // A second degree line means a new block began without a
                // blank separator. The line right before it is usually the
                // new block's institution, so it moves into the new entry.
                let carry_last = entry
                    .last()
                    .is_some_and(|last| !is_degree_line(&last.to_lowercase()));
                let carried = if carry_last { entry.pop() } else { None };
                flush(&mut entries, &mut entry);
                if let Some(institution) = carried {
                    entry.push(institution);
                }
            }
            entry.push(line.clone());
            if EDUCATION_DATE_TRIGGER.is_match(&lowered) {
                flush(&mut entries, &mut entry);
            }
            continue;
        }

        entry.push(line.clone());
    }

    flush(&mut entries, &mut entry);
    entries
}

fn is_degree_line(lowered: &str) -> bool {
    DEGREE_TRIGGER_KEYWORDS.iter().any(|k| lowered.contains(k))
}

fn flush(entries: &mut Vec<Vec<String>>, entry: &mut Vec<String>) {
    if !entry.is_empty() {
        entries.push(std::mem::take(entry));
    }
}
