//! Section boundary detector.
//!
//! Scans the line sequence for heading phrases and assigns each recognized
//! section a half-open `[start, end)` range. Matching is lower-cased
//! substring containment, not exact equality, so decorated headings like
//! "WORK EXPERIENCE:" still register.

use std::collections::HashMap;

/// The fixed set of recognized résumé sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    Contact,
    Skills,
    Experience,
    Education,
    Certifications,
    Projects,
    Achievements,
    Summary,
}

/// Heading phrases per section, iterated in this exact order.
///
/// The order is the documented tie-break: when one line contains heading
/// phrases of several sections, the last matching tag in this table wins
/// (each match re-runs the open/close step, so the final one sticks).
pub const SECTION_HEADINGS: &[(SectionTag, &[&str])] = &[
    (
        SectionTag::Contact,
        &["contact information", "contact", "personal information"],
    ),
    (
        SectionTag::Skills,
        &[
            "skills",
            "technical skills",
            "core competencies",
            "expertise",
            "proficiencies",
        ],
    ),
    (
        SectionTag::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment history",
            "work history",
        ],
    ),
    (
        SectionTag::Education,
        &[
            "education",
            "academic background",
            "academic history",
            "educational background",
        ],
    ),
    (
        SectionTag::Certifications,
        &[
            "certifications",
            "professional certifications",
            "credentials",
            "skill certifications",
            "certificates",
        ],
    ),
    (
        SectionTag::Projects,
        &[
            "projects",
            "personal projects",
            "academic projects",
            "project experience",
        ],
    ),
    (
        SectionTag::Achievements,
        &[
            "achievements",
            "accomplishments",
            "awards",
            "honors",
            "recognition",
        ],
    ),
    (
        SectionTag::Summary,
        &["summary", "profile", "objective", "professional summary"],
    ),
];

/// Half-open `[start, end)` range into the line sequence.
/// Invariant: `start <= end <= lines.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub start: usize,
    pub end: usize,
}

/// Detects section boundaries over the normalized line sequence.
///
/// The heading line itself is excluded from its section (`start = index + 1`).
/// A recurring heading for an already-seen tag repositions that section.
/// The last opened section runs to the end of the lines. Sections whose
/// heading never appears are simply absent from the map.
pub fn detect_sections(lines: &[String]) -> HashMap<SectionTag, SectionSpan> {
    let mut spans: HashMap<SectionTag, SectionSpan> = HashMap::new();
    let mut current: Option<SectionTag> = None;

    for (i, line) in lines.iter().enumerate() {
        let lowered = line.to_lowercase();
        for (tag, headings) in SECTION_HEADINGS {
            if headings.iter().any(|h| lowered.contains(h)) {
                if let Some(open) = current {
                    close_section(&mut spans, open, i);
                }
                current = Some(*tag);
                spans.insert(
                    *tag,
                    SectionSpan {
                        start: i + 1,
                        end: lines.len(),
                    },
                );
            }
        }
    }

    if let Some(open) = current {
        close_section(&mut spans, open, lines.len());
    }

    spans
}

/// Clamped so a heading immediately followed by another heading (or a line
/// matching two tags at once) never yields `end < start`.
fn close_section(spans: &mut HashMap<SectionTag, SectionSpan>, tag: SectionTag, at: usize) {
    if let Some(span) = spans.get_mut(&tag) {
        span.end = at.max(span.start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lines::normalize_lines;

    fn detect(text: &str) -> HashMap<SectionTag, SectionSpan> {
        detect_sections(&normalize_lines(text))
    }

    #[test]
    fn test_section_excludes_following_section_lines() {
        let spans = detect("SKILLS\nPython\nSQL\n\nEXPERIENCE\nDeveloper at Acme");
        let skills = spans[&SectionTag::Skills];
        let experience = spans[&SectionTag::Experience];
        // Skills covers its own block only, up to the EXPERIENCE heading.
        assert_eq!(skills, SectionSpan { start: 1, end: 4 });
        assert_eq!(experience, SectionSpan { start: 5, end: 6 });
    }

    #[test]
    fn test_heading_line_itself_is_excluded() {
        let spans = detect("EDUCATION\nMIT");
        assert_eq!(spans[&SectionTag::Education], SectionSpan { start: 1, end: 2 });
    }

    #[test]
    fn test_no_heading_yields_empty_map() {
        let spans = detect("just some text\nwith no headings");
        assert!(spans.is_empty());
    }

    #[test]
    fn test_heading_match_is_substring_containment() {
        let spans = detect("WORK EXPERIENCE:\nDeveloper");
        assert!(spans.contains_key(&SectionTag::Experience));
    }

    #[test]
    fn test_duplicate_heading_repositions_section() {
        let spans = detect("SKILLS\nPython\nSKILLS\nSQL");
        // The later occurrence wins; the earlier block is abandoned.
        assert_eq!(spans[&SectionTag::Skills], SectionSpan { start: 3, end: 4 });
    }

    #[test]
    fn test_ambiguous_line_resolves_to_last_tag_in_table_order() {
        // "skills and certifications" contains both the skills and the
        // certifications heading phrases; certifications comes later in
        // SECTION_HEADINGS so it wins the open section.
        let spans = detect("Skills and Certifications\nAWS Certified Developer");
        assert_eq!(
            spans[&SectionTag::Certifications],
            SectionSpan { start: 1, end: 2 }
        );
        // The skills span was opened and immediately closed on the same line.
        let skills = spans[&SectionTag::Skills];
        assert!(skills.end >= skills.start);
    }

    #[test]
    fn test_adjacent_headings_keep_end_ge_start() {
        let spans = detect("SKILLS\nEXPERIENCE\nDeveloper");
        let skills = spans[&SectionTag::Skills];
        assert_eq!(skills.start, 1);
        assert_eq!(skills.end, 1);
    }

    #[test]
    fn test_last_section_runs_to_end_of_lines() {
        let lines = normalize_lines("EDUCATION\nMIT\nB.Tech");
        let spans = detect_sections(&lines);
        assert_eq!(spans[&SectionTag::Education].end, lines.len());
    }

    #[test]
    fn test_all_spans_lie_within_line_sequence() {
        let lines = normalize_lines("SUMMARY\nhi\nSKILLS\nPython\nPROJECTS\nThing");
        let spans = detect_sections(&lines);
        for span in spans.values() {
            assert!(span.start <= span.end);
            assert!(span.end <= lines.len());
        }
    }
}
