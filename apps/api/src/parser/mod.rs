//! Résumé extraction pipeline.
//!
//! Stages, each consuming the previous stage's output:
//! line normalizer → section boundary detector → entry segmenter →
//! per-section extractors → aggregator. `parse_resume` runs the whole
//! pipeline synchronously and is pure given its input text; the only
//! process-wide state it touches is read-only (skill catalog, heading
//! tables, compiled patterns).

pub mod certifications;
pub mod contact;
pub mod dates;
pub mod education;
pub mod experience;
pub mod lines;
pub mod projects;
pub mod sections;
pub mod segment;
pub mod skills;

use tracing::{debug, warn};

use crate::models::resume::ResumeRecord;
use crate::ner::NameRecognizer;
use crate::parser::lines::normalize_lines;
use crate::parser::sections::{detect_sections, SectionTag};
use crate::parser::segment::segment_entries;
use crate::parser::skills::match_skills;

/// Placeholder name when both the heuristic and the NER collaborator fail.
pub const UNKNOWN_NAME: &str = "Unknown";

/// How much of the document the NER collaborator sees.
const NER_WINDOW_CHARS: usize = 500;

/// Runs the full extraction pipeline over one document's plain text.
///
/// The name field is filled from the first-three-lines heuristic, falling
/// back to [`UNKNOWN_NAME`]; callers with an NER collaborator upgrade it
/// via [`resolve_name_with_ner`].
pub fn parse_resume(text: &str) -> ResumeRecord {
    let lines = normalize_lines(text);
    let spans = detect_sections(&lines);
    debug!(sections = spans.len(), lines = lines.len(), "detected section boundaries");

    let skills_entries = segment_entries(&lines, &spans, SectionTag::Skills);
    let experience_entries = segment_entries(&lines, &spans, SectionTag::Experience);
    let education_entries = segment_entries(&lines, &spans, SectionTag::Education);
    let certification_entries = segment_entries(&lines, &spans, SectionTag::Certifications);
    let project_entries = segment_entries(&lines, &spans, SectionTag::Projects);
    let achievement_entries = segment_entries(&lines, &spans, SectionTag::Achievements);
    let summary_entries = segment_entries(&lines, &spans, SectionTag::Summary);

    // Explicit skills section first; full-text scan as the fallback when
    // the section is absent or matched nothing.
    let skills_text = skills_entries
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let mut skills = match_skills(&skills_text);
    if skills.is_empty() {
        skills = match_skills(text);
    }

    let experience = experience::parse_experience(&experience_entries);
    let education = education::parse_education(&education_entries);
    let projects = projects::parse_projects(&project_entries);
    let certifications = certifications::parse_certifications(&certification_entries);

    // Union in skills discovered inside descriptions, first-seen order.
    for exp in &experience {
        for skill in &exp.skills {
            if !skills.contains(skill) {
                skills.push(skill.clone());
            }
        }
    }
    for proj in &projects {
        for tech in &proj.technologies {
            if !skills.contains(tech) {
                skills.push(tech.clone());
            }
        }
    }

    let achievements = achievement_entries
        .iter()
        .map(|entry| entry.join(" "))
        .collect();
    let summary = summary_entries.into_iter().flatten().collect();

    let name = contact::extract_name_heuristic(&lines)
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    ResumeRecord {
        name,
        emails: contact::extract_emails(text),
        phone_numbers: contact::extract_phone_numbers(text),
        skills,
        education,
        experience,
        projects,
        certifications,
        achievements,
        summary,
        parsed_text: text.to_string(),
    }
}

/// Upgrades an unresolved name via the NER collaborator over the first
/// [`NER_WINDOW_CHARS`] characters. NER failures are logged, never fatal.
pub async fn resolve_name_with_ner(
    record: &mut ResumeRecord,
    ner: &dyn NameRecognizer,
) {
    if record.name != UNKNOWN_NAME {
        return;
    }
    let window = ner_window(&record.parsed_text);
    match ner.first_person(window).await {
        Ok(Some(person)) => record.name = person,
        Ok(None) => {}
        Err(e) => warn!("NER lookup failed, keeping placeholder name: {e}"),
    }
}

/// First `NER_WINDOW_CHARS` characters, cut on a char boundary.
fn ner_window(text: &str) -> &str {
    match text.char_indices().nth(NER_WINDOW_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::{DisabledNer, NameRecognizer, NerError};
    use async_trait::async_trait;

    const FULL_RESUME: &str = "John Smith\n\nEXPERIENCE\nSoftware Engineer at TechCorp\nJan 2020 - Present\nBuilt APIs using Python and SQL\n\nEDUCATION\nMIT\nB.Tech Computer Science\n2016 - 2020";

    #[test]
    fn test_end_to_end_scenario() {
        let record = parse_resume(FULL_RESUME);

        assert_eq!(record.name, "John Smith");

        assert_eq!(record.experience.len(), 1);
        let exp = &record.experience[0];
        assert_eq!(exp.title, "Software Engineer");
        assert_eq!(exp.company, "TechCorp");
        assert_eq!(exp.start_date, "Jan 2020");
        assert_eq!(exp.end_date, "Present");
        assert!(exp.skills.contains(&"Python".to_string()));
        assert!(exp.skills.contains(&"SQL".to_string()));

        assert_eq!(record.education.len(), 1);
        let edu = &record.education[0];
        assert_eq!(edu.institution, "MIT");
        assert!(edu.degree.contains("B.Tech Computer Science"));

        assert!(record.skills.contains(&"Python".to_string()));
        assert!(record.skills.contains(&"SQL".to_string()));
    }

    #[test]
    fn test_top_level_skills_have_no_duplicates() {
        let record = parse_resume(FULL_RESUME);
        let mut seen = record.skills.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), record.skills.len());
    }

    #[test]
    fn test_skills_section_wins_over_full_text_fallback() {
        let record =
            parse_resume("Jane Doe\n\nSKILLS\nPython\n\nSUMMARY\nAlso knows Java and Docker");
        // The skills section matched, so the full-text fallback never ran.
        assert_eq!(record.skills, vec!["Python"]);
    }

    #[test]
    fn test_full_text_fallback_when_no_skills_section() {
        let record = parse_resume("Jane Doe\nWorks with Python and Docker daily");
        assert!(record.skills.contains(&"Python".to_string()));
        assert!(record.skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_description_skills_are_unioned_in_first_seen_order() {
        let record = parse_resume(
            "Jane Doe\n\nSKILLS\nPython\n\nEXPERIENCE\nDeveloper at Acme\nUsed Docker and SQL",
        );
        // Section skills first, then description discoveries in match order.
        assert_eq!(record.skills, vec!["Python", "Docker", "SQL"]);
    }

    #[test]
    fn test_no_headings_yield_empty_lists() {
        let record = parse_resume("Jane Doe\njust a paragraph of text");
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
        assert!(record.projects.is_empty());
        assert!(record.certifications.is_empty());
        assert!(record.achievements.is_empty());
        assert!(record.summary.is_empty());
    }

    #[test]
    fn test_achievements_join_and_summary_flattens() {
        let record = parse_resume(
            "Jane Doe\n\nACHIEVEMENTS\nWon the\nhackathon\n\nDean's list\n\nSUMMARY\nSeasoned builder\nof things",
        );
        assert_eq!(
            record.achievements,
            vec!["Won the hackathon", "Dean's list"]
        );
        assert_eq!(record.summary, vec!["Seasoned builder", "of things"]);
    }

    #[test]
    fn test_contact_scan_is_unscoped() {
        let record = parse_resume(
            "Jane Doe\n\nEXPERIENCE\nDeveloper at Acme\nReach me at jane@acme.com or 555-123-4567",
        );
        assert_eq!(record.emails, vec!["jane@acme.com"]);
        assert_eq!(record.phone_numbers, vec!["5551234567"]);
    }

    #[test]
    fn test_unresolvable_name_is_unknown() {
        let record = parse_resume(
            "this first line has too many words in it\nso does this one over here friend\nand this third line as well yes",
        );
        assert_eq!(record.name, UNKNOWN_NAME);
    }

    #[test]
    fn test_parsed_text_carries_input() {
        let record = parse_resume(FULL_RESUME);
        assert_eq!(record.parsed_text, FULL_RESUME);
    }

    struct FixedNer(&'static str);

    #[async_trait]
    impl NameRecognizer for FixedNer {
        async fn first_person(&self, _text: &str) -> Result<Option<String>, NerError> {
            Ok(Some(self.0.to_string()))
        }
    }

    struct FailingNer;

    #[async_trait]
    impl NameRecognizer for FailingNer {
        async fn first_person(&self, _text: &str) -> Result<Option<String>, NerError> {
            Err(NerError::Api {
                status: 500,
                message: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_ner_upgrades_unknown_name() {
        let mut record = parse_resume(
            "too many words on this line here\nalso too many words right here now\nthird line with many words in it\n\nEXPERIENCE\nDeveloper",
        );
        assert_eq!(record.name, UNKNOWN_NAME);
        resolve_name_with_ner(&mut record, &FixedNer("Jane Doe")).await;
        assert_eq!(record.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_ner_does_not_override_heuristic_name() {
        let mut record = parse_resume(FULL_RESUME);
        resolve_name_with_ner(&mut record, &FixedNer("Someone Else")).await;
        assert_eq!(record.name, "John Smith");
    }

    #[tokio::test]
    async fn test_ner_failure_keeps_placeholder() {
        let mut record = parse_resume("way too many words on this first line\n");
        resolve_name_with_ner(&mut record, &FailingNer).await;
        assert_eq!(record.name, UNKNOWN_NAME);
    }

    #[tokio::test]
    async fn test_disabled_ner_keeps_placeholder() {
        let mut record = parse_resume("way too many words on this first line\n");
        resolve_name_with_ner(&mut record, &DisabledNer).await;
        assert_eq!(record.name, UNKNOWN_NAME);
    }

    #[test]
    fn test_ner_window_respects_char_boundaries() {
        let text = "é".repeat(600);
        let window = ner_window(&text);
        assert_eq!(window.chars().count(), 500);
    }
}
