//! Projects extractor. Line 0 is the project name, the rest joins into the
//! description, and the skill matcher over the description yields the
//! technology list.

use crate::models::resume::ProjectRecord;
use crate::parser::skills::match_skills;

const PROJECT_NOT_SPECIFIED: &str = "Project not specified";

pub fn parse_projects(entries: &[Vec<String>]) -> Vec<ProjectRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let name = entry.first().cloned().unwrap_or_default();
            let description = if entry.len() > 1 {
                entry[1..].join(" ")
            } else {
                String::new()
            };
            let technologies = match_skills(&description);
            ProjectRecord {
                id: idx,
                name: if name.is_empty() {
                    PROJECT_NOT_SPECIFIED.to_string()
                } else {
                    name
                },
                description,
                technologies,
            }
        })
        .collect()
}
