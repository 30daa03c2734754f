//! Skill matcher — shared across the skills, experience, and projects
//! extractors.
//!
//! The catalog is a controlled vocabulary: only listed phrases are ever
//! detected. Matching is case-insensitive, word-boundary-bounded,
//! exact-phrase. The catalog is sorted once at initialization so the match
//! order (and therefore every output list order) is deterministic.

use once_cell::sync::Lazy;
use regex::Regex;

/// The controlled skill vocabulary.
pub const SKILL_CATALOG: &[&str] = &[
    "Microsoft Office",
    "Product Management",
    "Roadmap Planning",
    "Agile Methodologies",
    "Data Analysis",
    "Market Research",
    "Business Analytics",
    "Wireframing",
    "Prototyping",
    "SQL",
    "Python",
    "Strategic Thinking",
    "Stakeholder Management",
    "Leadership",
    "Problem Solving",
    "Critical Thinking",
    "Adaptability",
    "Java",
    "HTML",
    "CSS",
    "JavaScript",
    "Next.js",
    "MySQL",
    "MongoDB",
    "Git",
    "GitHub",
    "Figma",
    "Koha",
    "PostgreSQL",
    "Firebase",
    "Unit Testing",
    "TypeScript",
    "SSR",
    "Vercel",
    "OOPS",
    "Data Structures",
    "Algorithms",
    "Database Optimization",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "RESTful APIs",
    "GraphQL",
    "Machine Learning",
    "Deep Learning",
    "Natural Language Processing",
    "Data Science",
    "Statistical Analysis",
    "Communication Skills",
    "Teamwork",
    "Project Management",
    "Scrum",
    "Kanban",
    "UI/UX Design",
    "Responsive Design",
    "Mobile Development",
    "iOS Development",
    "Android Development",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "Express.js",
    "Django",
    "Flask",
    "Ruby on Rails",
    "C++",
    "C#",
    "Go",
    "Swift",
    "Kotlin",
    "PHP",
    "Bash Scripting",
    "PowerShell",
    "Linux",
    "Windows Server",
    "Networking",
    "Cybersecurity",
    "Cloud Computing",
    "DevOps",
    "Big Data",
    "Spark",
    "Hadoop",
    "Tableau",
    "Power BI",
    "Data Visualization",
    "Database Design",
    "SEO",
    "Digital Marketing",
    "Social Media Marketing",
    "Content Creation",
    "Technical Writing",
    "Negotiation",
    "Presentation Skills",
    "Mentoring",
    "Coaching",
    "Time Management",
    "Budgeting",
    "Risk Management",
    "Compliance",
    "Auditing",
    "Process Improvement",
];

/// Catalog entries paired with their compiled matchers, in sorted order.
static SKILL_MATCHERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    let mut catalog: Vec<&'static str> = SKILL_CATALOG.to_vec();
    catalog.sort_unstable();
    catalog
        .into_iter()
        .map(|skill| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(skill));
            let re = Regex::new(&pattern).expect("skill pattern compiles");
            (skill, re)
        })
        .collect()
});

/// Returns every catalog skill whose exact phrase occurs in `text`,
/// in sorted-catalog order. An empty text matches nothing.
pub fn match_skills(text: &str) -> Vec<String> {
    SKILL_MATCHERS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(skill, _)| (*skill).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_catalog_items_match_regardless_of_punctuation() {
        let found = match_skills("Built APIs (Python), backed by SQL.");
        assert_eq!(found, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let found = match_skills("experienced in python and sql");
        assert_eq!(found, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_catalog_phrase_must_be_word_bounded() {
        // "Java" must not match inside "JavaScript".
        let found = match_skills("Wrote a lot of JavaScript");
        assert!(found.contains(&"JavaScript".to_string()));
        assert!(!found.contains(&"Java".to_string()));
    }

    #[test]
    fn test_multi_word_phrases_match() {
        let found = match_skills("Focus on Machine Learning and Data Science work");
        assert!(found.contains(&"Machine Learning".to_string()));
        assert!(found.contains(&"Data Science".to_string()));
    }

    #[test]
    fn test_unlisted_skills_are_never_detected() {
        assert!(match_skills("Expert in Erlang and COBOL").is_empty());
    }

    #[test]
    fn test_output_order_is_sorted_catalog_order() {
        let found = match_skills("SQL before Python in the text");
        // Sorted order, not text order.
        assert_eq!(found, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        assert!(match_skills("").is_empty());
    }

    #[test]
    fn test_every_catalog_pattern_compiles() {
        // Forces Lazy initialization over the full catalog, including
        // entries with regex metacharacters ("C++", "C#", "CI/CD").
        assert_eq!(SKILL_MATCHERS.len(), SKILL_CATALOG.len());
    }
}
