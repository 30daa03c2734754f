//! Structured records produced by the extraction pipeline.
//!
//! Every field is always present: list fields default to empty vectors and
//! string fields to documented placeholders, never to null/absent values.
//! `id` is the entry's 0-based position within its section, not globally
//! unique.

use serde::{Deserialize, Serialize};

/// One job/internship entry from the experience section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub id: usize,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// One degree/institution entry from the education section.
///
/// `start_date`/`end_date` are carried for schema stability but are never
/// populated by the extractor — date patterns drive entry splitting only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub id: usize,
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// One entry from the projects section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: usize,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// One entry from the certifications section. A missing issuer is the
/// empty string, not an absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub id: usize,
    pub name: String,
    pub date: String,
    pub issuer: String,
}

/// The aggregated output of the whole pipeline for one document.
///
/// `skills` is the deduplicated union of skills-section matches (or the
/// full-text fallback) plus skills discovered inside experience and
/// project descriptions, in first-seen order. `parsed_text` is the full
/// extracted plain text, returned so callers can display or re-process it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub skills: Vec<String>,
    pub education: Vec<EducationRecord>,
    pub experience: Vec<ExperienceRecord>,
    pub projects: Vec<ProjectRecord>,
    pub certifications: Vec<CertificationRecord>,
    pub achievements: Vec<String>,
    pub summary: Vec<String>,
    pub parsed_text: String,
}
