//! Rule-based extraction of skills, education and experience statements from free text.
//!
//! Every function here is a pure function of its input and the fixed keyword sets, so the
//! same text always yields the same result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::vocabulary::SkillVocabulary;

pub const EDUCATION_NOT_FOUND: &str = "Education details not found";
pub const EXPERIENCE_NOT_FOUND: &str = "Experience details not found";

const EDUCATION_KEYWORDS: [&str; 7] = [
    "Bachelor",
    "Master",
    "PhD",
    "degree",
    "university",
    "college",
    "school",
];

const EXPERIENCE_KEYWORDS: [&str; 7] = [
    "experience",
    "worked",
    "job",
    "position",
    "role",
    "years",
    "developer",
];

const REQUIREMENT_MARKERS: [&str; 5] = [
    "require",
    "qualification",
    "experience",
    "degree",
    "skill",
];

/// Structured signals pulled out of a resume-like text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
}

/// Structured signals pulled out of a job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptionSignals {
    pub skills: Vec<String>,
    pub requirements: Vec<String>,
}

pub fn extract(text: &str, vocabulary: &SkillVocabulary) -> ExtractionResult {
    let result = ExtractionResult {
        skills: extract_skills(text, vocabulary),
        education: extract_statements(text, &EDUCATION_KEYWORDS, EDUCATION_NOT_FOUND),
        experience: extract_statements(text, &EXPERIENCE_KEYWORDS, EXPERIENCE_NOT_FOUND),
    };

    debug!(
        chars = text.len(),
        skills = result.skills.len(),
        education = result.education.len(),
        experience = result.experience.len(),
        "extracted resume signals"
    );

    result
}

/// Resume-side entry point; identical to [`extract`].
pub fn parse_resume(text: &str, vocabulary: &SkillVocabulary) -> ExtractionResult {
    extract(text, vocabulary)
}

pub fn parse_job_description(text: &str, vocabulary: &SkillVocabulary) -> JobDescriptionSignals {
    JobDescriptionSignals {
        skills: extract_skills(text, vocabulary),
        requirements: extract_requirements(text),
    }
}

/// Vocabulary entries found in `text` as case-insensitive substrings, in vocabulary order.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    let folded = text.to_lowercase();
    vocabulary
        .entries()
        .filter(|(_, folded_skill)| folded.contains(folded_skill))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

/// Lines containing one of the requirement markers (case-sensitive), trimmed, in input order.
pub fn extract_requirements(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| REQUIREMENT_MARKERS.iter().any(|marker| line.contains(marker)))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// The gate tests the raw text case-sensitively while the sentence filter folds case.
// Upper-case-only mentions ("DEVELOPER") therefore fall through to the sentinel.
fn extract_statements(text: &str, keywords: &[&str], sentinel: &str) -> Vec<String> {
    if !keywords.iter().any(|keyword| text.contains(keyword)) {
        return vec![sentinel.to_string()];
    }

    let folded_keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    text.split(is_sentence_terminator)
        .filter(|sentence| {
            let folded = sentence.to_lowercase();
            folded_keywords
                .iter()
                .any(|keyword| folded.contains(keyword.as_str()))
        })
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

#[cfg(test)]
pub(crate) fn statements_for_tests(text: &str, keywords: &[&str], sentinel: &str) -> Vec<String> {
    extract_statements(text, keywords, sentinel)
}
