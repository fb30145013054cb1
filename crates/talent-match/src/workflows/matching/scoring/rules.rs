use once_cell::sync::Lazy;
use regex::Regex;

use super::config::ScoringConfig;
use super::{MatchFactor, ScoreComponent};

const REQUIREMENT_KEYWORDS: [&str; 6] = [
    "degree",
    "bachelor",
    "master",
    "phd",
    "certification",
    "experience",
];

static YEARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)\+?\s*years?").expect("years pattern compiles"));

pub(crate) struct SkillOverlap {
    pub score: u8,
    pub matched: Vec<String>,
}

/// Share of job skills covered by the candidate, as a percentage capped at 100.
///
/// A candidate skill counts once when it is a case-insensitive substring of any job
/// skill or the other way round. The denominator is the job skill count, so several
/// candidate skills hitting one job skill can push the ratio past 1.
pub(crate) fn skill_overlap(candidate_skills: &[String], job_skills: &[String]) -> SkillOverlap {
    if job_skills.is_empty() {
        return SkillOverlap {
            score: 0,
            matched: Vec::new(),
        };
    }

    let folded_job: Vec<String> = job_skills.iter().map(|skill| skill.to_lowercase()).collect();
    let matched: Vec<String> = candidate_skills
        .iter()
        .filter(|skill| {
            let folded = skill.to_lowercase();
            folded_job
                .iter()
                .any(|job| job.contains(folded.as_str()) || folded.contains(job.as_str()))
        })
        .cloned()
        .collect();

    let ratio = matched.len() as f64 / job_skills.len() as f64;
    let score = (ratio * 100.0).round().min(100.0) as u8;

    SkillOverlap { score, matched }
}

/// First "N years" / "N+ years" mention in the joined statements, 0 when absent.
pub(crate) fn years_mentioned(statements: &[String]) -> u64 {
    let joined = statements.join(" ");
    YEARS_PATTERN
        .captures(&joined)
        .and_then(|captures| captures.get(1))
        .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

pub(crate) fn experience_fit(
    candidate_experience: &[String],
    job_requirements: &[String],
    config: &ScoringConfig,
) -> (u8, Vec<ScoreComponent>) {
    let base = config.experience_base;
    let mut components = vec![ScoreComponent {
        factor: MatchFactor::ExperienceBaseline,
        points: base,
        notes: "neutral experience baseline".to_string(),
    }];

    if job_requirements.is_empty() {
        return (base.min(100), components);
    }

    let mut total = u16::from(base);

    let candidate_years = years_mentioned(candidate_experience);
    let required_years = years_mentioned(job_requirements);
    if required_years > 0 && candidate_years > 0 {
        let (points, notes) = if candidate_years >= required_years {
            (
                config.years_met_bonus,
                format!("{candidate_years} years meets required {required_years}"),
            )
        } else if candidate_years as f64 >= required_years as f64 * config.years_near_ratio {
            (
                config.years_near_bonus,
                format!("{candidate_years} years close to required {required_years}"),
            )
        } else {
            (
                0,
                format!("{candidate_years} years short of required {required_years}"),
            )
        };
        total += u16::from(points);
        components.push(ScoreComponent {
            factor: MatchFactor::YearsOfExperience,
            points,
            notes,
        });
    }

    if let Some(keyword) = shared_requirement_keyword(candidate_experience, job_requirements) {
        total += u16::from(config.keyword_bonus);
        components.push(ScoreComponent {
            factor: MatchFactor::RequirementKeywords,
            points: config.keyword_bonus,
            notes: format!("requirement keyword '{keyword}' present in experience"),
        });
    }

    (total.min(100) as u8, components)
}

fn shared_requirement_keyword(
    candidate_experience: &[String],
    job_requirements: &[String],
) -> Option<&'static str> {
    let folded_requirements: Vec<String> =
        job_requirements.iter().map(|line| line.to_lowercase()).collect();
    let folded_experience: Vec<String> = candidate_experience
        .iter()
        .map(|line| line.to_lowercase())
        .collect();

    REQUIREMENT_KEYWORDS.into_iter().find(|keyword| {
        folded_requirements.iter().any(|line| line.contains(keyword))
            && folded_experience.iter().any(|line| line.contains(keyword))
    })
}
