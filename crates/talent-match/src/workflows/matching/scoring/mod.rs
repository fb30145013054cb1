mod config;
mod rules;

pub use config::ScoringConfig;

use serde::{Deserialize, Serialize};

use super::domain::{CandidateSignals, JobSignals};

/// Stateless scorer that applies the rubric configuration to a candidate/job pair.
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    config: ScoringConfig,
}

impl MatchScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, candidate: &CandidateSignals, job: &JobSignals) -> MatchResult {
        let overlap = rules::skill_overlap(&candidate.skills, &job.skills);
        let mut components = vec![ScoreComponent {
            factor: MatchFactor::SkillOverlap,
            points: overlap.score,
            notes: if overlap.matched.is_empty() {
                format!("matched 0 of {} job skills", job.skills.len())
            } else {
                format!(
                    "matched {} of {} job skills: {}",
                    overlap.matched.len(),
                    job.skills.len(),
                    overlap.matched.join(", ")
                )
            },
        }];

        let (experience_score, experience_components) =
            rules::experience_fit(&candidate.experience, &job.requirements, &self.config);
        components.extend(experience_components);

        let weighted = f64::from(overlap.score) * self.config.skill_weight
            + f64::from(experience_score) * self.config.experience_weight;
        let composite_score = weighted.round().clamp(0.0, 100.0) as u8;

        MatchResult {
            skill_score: overlap.score,
            experience_score,
            composite_score,
            components,
        }
    }
}

/// Scores a pair with the default rubric.
pub fn score(candidate: &CandidateSignals, job: &JobSignals) -> MatchResult {
    MatchScorer::default().score(candidate, job)
}

/// Factor a score component is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    SkillOverlap,
    ExperienceBaseline,
    YearsOfExperience,
    RequirementKeywords,
}

/// Discrete contribution to a match, so a shortlist can be explained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub points: u8,
    pub notes: String,
}

/// Scores for one candidate/job pair. `composite_score` weighs skills 70/30 against experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub skill_score: u8,
    pub experience_score: u8,
    pub composite_score: u8,
    pub components: Vec<ScoreComponent>,
}
