use serde::{Deserialize, Serialize};

/// Weights and bonuses of the match rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub experience_weight: f64,
    pub experience_base: u8,
    pub years_met_bonus: u8,
    pub years_near_bonus: u8,
    /// Fraction of the required years that still earns the partial bonus.
    pub years_near_ratio: f64,
    pub keyword_bonus: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 0.7,
            experience_weight: 0.3,
            experience_base: 50,
            years_met_bonus: 30,
            years_near_bonus: 15,
            years_near_ratio: 0.7,
            keyword_bonus: 20,
        }
    }
}
