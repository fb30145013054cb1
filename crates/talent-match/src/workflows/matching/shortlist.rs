use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{Candidate, CandidateId, CandidateStatus};

pub const DEFAULT_SHORTLIST_THRESHOLD: i32 = 80;

/// Threshold rule promoting scored `new` candidates to the shortlist.
///
/// Only `new` candidates are considered; `reviewed` ones stay where they are even when
/// they clear the threshold. A missing score counts as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistPolicy {
    pub threshold: i32,
}

impl Default for ShortlistPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SHORTLIST_THRESHOLD,
        }
    }
}

impl ShortlistPolicy {
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }

    pub fn is_eligible(&self, candidate: &Candidate) -> bool {
        candidate.status == CandidateStatus::New
            && i32::from(candidate.match_score.unwrap_or(0)) >= self.threshold
    }

    pub fn select<'a, I>(&self, candidates: I) -> BTreeSet<CandidateId>
    where
        I: IntoIterator<Item = &'a Candidate>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.is_eligible(candidate))
            .map(|candidate| candidate.id.clone())
            .collect()
    }
}

pub fn shortlist(candidates: &[Candidate], threshold: i32) -> BTreeSet<CandidateId> {
    ShortlistPolicy::new(threshold).select(candidates)
}
