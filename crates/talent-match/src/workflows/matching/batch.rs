use tracing::debug;

use super::domain::{Candidate, Job};
use super::scoring::{MatchResult, MatchScorer};

/// Rescores every candidate against `job`, returning them in input order with
/// `match_score` replaced. Nothing else on the candidate changes and nothing is persisted.
///
/// Candidates are scored independently, so callers may split the pool across threads.
pub fn analyze(scorer: &MatchScorer, candidates: Vec<Candidate>, job: &Job) -> Vec<Candidate> {
    let job_signals = job.signals();
    candidates
        .into_iter()
        .map(|mut candidate| {
            let result = scorer.score(&candidate.signals(), &job_signals);
            debug!(
                candidate = %candidate.id,
                job = %job.id,
                score = result.composite_score,
                "scored candidate"
            );
            candidate.match_score = Some(result.composite_score);
            candidate
        })
        .collect()
}

/// Full per-candidate breakdown for one job, in input order.
pub fn explain<'a>(
    scorer: &MatchScorer,
    candidates: &'a [Candidate],
    job: &Job,
) -> Vec<(&'a Candidate, MatchResult)> {
    let job_signals = job.signals();
    candidates
        .iter()
        .map(|candidate| (candidate, scorer.score(&candidate.signals(), &job_signals)))
        .collect()
}
