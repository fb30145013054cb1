use std::sync::Arc;

use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::batch::analyze;
use super::domain::{
    Candidate, CandidateId, CandidateSignals, CandidateStatus, CandidateUpdate, Job, JobId,
    JobSignals, JobUpdate, NewCandidate, NewJob, RecruitingStats, StatusTransitionError,
};
use super::extraction::{self, ExtractionResult, JobDescriptionSignals};
use super::repository::{RecruitingStore, RepositoryError};
use super::scoring::{MatchResult, MatchScorer};
use super::shortlist::ShortlistPolicy;
use super::vocabulary::SkillVocabulary;

/// Service composing the store, the skill vocabulary, the scorer and the shortlist policy.
pub struct MatchingService<S> {
    store: Arc<S>,
    vocabulary: Arc<SkillVocabulary>,
    scorer: Arc<MatchScorer>,
    policy: ShortlistPolicy,
}

/// Candidate intake payload; skills, education and experience come from the resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub resume_text: String,
    #[serde(default)]
    pub job_id: Option<JobId>,
}

/// Job intake payload. Empty skills/requirements are derived from the description.
pub type JobSubmission = NewJob;

/// Outcome of rescoring every candidate attached to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub job_id: JobId,
    pub scores: Vec<CandidateScore>,
    pub failed: Vec<PersistFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub candidate_id: CandidateId,
    pub match_score: u8,
}

/// A write-back that did not reach the store. Other candidates are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistFailure {
    pub candidate_id: CandidateId,
    pub reason: String,
}

/// Outcome of applying the shortlist threshold to a job's candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistReport {
    pub job_id: JobId,
    pub threshold: i32,
    pub shortlisted: Vec<CandidateId>,
    pub failed: Vec<PersistFailure>,
}

impl<S> MatchingService<S>
where
    S: RecruitingStore + 'static,
{
    pub fn new(store: Arc<S>, policy: ShortlistPolicy) -> Self {
        Self::with_components(
            store,
            Arc::new(SkillVocabulary::standard().clone()),
            Arc::new(MatchScorer::default()),
            policy,
        )
    }

    pub fn with_components(
        store: Arc<S>,
        vocabulary: Arc<SkillVocabulary>,
        scorer: Arc<MatchScorer>,
        policy: ShortlistPolicy,
    ) -> Self {
        Self {
            store,
            vocabulary,
            scorer,
            policy,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    pub fn policy(&self) -> ShortlistPolicy {
        self.policy
    }

    pub fn parse_resume(&self, text: &str) -> ExtractionResult {
        extraction::parse_resume(text, &self.vocabulary)
    }

    pub fn parse_job_description(&self, text: &str) -> JobDescriptionSignals {
        extraction::parse_job_description(text, &self.vocabulary)
    }

    pub fn score_signals(&self, candidate: &CandidateSignals, job: &JobSignals) -> MatchResult {
        self.scorer.score(candidate, job)
    }

    /// Parse the resume and store the candidate with status `new`.
    pub fn register_candidate(
        &self,
        submission: CandidateSubmission,
    ) -> Result<Candidate, MatchingServiceError> {
        if let Some(job_id) = &submission.job_id {
            self.job(job_id)?;
        }

        let parsed = self.parse_resume(&submission.resume_text);
        let candidate = self.store.create_candidate(NewCandidate {
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            resume_text: submission.resume_text,
            skills: parsed.skills,
            education: parsed.education,
            experience: parsed.experience,
            match_score: None,
            job_id: submission.job_id,
        })?;

        info!(candidate = %candidate.id, skills = candidate.skills.len(), "candidate registered");
        Ok(candidate)
    }

    pub fn register_job(&self, mut submission: JobSubmission) -> Result<Job, MatchingServiceError> {
        if submission.skills.is_empty() || submission.requirements.is_empty() {
            let parsed = self.parse_job_description(&submission.description);
            if submission.skills.is_empty() {
                submission.skills = parsed.skills;
            }
            if submission.requirements.is_empty() {
                submission.requirements = parsed.requirements;
            }
        }

        let job = self.store.create_job(submission)?;
        info!(job = %job.id, skills = job.skills.len(), "job registered");
        Ok(job)
    }

    pub fn jobs(&self) -> Result<Vec<Job>, MatchingServiceError> {
        Ok(self.store.jobs()?)
    }

    pub fn job(&self, job_id: &JobId) -> Result<Job, MatchingServiceError> {
        self.store
            .job(job_id)?
            .ok_or_else(|| MatchingServiceError::JobNotFound(job_id.clone()))
    }

    /// Apply a partial update to a stored job. Stored match scores are left as they are
    /// until the job is analysed again.
    pub fn update_job(&self, job_id: &JobId, update: JobUpdate) -> Result<Job, MatchingServiceError> {
        let job = self
            .store
            .update_job(job_id, update)?
            .ok_or_else(|| MatchingServiceError::JobNotFound(job_id.clone()))?;
        info!(job = %job.id, skills = job.skills.len(), "job updated");
        Ok(job)
    }

    pub fn delete_job(&self, job_id: &JobId) -> Result<(), MatchingServiceError> {
        if self.store.delete_job(job_id)? {
            Ok(())
        } else {
            Err(MatchingServiceError::JobNotFound(job_id.clone()))
        }
    }

    pub fn candidates(&self, job_id: Option<&JobId>) -> Result<Vec<Candidate>, MatchingServiceError> {
        Ok(self.store.candidates(job_id)?)
    }

    pub fn candidate(&self, candidate_id: &CandidateId) -> Result<Candidate, MatchingServiceError> {
        self.store
            .candidate(candidate_id)?
            .ok_or_else(|| MatchingServiceError::CandidateNotFound(candidate_id.clone()))
    }

    pub fn stats(&self) -> Result<RecruitingStats, MatchingServiceError> {
        Ok(self.store.stats()?)
    }

    /// Score one stored candidate against one stored job without persisting anything.
    pub fn score_candidate(
        &self,
        candidate_id: &CandidateId,
        job_id: &JobId,
    ) -> Result<MatchResult, MatchingServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let job = self.job(job_id)?;
        Ok(self.scorer.score(&candidate.signals(), &job.signals()))
    }

    /// Rescore every candidate attached to the job and write each score back.
    pub fn analyze_job(&self, job_id: &JobId) -> Result<AnalysisReport, MatchingServiceError> {
        let job = self.job(job_id)?;
        let candidates = self.store.candidates(Some(job_id))?;
        let analyzed = analyze(&self.scorer, candidates, &job);

        let mut scores = Vec::with_capacity(analyzed.len());
        let mut failed = Vec::new();
        for candidate in analyzed {
            let Some(match_score) = candidate.match_score else {
                continue;
            };
            match self
                .store
                .update_candidate(&candidate.id, CandidateUpdate::match_score(match_score))
            {
                Ok(Some(_)) => {}
                Ok(None) => failed.push(PersistFailure {
                    candidate_id: candidate.id.clone(),
                    reason: RepositoryError::NotFound.to_string(),
                }),
                Err(err) => {
                    warn!(candidate = %candidate.id, error = %err, "failed to persist match score");
                    failed.push(PersistFailure {
                        candidate_id: candidate.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
            scores.push(CandidateScore {
                candidate_id: candidate.id,
                match_score,
            });
        }

        info!(
            job = %job_id,
            analyzed = scores.len(),
            failed = failed.len(),
            "candidate analysis complete"
        );

        Ok(AnalysisReport {
            job_id: job_id.clone(),
            scores,
            failed,
        })
    }

    /// Promote eligible `new` candidates of the job to `shortlisted`.
    ///
    /// `threshold` falls back to the configured policy. An empty selection is not an error.
    /// Each selected candidate is read again right before its write and skipped if it is no
    /// longer eligible. The store has no compare-and-set, so a change landing between that
    /// read and the write is still overwritten.
    pub fn shortlist_job(
        &self,
        job_id: &JobId,
        threshold: Option<i32>,
    ) -> Result<ShortlistReport, MatchingServiceError> {
        self.job(job_id)?;
        let policy = threshold.map_or(self.policy, ShortlistPolicy::new);
        let candidates = self.store.candidates(Some(job_id))?;
        let selected = policy.select(&candidates);

        let mut shortlisted = Vec::with_capacity(selected.len());
        let mut failed = Vec::new();
        for candidate_id in selected {
            match self.store.candidate(&candidate_id) {
                Ok(Some(current)) if policy.is_eligible(&current) => {}
                Ok(Some(current)) => {
                    debug!(
                        candidate = %candidate_id,
                        status = current.status.label(),
                        "candidate changed since selection, skipping"
                    );
                    continue;
                }
                Ok(None) => {
                    failed.push(PersistFailure {
                        candidate_id,
                        reason: RepositoryError::NotFound.to_string(),
                    });
                    continue;
                }
                Err(err) => {
                    warn!(candidate = %candidate_id, error = %err, "failed to re-read candidate");
                    failed.push(PersistFailure {
                        candidate_id,
                        reason: err.to_string(),
                    });
                    continue;
                }
            }

            match self.store.update_candidate(
                &candidate_id,
                CandidateUpdate::status(CandidateStatus::Shortlisted),
            ) {
                Ok(Some(_)) => shortlisted.push(candidate_id),
                Ok(None) => failed.push(PersistFailure {
                    candidate_id,
                    reason: RepositoryError::NotFound.to_string(),
                }),
                Err(err) => {
                    warn!(candidate = %candidate_id, error = %err, "failed to persist shortlist");
                    failed.push(PersistFailure {
                        candidate_id,
                        reason: err.to_string(),
                    });
                }
            }
        }

        if shortlisted.is_empty() && failed.is_empty() {
            info!(job = %job_id, threshold = policy.threshold, "no eligible candidates");
        } else {
            info!(
                job = %job_id,
                threshold = policy.threshold,
                shortlisted = shortlisted.len(),
                "candidates shortlisted"
            );
        }

        Ok(ShortlistReport {
            job_id: job_id.clone(),
            threshold: policy.threshold,
            shortlisted,
            failed,
        })
    }

    /// Apply a recruiter-initiated status change, validated against the transition table.
    pub fn change_status(
        &self,
        candidate_id: &CandidateId,
        status: CandidateStatus,
    ) -> Result<Candidate, MatchingServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let next = candidate.status.transition_to(status)?;
        self.persist(candidate_id, CandidateUpdate::status(next))
    }

    /// Move a shortlisted candidate to `interviewing`, defaulting to [`default_interview_slot`].
    pub fn schedule_interview(
        &self,
        candidate_id: &CandidateId,
        at: Option<NaiveDateTime>,
    ) -> Result<Candidate, MatchingServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let next = candidate
            .status
            .transition_to(CandidateStatus::Interviewing)?;
        let at = at.unwrap_or_else(|| default_interview_slot(Local::now().naive_local()));

        let candidate = self.persist(
            candidate_id,
            CandidateUpdate {
                status: Some(next),
                interview_at: Some(at),
                ..CandidateUpdate::default()
            },
        )?;
        info!(candidate = %candidate_id, %at, "interview scheduled");
        Ok(candidate)
    }

    fn persist(
        &self,
        candidate_id: &CandidateId,
        update: CandidateUpdate,
    ) -> Result<Candidate, MatchingServiceError> {
        self.store
            .update_candidate(candidate_id, update)?
            .ok_or_else(|| MatchingServiceError::CandidateNotFound(candidate_id.clone()))
    }
}

/// Three days out at 10:00.
pub fn default_interview_slot(now: NaiveDateTime) -> NaiveDateTime {
    let day = now.date() + Duration::days(3);
    day.and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN))
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchingServiceError {
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error("candidate {0} not found")]
    CandidateNotFound(CandidateId),
    #[error(transparent)]
    Transition(#[from] StatusTransitionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
