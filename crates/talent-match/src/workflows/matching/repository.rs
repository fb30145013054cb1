use super::domain::{
    Candidate, CandidateId, CandidateUpdate, Job, JobId, JobUpdate, NewCandidate, NewJob,
    RecruitingStats,
};

/// Storage abstraction for jobs and candidates, injected into the matching service.
///
/// Absent records are `Ok(None)` / `Ok(false)`; `Err` is reserved for store failures.
pub trait RecruitingStore: Send + Sync {
    fn jobs(&self) -> Result<Vec<Job>, RepositoryError>;
    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    fn create_job(&self, job: NewJob) -> Result<Job, RepositoryError>;
    fn update_job(&self, id: &JobId, update: JobUpdate) -> Result<Option<Job>, RepositoryError>;
    fn delete_job(&self, id: &JobId) -> Result<bool, RepositoryError>;

    /// All candidates, or only those attached to `job_id`.
    fn candidates(&self, job_id: Option<&JobId>) -> Result<Vec<Candidate>, RepositoryError>;
    fn candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    /// Stores a candidate with status `new`.
    fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, RepositoryError>;
    fn update_candidate(
        &self,
        id: &CandidateId,
        update: CandidateUpdate,
    ) -> Result<Option<Candidate>, RepositoryError>;
    fn delete_candidate(&self, id: &CandidateId) -> Result<bool, RepositoryError>;

    fn stats(&self) -> Result<RecruitingStats, RepositoryError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
