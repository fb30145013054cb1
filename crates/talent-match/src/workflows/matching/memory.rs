use std::sync::{Mutex, MutexGuard};

use chrono::{Local, NaiveDate};

use super::domain::{
    Candidate, CandidateId, CandidateStatus, CandidateUpdate, Job, JobId, JobUpdate, NewCandidate,
    NewJob, RecruitingStats,
};
use super::repository::{RecruitingStore, RepositoryError};

/// Process-local store keeping records in insertion order.
///
/// Ids come from per-kind sequences (`job-1`, `candidate-1`, ...). The creation date is
/// today's local date unless pinned with [`InMemoryRecruitingStore::with_creation_date`].
#[derive(Debug, Default)]
pub struct InMemoryRecruitingStore {
    state: Mutex<StoreState>,
    creation_date: Option<NaiveDate>,
}

#[derive(Debug, Default)]
struct StoreState {
    jobs: Vec<Job>,
    candidates: Vec<Candidate>,
    job_sequence: u64,
    candidate_sequence: u64,
}

impl InMemoryRecruitingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creation_date(date: NaiveDate) -> Self {
        Self {
            state: Mutex::default(),
            creation_date: Some(date),
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, StoreState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
    }

    fn today(&self) -> NaiveDate {
        self.creation_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

impl RecruitingStore for InMemoryRecruitingStore {
    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(self.state()?.jobs.clone())
    }

    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self.state()?.jobs.iter().find(|job| &job.id == id).cloned())
    }

    fn create_job(&self, job: NewJob) -> Result<Job, RepositoryError> {
        let created_at = self.today();
        let mut state = self.state()?;
        state.job_sequence += 1;
        let job = Job {
            id: JobId(format!("job-{}", state.job_sequence)),
            title: job.title,
            company: job.company,
            location: job.location,
            description: job.description,
            requirements: job.requirements,
            skills: job.skills,
            created_at,
        };
        state.jobs.push(job.clone());
        Ok(job)
    }

    fn update_job(&self, id: &JobId, update: JobUpdate) -> Result<Option<Job>, RepositoryError> {
        let mut state = self.state()?;
        Ok(state.jobs.iter_mut().find(|job| &job.id == id).map(|job| {
            update.apply(job);
            job.clone()
        }))
    }

    fn delete_job(&self, id: &JobId) -> Result<bool, RepositoryError> {
        let mut state = self.state()?;
        let before = state.jobs.len();
        state.jobs.retain(|job| &job.id != id);
        Ok(state.jobs.len() != before)
    }

    fn candidates(&self, job_id: Option<&JobId>) -> Result<Vec<Candidate>, RepositoryError> {
        let state = self.state()?;
        Ok(state
            .candidates
            .iter()
            .filter(|candidate| job_id.map_or(true, |id| candidate.job_id.as_ref() == Some(id)))
            .cloned()
            .collect())
    }

    fn candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Ok(self
            .state()?
            .candidates
            .iter()
            .find(|candidate| &candidate.id == id)
            .cloned())
    }

    fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, RepositoryError> {
        let created_at = self.today();
        let mut state = self.state()?;
        state.candidate_sequence += 1;
        let candidate = Candidate {
            id: CandidateId(format!("candidate-{}", state.candidate_sequence)),
            name: candidate.name,
            email: candidate.email,
            phone: candidate.phone,
            resume_text: candidate.resume_text,
            skills: candidate.skills,
            education: candidate.education,
            experience: candidate.experience,
            match_score: candidate.match_score,
            job_id: candidate.job_id,
            status: CandidateStatus::New,
            created_at,
            interview_at: None,
        };
        state.candidates.push(candidate.clone());
        Ok(candidate)
    }

    fn update_candidate(
        &self,
        id: &CandidateId,
        update: CandidateUpdate,
    ) -> Result<Option<Candidate>, RepositoryError> {
        let mut state = self.state()?;
        Ok(state
            .candidates
            .iter_mut()
            .find(|candidate| &candidate.id == id)
            .map(|candidate| {
                update.apply(candidate);
                candidate.clone()
            }))
    }

    fn delete_candidate(&self, id: &CandidateId) -> Result<bool, RepositoryError> {
        let mut state = self.state()?;
        let before = state.candidates.len();
        state.candidates.retain(|candidate| &candidate.id != id);
        Ok(state.candidates.len() != before)
    }

    fn stats(&self) -> Result<RecruitingStats, RepositoryError> {
        let state = self.state()?;
        let count = |status: CandidateStatus| {
            state
                .candidates
                .iter()
                .filter(|candidate| candidate.status == status)
                .count()
        };
        Ok(RecruitingStats {
            total_jobs: state.jobs.len(),
            total_candidates: state.candidates.len(),
            shortlisted_candidates: count(CandidateStatus::Shortlisted),
            interviewing_candidates: count(CandidateStatus::Interviewing),
        })
    }
}
