use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::matching::{
    matching_router, Candidate, CandidateId, CandidateStatus, CandidateUpdate,
    InMemoryRecruitingStore, Job, JobId, JobUpdate, MatchingService, NewCandidate, NewJob,
    RecruitingStats, RecruitingStore, RepositoryError, ShortlistPolicy, SkillVocabulary,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 15).expect("valid date")
}

pub(super) fn vocabulary() -> &'static SkillVocabulary {
    SkillVocabulary::standard()
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn frontend_job() -> NewJob {
    NewJob {
        title: "Senior Frontend Developer".to_string(),
        company: "TechCorp Inc.".to_string(),
        location: "San Francisco, CA".to_string(),
        description: "We are looking for a Senior Frontend Developer to build modern web \
                      applications with React and TypeScript."
            .to_string(),
        requirements: strings(&[
            "5+ years of experience with React",
            "Strong TypeScript skills",
            "Bachelor's degree in Computer Science or related field",
        ]),
        skills: strings(&[
            "React",
            "TypeScript",
            "CSS",
            "HTML",
            "JavaScript",
            "Responsive Design",
        ]),
    }
}

/// Scores 88 against [`frontend_job`].
pub(super) fn strong_applicant(job_id: &JobId) -> NewCandidate {
    NewCandidate {
        name: "John Smith".to_string(),
        email: "john.smith@example.com".to_string(),
        phone: "555-123-4567".to_string(),
        skills: strings(&["React", "TypeScript", "JavaScript", "CSS", "HTML"]),
        experience: strings(&["Senior Frontend Developer with 6 years of experience in React"]),
        job_id: Some(job_id.clone()),
        ..NewCandidate::default()
    }
}

/// Scores 15 against [`frontend_job`].
pub(super) fn unrelated_applicant(job_id: &JobId) -> NewCandidate {
    NewCandidate {
        name: "Michael Brown".to_string(),
        email: "michael.brown@example.com".to_string(),
        skills: strings(&["Python", "SQL"]),
        experience: strings(&["Worked as a data analyst for 2 years"]),
        job_id: Some(job_id.clone()),
        ..NewCandidate::default()
    }
}

/// Scores 43 against [`frontend_job`].
pub(super) fn junior_applicant(job_id: &JobId) -> NewCandidate {
    NewCandidate {
        name: "Emily Johnson".to_string(),
        email: "emily.johnson@example.com".to_string(),
        skills: strings(&["React", "CSS"]),
        experience: strings(&["4 years as a frontend developer"]),
        job_id: Some(job_id.clone()),
        ..NewCandidate::default()
    }
}

pub(super) fn scored_candidate(id: &str, status: CandidateStatus, score: Option<u8>) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        name: format!("Candidate {id}"),
        email: format!("{id}@example.com"),
        phone: String::new(),
        resume_text: String::new(),
        skills: Vec::new(),
        education: Vec::new(),
        experience: Vec::new(),
        match_score: score,
        job_id: Some(JobId("job-1".to_string())),
        status,
        created_at: today(),
        interview_at: None,
    }
}

pub(super) fn memory_store() -> Arc<InMemoryRecruitingStore> {
    Arc::new(InMemoryRecruitingStore::with_creation_date(today()))
}

pub(super) fn build_service() -> (
    MatchingService<InMemoryRecruitingStore>,
    Arc<InMemoryRecruitingStore>,
) {
    let store = memory_store();
    let service = MatchingService::new(store.clone(), ShortlistPolicy::default());
    (service, store)
}

/// Store seeded with [`frontend_job`] and three applicants, in the order strong, unrelated, junior.
pub(super) fn seeded_service() -> (
    MatchingService<InMemoryRecruitingStore>,
    Arc<InMemoryRecruitingStore>,
    JobId,
) {
    let (service, store) = build_service();
    let job = store.create_job(frontend_job()).expect("job stored");
    for applicant in [
        strong_applicant(&job.id),
        unrelated_applicant(&job.id),
        junior_applicant(&job.id),
    ] {
        store.create_candidate(applicant).expect("candidate stored");
    }
    (service, store, job.id)
}

pub(super) fn matching_router_with_service(
    service: MatchingService<InMemoryRecruitingStore>,
) -> axum::Router {
    matching_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) struct UnavailableStore;

impl RecruitingStore for UnavailableStore {
    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        Err(offline())
    }

    fn job(&self, _id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Err(offline())
    }

    fn create_job(&self, _job: NewJob) -> Result<Job, RepositoryError> {
        Err(offline())
    }

    fn update_job(&self, _id: &JobId, _update: JobUpdate) -> Result<Option<Job>, RepositoryError> {
        Err(offline())
    }

    fn delete_job(&self, _id: &JobId) -> Result<bool, RepositoryError> {
        Err(offline())
    }

    fn candidates(&self, _job_id: Option<&JobId>) -> Result<Vec<Candidate>, RepositoryError> {
        Err(offline())
    }

    fn candidate(&self, _id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Err(offline())
    }

    fn create_candidate(&self, _candidate: NewCandidate) -> Result<Candidate, RepositoryError> {
        Err(offline())
    }

    fn update_candidate(
        &self,
        _id: &CandidateId,
        _update: CandidateUpdate,
    ) -> Result<Option<Candidate>, RepositoryError> {
        Err(offline())
    }

    fn delete_candidate(&self, _id: &CandidateId) -> Result<bool, RepositoryError> {
        Err(offline())
    }

    fn stats(&self) -> Result<RecruitingStats, RepositoryError> {
        Err(offline())
    }
}

fn offline() -> RepositoryError {
    RepositoryError::Unavailable("database offline".to_string())
}

/// Memory store whose writes fail for a single candidate.
pub(super) struct FlakyStore {
    pub(super) inner: InMemoryRecruitingStore,
    pub(super) failing: CandidateId,
}

impl RecruitingStore for FlakyStore {
    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        self.inner.jobs()
    }

    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        self.inner.job(id)
    }

    fn create_job(&self, job: NewJob) -> Result<Job, RepositoryError> {
        self.inner.create_job(job)
    }

    fn update_job(&self, id: &JobId, update: JobUpdate) -> Result<Option<Job>, RepositoryError> {
        self.inner.update_job(id, update)
    }

    fn delete_job(&self, id: &JobId) -> Result<bool, RepositoryError> {
        self.inner.delete_job(id)
    }

    fn candidates(&self, job_id: Option<&JobId>) -> Result<Vec<Candidate>, RepositoryError> {
        self.inner.candidates(job_id)
    }

    fn candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        self.inner.candidate(id)
    }

    fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, RepositoryError> {
        self.inner.create_candidate(candidate)
    }

    fn update_candidate(
        &self,
        id: &CandidateId,
        update: CandidateUpdate,
    ) -> Result<Option<Candidate>, RepositoryError> {
        if id == &self.failing {
            return Err(RepositoryError::Unavailable("write timed out".to_string()));
        }
        self.inner.update_candidate(id, update)
    }

    fn delete_candidate(&self, id: &CandidateId) -> Result<bool, RepositoryError> {
        self.inner.delete_candidate(id)
    }

    fn stats(&self) -> Result<RecruitingStats, RepositoryError> {
        self.inner.stats()
    }
}

/// Memory store that moves one candidate to `interviewing` right after every listing,
/// as if a recruiter acted while a batch operation was running.
pub(super) struct ShiftingStore {
    pub(super) inner: InMemoryRecruitingStore,
    pub(super) moved: CandidateId,
}

impl RecruitingStore for ShiftingStore {
    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        self.inner.jobs()
    }

    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        self.inner.job(id)
    }

    fn create_job(&self, job: NewJob) -> Result<Job, RepositoryError> {
        self.inner.create_job(job)
    }

    fn update_job(&self, id: &JobId, update: JobUpdate) -> Result<Option<Job>, RepositoryError> {
        self.inner.update_job(id, update)
    }

    fn delete_job(&self, id: &JobId) -> Result<bool, RepositoryError> {
        self.inner.delete_job(id)
    }

    fn candidates(&self, job_id: Option<&JobId>) -> Result<Vec<Candidate>, RepositoryError> {
        let listed = self.inner.candidates(job_id)?;
        self.inner.update_candidate(
            &self.moved,
            CandidateUpdate::status(CandidateStatus::Interviewing),
        )?;
        Ok(listed)
    }

    fn candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        self.inner.candidate(id)
    }

    fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, RepositoryError> {
        self.inner.create_candidate(candidate)
    }

    fn update_candidate(
        &self,
        id: &CandidateId,
        update: CandidateUpdate,
    ) -> Result<Option<Candidate>, RepositoryError> {
        self.inner.update_candidate(id, update)
    }

    fn delete_candidate(&self, id: &CandidateId) -> Result<bool, RepositoryError> {
        self.inner.delete_candidate(id)
    }

    fn stats(&self) -> Result<RecruitingStats, RepositoryError> {
        self.inner.stats()
    }
}
