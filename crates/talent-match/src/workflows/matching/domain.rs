use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for candidates in the pool.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Published job posting as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub created_at: NaiveDate,
}

impl Job {
    /// The fields the match scorer reads.
    pub fn signals(&self) -> JobSignals {
        JobSignals {
            skills: self.skills.clone(),
            requirements: self.requirements.clone(),
        }
    }
}

/// Fields supplied when a job is created; the store assigns id and creation date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Partial job update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
}

impl JobUpdate {
    pub fn apply(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(company) = self.company {
            job.company = company;
        }
        if let Some(location) = self.location {
            job.location = location;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(requirements) = self.requirements {
            job.requirements = requirements;
        }
        if let Some(skills) = self.skills {
            job.skills = skills;
        }
    }
}

/// Candidate record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume_text: String,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobId>,
    pub status: CandidateStatus,
    pub created_at: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_at: Option<NaiveDateTime>,
}

impl Candidate {
    /// The fields the match scorer reads.
    pub fn signals(&self) -> CandidateSignals {
        CandidateSignals {
            skills: self.skills.clone(),
            experience: self.experience.clone(),
        }
    }
}

/// Fields supplied when a candidate is created. Status always starts at [`CandidateStatus::New`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume_text: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub match_score: Option<u8>,
    #[serde(default)]
    pub job_id: Option<JobId>,
}

/// Partial candidate update, used to persist scores and status changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume_text: Option<String>,
    pub skills: Option<Vec<String>>,
    pub education: Option<Vec<String>>,
    pub experience: Option<Vec<String>>,
    pub match_score: Option<u8>,
    pub job_id: Option<JobId>,
    pub status: Option<CandidateStatus>,
    pub interview_at: Option<NaiveDateTime>,
}

impl CandidateUpdate {
    pub fn match_score(score: u8) -> Self {
        Self {
            match_score: Some(score),
            ..Self::default()
        }
    }

    pub fn status(status: CandidateStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(self, candidate: &mut Candidate) {
        if let Some(name) = self.name {
            candidate.name = name;
        }
        if let Some(email) = self.email {
            candidate.email = email;
        }
        if let Some(phone) = self.phone {
            candidate.phone = phone;
        }
        if let Some(resume_text) = self.resume_text {
            candidate.resume_text = resume_text;
        }
        if let Some(skills) = self.skills {
            candidate.skills = skills;
        }
        if let Some(education) = self.education {
            candidate.education = education;
        }
        if let Some(experience) = self.experience {
            candidate.experience = experience;
        }
        if let Some(score) = self.match_score {
            candidate.match_score = Some(score);
        }
        if let Some(job_id) = self.job_id {
            candidate.job_id = Some(job_id);
        }
        if let Some(status) = self.status {
            candidate.status = status;
        }
        if let Some(interview_at) = self.interview_at {
            candidate.interview_at = Some(interview_at);
        }
    }
}

/// Pipeline stage of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    Reviewed,
    Shortlisted,
    Rejected,
    Interviewing,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 5] = [
        CandidateStatus::New,
        CandidateStatus::Reviewed,
        CandidateStatus::Shortlisted,
        CandidateStatus::Rejected,
        CandidateStatus::Interviewing,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CandidateStatus::New => "new",
            CandidateStatus::Reviewed => "reviewed",
            CandidateStatus::Shortlisted => "shortlisted",
            CandidateStatus::Rejected => "rejected",
            CandidateStatus::Interviewing => "interviewing",
        }
    }

    /// Recruiter-facing transition table.
    pub const fn can_transition_to(self, next: CandidateStatus) -> bool {
        use CandidateStatus::*;

        matches!(
            (self, next),
            (New, Reviewed)
                | (New | Reviewed | Rejected, Shortlisted)
                | (Shortlisted, Interviewing)
                | (New | Reviewed | Shortlisted | Interviewing, Rejected)
                | (Rejected, New)
        )
    }

    pub fn transition_to(self, next: CandidateStatus) -> Result<CandidateStatus, StatusTransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(StatusTransitionError {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a status change is not in the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move candidate from {from} to {to}")]
pub struct StatusTransitionError {
    pub from: CandidateStatus,
    pub to: CandidateStatus,
}

/// Candidate fields consumed by the match scorer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateSignals {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
}

/// Job fields consumed by the match scorer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobSignals {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
}

/// Aggregate counters shown on the recruiting dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecruitingStats {
    pub total_jobs: usize,
    pub total_candidates: usize,
    pub shortlisted_candidates: usize,
    pub interviewing_candidates: usize,
}
