//! Candidate/job matching: rule-based extraction, deterministic scoring, batch analysis
//! and the shortlist threshold, plus the service and router that put them behind a store.

pub mod batch;
pub mod catalog;
pub mod domain;
pub mod extraction;
pub mod memory;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod shortlist;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use batch::{analyze, explain};
pub use catalog::{import_job_catalog, CatalogImportError};
pub use domain::{
    Candidate, CandidateId, CandidateSignals, CandidateStatus, CandidateUpdate, Job, JobId,
    JobSignals, JobUpdate, NewCandidate, NewJob, RecruitingStats, StatusTransitionError,
};
pub use extraction::{
    extract, extract_requirements, parse_job_description, parse_resume, ExtractionResult,
    JobDescriptionSignals, EDUCATION_NOT_FOUND, EXPERIENCE_NOT_FOUND,
};
pub use memory::InMemoryRecruitingStore;
pub use repository::{RecruitingStore, RepositoryError};
pub use router::matching_router;
pub use scoring::{score, MatchFactor, MatchResult, MatchScorer, ScoreComponent, ScoringConfig};
pub use service::{
    default_interview_slot, AnalysisReport, CandidateScore, CandidateSubmission, JobSubmission,
    MatchingService, MatchingServiceError, PersistFailure, ShortlistReport,
};
pub use shortlist::{shortlist, ShortlistPolicy, DEFAULT_SHORTLIST_THRESHOLD};
pub use vocabulary::SkillVocabulary;
