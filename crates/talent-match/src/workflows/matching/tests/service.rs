use std::sync::Arc;

use chrono::NaiveDate;

use super::common::*;

use crate::workflows::matching::{
    default_interview_slot, CandidateId, CandidateStatus, CandidateSubmission,
    CandidateUpdate, InMemoryRecruitingStore, JobId, JobUpdate, MatchingService,
    MatchingServiceError, NewJob,
    RecruitingStore, RepositoryError, ShortlistPolicy, EDUCATION_NOT_FOUND,
};

fn scores_by_name(store: &InMemoryRecruitingStore) -> Vec<(String, Option<u8>)> {
    store
        .candidates(None)
        .expect("candidates listed")
        .into_iter()
        .map(|candidate| (candidate.name, candidate.match_score))
        .collect()
}

#[test]
fn register_candidate_parses_resume_and_starts_as_new() {
    let (service, store) = build_service();
    let job = store.create_job(frontend_job()).expect("job stored");

    let candidate = service
        .register_candidate(CandidateSubmission {
            name: "Sarah Wilson".to_string(),
            email: "sarah.wilson@example.com".to_string(),
            phone: String::new(),
            resume_text: "Frontend developer with 3 years of React and CSS work.".to_string(),
            job_id: Some(job.id.clone()),
        })
        .expect("candidate registered");

    assert_eq!(candidate.status, CandidateStatus::New);
    assert_eq!(candidate.job_id, Some(job.id));
    assert!(candidate.skills.contains(&"React".to_string()));
    assert!(candidate.skills.contains(&"CSS".to_string()));
    assert_eq!(candidate.education, vec![EDUCATION_NOT_FOUND.to_string()]);
    assert_eq!(
        candidate.experience,
        vec!["Frontend developer with 3 years of React and CSS work".to_string()]
    );
    assert_eq!(candidate.match_score, None);
}

#[test]
fn register_candidate_rejects_unknown_job() {
    let (service, store) = build_service();

    let err = service
        .register_candidate(CandidateSubmission {
            name: "Lisa Anderson".to_string(),
            email: "lisa@example.com".to_string(),
            phone: String::new(),
            resume_text: String::new(),
            job_id: Some(JobId("job-404".to_string())),
        })
        .unwrap_err();

    assert!(matches!(err, MatchingServiceError::JobNotFound(_)));
    assert!(store.candidates(None).unwrap().is_empty());
}

#[test]
fn register_job_derives_missing_signals_from_description() {
    let (service, _) = build_service();

    let job = service
        .register_job(NewJob {
            title: "Data Engineer".to_string(),
            description: "Build pipelines in Python.\nExperience with Docker required".to_string(),
            ..NewJob::default()
        })
        .expect("job registered");

    assert!(job.skills.contains(&"Python".to_string()));
    assert!(job.skills.contains(&"Docker".to_string()));
    assert_eq!(job.requirements, vec!["Experience with Docker required".to_string()]);
}

#[test]
fn analyze_job_persists_every_score_in_store_order() {
    let (service, store, job_id) = seeded_service();

    let report = service.analyze_job(&job_id).expect("analysis runs");

    let reported: Vec<u8> = report.scores.iter().map(|s| s.match_score).collect();
    assert_eq!(reported, vec![88, 15, 43]);
    assert!(report.failed.is_empty());
    assert_eq!(
        scores_by_name(&store),
        vec![
            ("John Smith".to_string(), Some(88)),
            ("Michael Brown".to_string(), Some(15)),
            ("Emily Johnson".to_string(), Some(43)),
        ]
    );
}

#[test]
fn analyze_job_reports_failed_writes_without_aborting() {
    let inner = InMemoryRecruitingStore::with_creation_date(today());
    let job = inner.create_job(frontend_job()).expect("job stored");
    let strong = inner.create_candidate(strong_applicant(&job.id)).unwrap();
    let junior = inner.create_candidate(junior_applicant(&job.id)).unwrap();
    let store = Arc::new(FlakyStore {
        inner,
        failing: strong.id.clone(),
    });
    let service = MatchingService::new(store.clone(), ShortlistPolicy::default());

    let report = service.analyze_job(&job.id).expect("analysis runs");

    assert_eq!(report.scores.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].candidate_id, strong.id);
    assert!(report.failed[0].reason.contains("write timed out"));

    let stored_junior = store.candidate(&junior.id).unwrap().expect("junior stored");
    assert_eq!(stored_junior.match_score, Some(43));
    let stored_strong = store.candidate(&strong.id).unwrap().expect("strong stored");
    assert_eq!(stored_strong.match_score, None);
}

#[test]
fn analyze_job_requires_an_existing_job() {
    let (service, _, _) = seeded_service();

    match service.analyze_job(&JobId("job-404".to_string())) {
        Err(MatchingServiceError::JobNotFound(id)) => assert_eq!(id.0, "job-404"),
        other => panic!("expected missing job, got {other:?}"),
    }
}

#[test]
fn unavailable_store_surfaces_repository_error() {
    let service = MatchingService::new(Arc::new(UnavailableStore), ShortlistPolicy::default());

    match service.analyze_job(&JobId("job-1".to_string())) {
        Err(MatchingServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "database offline")
        }
        other => panic!("expected unavailable store, got {other:?}"),
    }
}

#[test]
fn shortlist_job_promotes_eligible_candidates_once() {
    let (service, store, job_id) = seeded_service();
    service.analyze_job(&job_id).expect("analysis runs");

    let first = service.shortlist_job(&job_id, None).expect("shortlist runs");
    let second = service.shortlist_job(&job_id, None).expect("shortlist reruns");

    assert_eq!(first.threshold, 80);
    assert_eq!(first.shortlisted, vec![CandidateId("candidate-1".to_string())]);
    assert!(second.shortlisted.is_empty());
    assert_eq!(store.stats().unwrap().shortlisted_candidates, 1);
}

#[test]
fn shortlist_threshold_override_applies_per_call() {
    let (service, _, job_id) = seeded_service();
    service.analyze_job(&job_id).expect("analysis runs");

    let report = service
        .shortlist_job(&job_id, Some(40))
        .expect("shortlist runs");

    assert_eq!(report.threshold, 40);
    assert_eq!(
        report.shortlisted,
        vec![
            CandidateId("candidate-1".to_string()),
            CandidateId("candidate-3".to_string()),
        ]
    );
}

#[test]
fn shortlist_job_skips_candidates_moved_after_selection() {
    let inner = InMemoryRecruitingStore::with_creation_date(today());
    let job = inner.create_job(frontend_job()).expect("job stored");
    let moved = inner.create_candidate(strong_applicant(&job.id)).unwrap();
    let waiting = inner.create_candidate(strong_applicant(&job.id)).unwrap();
    for id in [&moved.id, &waiting.id] {
        inner
            .update_candidate(id, CandidateUpdate::match_score(90))
            .unwrap();
    }
    let store = Arc::new(ShiftingStore {
        inner,
        moved: moved.id.clone(),
    });
    let service = MatchingService::new(store.clone(), ShortlistPolicy::default());

    let report = service.shortlist_job(&job.id, None).expect("shortlist runs");

    assert_eq!(report.shortlisted, vec![waiting.id.clone()]);
    assert!(report.failed.is_empty());
    let current = store.candidate(&moved.id).unwrap().expect("candidate kept");
    assert_eq!(current.status, CandidateStatus::Interviewing);
    let promoted = store.candidate(&waiting.id).unwrap().expect("candidate kept");
    assert_eq!(promoted.status, CandidateStatus::Shortlisted);
}

#[test]
fn updated_job_skills_drive_the_next_analysis() {
    let (service, store, job_id) = seeded_service();
    service.analyze_job(&job_id).expect("analysis runs");

    let job = service
        .update_job(
            &job_id,
            JobUpdate {
                skills: Some(strings(&["Python", "SQL"])),
                ..JobUpdate::default()
            },
        )
        .expect("job updated");
    assert_eq!(job.title, "Senior Frontend Developer");
    assert_eq!(job.requirements, frontend_job().requirements);
    assert_eq!(
        scores_by_name(&store)[1],
        ("Michael Brown".to_string(), Some(15))
    );

    let report = service.analyze_job(&job_id).expect("analysis reruns");

    assert_eq!(report.scores[0].match_score, 30);
    assert_eq!(report.scores[1].match_score, 85);
    assert_eq!(
        scores_by_name(&store)[1],
        ("Michael Brown".to_string(), Some(85))
    );
}

#[test]
fn update_job_requires_an_existing_job() {
    let (service, _, _) = seeded_service();

    match service.update_job(&JobId("job-404".to_string()), JobUpdate::default()) {
        Err(MatchingServiceError::JobNotFound(id)) => assert_eq!(id.0, "job-404"),
        other => panic!("expected missing job, got {other:?}"),
    }
}

#[test]
fn change_status_enforces_transition_table() {
    let (service, _, _) = seeded_service();
    let id = CandidateId("candidate-2".to_string());

    let reviewed = service
        .change_status(&id, CandidateStatus::Reviewed)
        .expect("new -> reviewed");
    assert_eq!(reviewed.status, CandidateStatus::Reviewed);

    match service.change_status(&id, CandidateStatus::Interviewing) {
        Err(MatchingServiceError::Transition(err)) => {
            assert_eq!(err.from, CandidateStatus::Reviewed);
            assert_eq!(err.to, CandidateStatus::Interviewing);
        }
        other => panic!("expected transition error, got {other:?}"),
    }
}

#[test]
fn schedule_interview_requires_shortlist_and_records_slot() {
    let (service, _, _) = seeded_service();
    let id = CandidateId("candidate-1".to_string());
    let slot = NaiveDate::from_ymd_opt(2023, 10, 20)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    assert!(matches!(
        service.schedule_interview(&id, Some(slot)),
        Err(MatchingServiceError::Transition(_))
    ));

    service
        .change_status(&id, CandidateStatus::Shortlisted)
        .expect("new -> shortlisted");
    let candidate = service
        .schedule_interview(&id, Some(slot))
        .expect("interview scheduled");

    assert_eq!(candidate.status, CandidateStatus::Interviewing);
    assert_eq!(candidate.interview_at, Some(slot));
}

#[test]
fn default_interview_slot_is_three_days_out_at_ten() {
    let now = NaiveDate::from_ymd_opt(2023, 10, 30)
        .unwrap()
        .and_hms_opt(16, 45, 0)
        .unwrap();

    assert_eq!(
        default_interview_slot(now),
        NaiveDate::from_ymd_opt(2023, 11, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    );
}

#[test]
fn missing_records_map_to_service_errors() {
    let (service, _) = build_service();

    assert!(matches!(
        service.candidate(&CandidateId("candidate-9".to_string())),
        Err(MatchingServiceError::CandidateNotFound(_))
    ));
    assert!(matches!(
        service.delete_job(&JobId("job-9".to_string())),
        Err(MatchingServiceError::JobNotFound(_))
    ));
}
