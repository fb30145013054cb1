use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::AppError;

use super::domain::{CandidateId, CandidateSignals, CandidateStatus, JobId, JobSignals, JobUpdate};
use super::repository::RecruitingStore;
use super::service::{CandidateSubmission, JobSubmission, MatchingService, MatchingServiceError};

type SharedService<S> = State<Arc<MatchingService<S>>>;

/// Router builder exposing parsing, scoring, analysis and shortlisting endpoints.
///
/// Malformed bodies and query strings answer with the same `{ "error": .. }` shape as
/// service errors.
pub fn matching_router<S>(service: Arc<MatchingService<S>>) -> Router
where
    S: RecruitingStore + 'static,
{
    Router::new()
        .route("/api/v1/resumes/parse", post(parse_resume_handler::<S>))
        .route("/api/v1/jobs/parse", post(parse_job_handler::<S>))
        .route("/api/v1/match", post(match_handler::<S>))
        .route(
            "/api/v1/jobs",
            get(list_jobs_handler::<S>).post(create_job_handler::<S>),
        )
        .route(
            "/api/v1/jobs/:job_id",
            get(job_handler::<S>)
                .patch(update_job_handler::<S>)
                .delete(delete_job_handler::<S>),
        )
        .route("/api/v1/jobs/:job_id/analyze", post(analyze_handler::<S>))
        .route("/api/v1/jobs/:job_id/shortlist", post(shortlist_handler::<S>))
        .route(
            "/api/v1/candidates",
            get(list_candidates_handler::<S>).post(create_candidate_handler::<S>),
        )
        .route("/api/v1/candidates/:candidate_id", get(candidate_handler::<S>))
        .route(
            "/api/v1/candidates/:candidate_id/status",
            post(status_handler::<S>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/interview",
            post(interview_handler::<S>),
        )
        .route("/api/v1/stats", get(stats_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct TextPayload {
    pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatchPayload {
    pub(crate) candidate: CandidateSignals,
    pub(crate) job: JobSignals,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ShortlistParams {
    pub(crate) threshold: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CandidateFilter {
    pub(crate) job_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusPayload {
    pub(crate) status: CandidateStatus,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InterviewPayload {
    #[serde(default)]
    pub(crate) at: Option<NaiveDateTime>,
}

pub(crate) async fn parse_resume_handler<S>(
    State(service): SharedService<S>,
    payload: Result<Json<TextPayload>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: RecruitingStore + 'static,
{
    let Json(payload) = payload?;
    Ok((StatusCode::OK, Json(service.parse_resume(&payload.text))).into_response())
}

pub(crate) async fn parse_job_handler<S>(
    State(service): SharedService<S>,
    payload: Result<Json<TextPayload>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: RecruitingStore + 'static,
{
    let Json(payload) = payload?;
    Ok((StatusCode::OK, Json(service.parse_job_description(&payload.text))).into_response())
}

pub(crate) async fn match_handler<S>(
    State(service): SharedService<S>,
    payload: Result<Json<MatchPayload>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: RecruitingStore + 'static,
{
    let Json(payload) = payload?;
    let result = service.score_signals(&payload.candidate, &payload.job);
    Ok((StatusCode::OK, Json(result)).into_response())
}

pub(crate) async fn list_jobs_handler<S>(State(service): SharedService<S>) -> Response
where
    S: RecruitingStore + 'static,
{
    respond(service.jobs(), StatusCode::OK)
}

pub(crate) async fn create_job_handler<S>(
    State(service): SharedService<S>,
    submission: Result<Json<JobSubmission>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: RecruitingStore + 'static,
{
    let Json(submission) = submission?;
    Ok(respond(service.register_job(submission), StatusCode::CREATED))
}

pub(crate) async fn job_handler<S>(
    State(service): SharedService<S>,
    Path(job_id): Path<String>,
) -> Response
where
    S: RecruitingStore + 'static,
{
    respond(service.job(&JobId(job_id)), StatusCode::OK)
}

pub(crate) async fn update_job_handler<S>(
    State(service): SharedService<S>,
    Path(job_id): Path<String>,
    update: Result<Json<JobUpdate>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: RecruitingStore + 'static,
{
    let Json(update) = update?;
    Ok(respond(
        service.update_job(&JobId(job_id), update),
        StatusCode::OK,
    ))
}

pub(crate) async fn delete_job_handler<S>(
    State(service): SharedService<S>,
    Path(job_id): Path<String>,
) -> Response
where
    S: RecruitingStore + 'static,
{
    match service.delete_job(&JobId(job_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn analyze_handler<S>(
    State(service): SharedService<S>,
    Path(job_id): Path<String>,
) -> Response
where
    S: RecruitingStore + 'static,
{
    respond(service.analyze_job(&JobId(job_id)), StatusCode::OK)
}

pub(crate) async fn shortlist_handler<S>(
    State(service): SharedService<S>,
    Path(job_id): Path<String>,
    params: Result<Query<ShortlistParams>, QueryRejection>,
) -> Result<Response, AppError>
where
    S: RecruitingStore + 'static,
{
    let Query(params) = params?;
    Ok(respond(
        service.shortlist_job(&JobId(job_id), params.threshold),
        StatusCode::OK,
    ))
}

pub(crate) async fn list_candidates_handler<S>(
    State(service): SharedService<S>,
    filter: Result<Query<CandidateFilter>, QueryRejection>,
) -> Result<Response, AppError>
where
    S: RecruitingStore + 'static,
{
    let Query(filter) = filter?;
    let job_id = filter.job_id.map(JobId);
    Ok(respond(service.candidates(job_id.as_ref()), StatusCode::OK))
}

pub(crate) async fn create_candidate_handler<S>(
    State(service): SharedService<S>,
    submission: Result<Json<CandidateSubmission>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: RecruitingStore + 'static,
{
    let Json(submission) = submission?;
    Ok(respond(
        service.register_candidate(submission),
        StatusCode::CREATED,
    ))
}

pub(crate) async fn candidate_handler<S>(
    State(service): SharedService<S>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: RecruitingStore + 'static,
{
    respond(service.candidate(&CandidateId(candidate_id)), StatusCode::OK)
}

pub(crate) async fn status_handler<S>(
    State(service): SharedService<S>,
    Path(candidate_id): Path<String>,
    payload: Result<Json<StatusPayload>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: RecruitingStore + 'static,
{
    let Json(payload) = payload?;
    Ok(respond(
        service.change_status(&CandidateId(candidate_id), payload.status),
        StatusCode::OK,
    ))
}

pub(crate) async fn interview_handler<S>(
    State(service): SharedService<S>,
    Path(candidate_id): Path<String>,
    payload: Result<Json<InterviewPayload>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: RecruitingStore + 'static,
{
    let Json(payload) = payload?;
    Ok(respond(
        service.schedule_interview(&CandidateId(candidate_id), payload.at),
        StatusCode::OK,
    ))
}

pub(crate) async fn stats_handler<S>(State(service): SharedService<S>) -> Response
where
    S: RecruitingStore + 'static,
{
    respond(service.stats(), StatusCode::OK)
}

fn respond<T>(result: Result<T, MatchingServiceError>, status: StatusCode) -> Response
where
    T: serde::Serialize,
{
    match result {
        Ok(value) => (status, Json(value)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) fn error_response(error: MatchingServiceError) -> Response {
    AppError::from(error).into_response()
}
