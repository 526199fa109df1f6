//! Axum route handler for job matching.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::matching::scoring::{score_single, SingleMatchRequest, SingleMatchResult};
use crate::models::job::{JobPosting, MatchCandidate, MatchResult};
use crate::routes::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MatchJobsRequest {
    pub candidate: Option<MatchCandidate>,
    pub jobs: Option<Vec<JobPosting>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MatchJobsData {
    Ranked(Vec<MatchResult>),
    Single(SingleMatchResult),
}

fn invalid_body(e: serde_json::Error) -> AppError {
    AppError::Validation(format!("Invalid request body: {e}"))
}

/// True for the inline single-job body
/// `{candidate_skills, job_skills, candidate_experience, required_experience}`.
fn is_single_job_form(body: &Value) -> bool {
    body.get("candidate_skills").is_some() || body.get("job_skills").is_some()
}

/// A candidate is scorable only if it carries at least one of the fields the
/// matcher reads.
fn has_scoring_fields(candidate: &Value) -> bool {
    candidate.get("skills").is_some_and(|v| !v.is_null())
        || candidate.get("experience_years").is_some_and(|v| !v.is_null())
}

/// POST /api/match-jobs
///
/// Accepts either `{candidate, jobs}` and returns jobs ranked best first, or
/// the single-job inline form and returns one score. The inline form is always
/// scored locally.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<MatchJobsData>>, AppError> {
    let Json(body) = payload?;
    if !body.is_object() {
        return Err(AppError::Validation(
            "request body must be a JSON object".to_string(),
        ));
    }

    if is_single_job_form(&body) {
        let request: SingleMatchRequest = serde_json::from_value(body).map_err(invalid_body)?;
        let result = score_single(&request, &state.match_policy);
        info!(
            overall_score = result.overall_score,
            "Single job match scored"
        );
        return Ok(Json(ApiResponse::ok(MatchJobsData::Single(result))));
    }

    match body.get("candidate") {
        None | Some(Value::Null) => {
            return Err(AppError::Validation("candidate is required".to_string()))
        }
        Some(candidate) if !has_scoring_fields(candidate) => {
            return Err(AppError::Validation(
                "candidate must include skills or experience_years".to_string(),
            ))
        }
        Some(_) => {}
    }

    let request: MatchJobsRequest = serde_json::from_value(body).map_err(invalid_body)?;
    let candidate = request.candidate.unwrap_or_default();
    let jobs = request.jobs.unwrap_or_default();

    let results = state.matcher.rank(&candidate, &jobs).await?;
    info!(
        backend = state.matcher.backend(),
        jobs = jobs.len(),
        top_score = results.first().map(|r| r.match_score),
        "Jobs matched"
    );

    Ok(Json(ApiResponse::ok(MatchJobsData::Ranked(results))))
}
