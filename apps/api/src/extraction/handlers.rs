//! Axum route handler for resume extraction.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::CandidateProfile;
use crate::routes::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// POST /api/parse-resume
///
/// Extracts a structured candidate profile from raw resume text using the
/// configured extractor backend.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    payload: Result<Json<ParseResumeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CandidateProfile>>, AppError> {
    let Json(request) = payload?;
    let resume_text = request
        .resume_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("resume_text is required".to_string()))?;

    let profile = state.extractor.extract(&resume_text).await?;
    info!(
        backend = state.extractor.backend(),
        skills = profile.skills.len(),
        profile_score = profile.profile_score,
        "Resume parsed"
    );

    Ok(Json(ApiResponse::ok(profile)))
}
