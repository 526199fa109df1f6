pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::extraction::handlers::handle_parse_resume;
use crate::matching::handlers::handle_match_jobs;
use crate::state::AppState;

/// Success envelope shared by the API routes. Failures use the
/// `{success: false, error}` body rendered by `AppError`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/parse-resume", post(handle_parse_resume))
        .route("/api/match-jobs", post(handle_match_jobs))
        .with_state(state)
}
