// Matcher: scores a candidate against job postings.
// Keyword scoring is local; the LLM backend goes through llm_client.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::job::{JobPosting, MatchCandidate, MatchResult};

pub mod handlers;
pub mod llm;
pub mod prompts;
pub mod scoring;

/// Ranks jobs for a candidate. Implement this to swap backends without
/// touching the handler.
///
/// Carried in `AppState` as `Arc<dyn JobMatcher>`.
#[async_trait]
pub trait JobMatcher: Send + Sync {
    fn backend(&self) -> &'static str;

    /// Capability tags advertised by `/health`.
    fn capabilities(&self) -> &'static [&'static str];

    /// Results ordered best first.
    async fn rank(
        &self,
        candidate: &MatchCandidate,
        jobs: &[JobPosting],
    ) -> Result<Vec<MatchResult>, AppError>;
}

pub fn validate_jobs(jobs: &[JobPosting]) -> Result<(), AppError> {
    if jobs.is_empty() {
        return Err(AppError::Validation(
            "jobs must contain at least one job".to_string(),
        ));
    }
    Ok(())
}
