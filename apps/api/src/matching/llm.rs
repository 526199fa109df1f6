//! Model-backed matcher. The model's scores and ordering are returned as-is.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, LlmBackend};
use crate::matching::prompts::MATCH_PROMPT_TEMPLATE;
use crate::matching::{validate_jobs, JobMatcher};
use crate::models::job::{JobPosting, MatchCandidate, MatchResult};

pub struct LlmJobMatcher {
    llm: Arc<dyn LlmBackend>,
}

impl LlmJobMatcher {
    pub fn new(llm: Arc<dyn LlmBackend>) -> Self {
        Self { llm }
    }
}

fn build_prompt(candidate: &MatchCandidate, jobs: &[JobPosting]) -> Result<String, AppError> {
    let candidate_json = serde_json::to_string_pretty(candidate)
        .map_err(|e| AppError::Internal(e.into()))?;
    let jobs_json =
        serde_json::to_string_pretty(jobs).map_err(|e| AppError::Internal(e.into()))?;

    Ok(MATCH_PROMPT_TEMPLATE
        .replace("{candidate_json}", &candidate_json)
        .replace("{jobs_json}", &jobs_json))
}

#[async_trait]
impl JobMatcher for LlmJobMatcher {
    fn backend(&self) -> &'static str {
        "llm"
    }

    fn capabilities(&self) -> &'static [&'static str] {
        &["job-matching:llm"]
    }

    async fn rank(
        &self,
        candidate: &MatchCandidate,
        jobs: &[JobPosting],
    ) -> Result<Vec<MatchResult>, AppError> {
        validate_jobs(jobs)?;

        let prompt = build_prompt(candidate, jobs)?;
        let results: Vec<MatchResult> =
            complete_json(self.llm.as_ref(), &prompt, JSON_ONLY_SYSTEM).await?;
        debug!(
            model = self.llm.model(),
            results = results.len(),
            "Model match results parsed"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::FakeLlm;

    fn job(id: &str) -> JobPosting {
        JobPosting {
            job_id: id.to_string(),
            title: "Data Analyst".to_string(),
            company: "Acme".to_string(),
            required_skills: vec!["SQL".to_string()],
            exp_required: 2,
        }
    }

    fn candidate() -> MatchCandidate {
        MatchCandidate {
            skills: vec!["SQL".to_string(), "Excel".to_string()],
            experience_years: 3,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_returns_model_order_verbatim() {
        let llm = Arc::new(FakeLlm::replying(
            r#"```json
[
  {"job_id": "b", "job_title": "Data Analyst", "company": "Acme", "match_score": 40.0,
   "confidence": "Low", "matched_skills": [], "gaps": ["SQL"],
   "ai_reasoning": "weak", "growth_potential": "Long-term Growth", "recommendation": "Stretch Role"},
  {"job_id": "a", "job_title": "Data Analyst", "company": "Acme", "match_score": 95.5,
   "confidence": "High", "matched_skills": ["SQL"], "gaps": [],
   "ai_reasoning": "strong", "growth_potential": "Immediate Impact", "recommendation": "Strong Match"}
]
```"#,
        ));
        let matcher = LlmJobMatcher::new(llm.clone());

        let results = matcher.rank(&candidate(), &[job("a"), job("b")]).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].job_id, "b");
        assert_eq!(results[0].match_score, 40.0);
        assert_eq!(results[1].recommendation, "Strong Match");
        assert!(results[0].skill_match.is_none());

        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.contains("\"Excel\""));
        assert!(prompt.contains("\"job_id\": \"a\""));
    }

    #[tokio::test]
    async fn test_non_array_reply_is_parse_error() {
        let llm = Arc::new(FakeLlm::replying("{\"match_score\": 50}"));
        let err = LlmJobMatcher::new(llm)
            .rank(&candidate(), &[job("a")])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UpstreamParse(_)));
    }

    #[tokio::test]
    async fn test_empty_jobs_rejected_before_model_call() {
        let llm = Arc::new(FakeLlm::replying("[]"));
        let err = LlmJobMatcher::new(llm.clone())
            .rank(&candidate(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(llm.call_count(), 0);
    }
}
