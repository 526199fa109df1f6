//! Model-backed extractor. The model does the reading; defaults, the skill cap
//! and the profile score are applied locally.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::completeness::compute_profile_score;
use crate::extraction::narrative::{build_summary, classify_career_intent};
use crate::extraction::prompts::EXTRACT_PROMPT_TEMPLATE;
use crate::extraction::{validate_resume_text, ResumeExtractor};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, LlmBackend};
use crate::models::profile::{CandidateProfile, FALLBACK_NAME, MAX_SKILLS};

/// Shape requested from the model. Every field is optional, and may be null,
/// so a sparse answer still yields a profile.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ModelProfile {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    skills: Option<Vec<String>>,
    experience_years: Option<f64>,
    education: Option<String>,
    summary: Option<String>,
    career_intent: Option<String>,
}

pub struct LlmExtractor {
    llm: Arc<dyn LlmBackend>,
}

impl LlmExtractor {
    pub fn new(llm: Arc<dyn LlmBackend>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeExtractor for LlmExtractor {
    fn backend(&self) -> &'static str {
        "llm"
    }

    fn capabilities(&self) -> &'static [&'static str] {
        &["resume-parsing:llm", "profile-scoring"]
    }

    async fn extract(&self, resume_text: &str) -> Result<CandidateProfile, AppError> {
        validate_resume_text(resume_text)?;

        let prompt = EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
        let parsed: ModelProfile =
            complete_json(self.llm.as_ref(), &prompt, JSON_ONLY_SYSTEM).await?;
        debug!(model = self.llm.model(), "Model extraction parsed");

        Ok(into_profile(parsed, resume_text))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn into_profile(parsed: ModelProfile, resume_text: &str) -> CandidateProfile {
    let mut skills: Vec<String> = Vec::new();
    for skill in parsed.skills.unwrap_or_default() {
        let skill = skill.trim().to_string();
        if !skill.is_empty() && !skills.iter().any(|s| s.eq_ignore_ascii_case(&skill)) {
            skills.push(skill);
        }
    }
    skills.truncate(MAX_SKILLS);

    let experience_years = parsed
        .experience_years
        .filter(|y| y.is_finite() && *y > 0.0)
        .map(|y| y.round().min(u32::MAX as f64) as u32)
        .unwrap_or(0);
    let education = non_blank(parsed.education);

    let career_intent = non_blank(parsed.career_intent)
        .unwrap_or_else(|| classify_career_intent(resume_text).label().to_string());
    let summary = non_blank(parsed.summary).unwrap_or_else(|| {
        build_summary(
            experience_years,
            &skills,
            education.as_deref(),
            classify_career_intent(resume_text),
        )
    });

    let mut profile = CandidateProfile {
        name: non_blank(parsed.name).unwrap_or_else(|| FALLBACK_NAME.to_string()),
        email: non_blank(parsed.email),
        phone: non_blank(parsed.phone),
        skills,
        experience_years,
        education,
        summary,
        career_intent,
        profile_score: 0,
    };
    profile.profile_score = compute_profile_score(&profile);
    profile
}
