//! Extractor — turns raw resume text into a `CandidateProfile`.
//!
//! Two backends behind one trait:
//! - `RuleBasedExtractor`: regex and keyword rules, deterministic.
//! - `LlmExtractor`: delegates reading to the model, scores locally.
//!
//! `AppState` holds an `Arc<dyn ResumeExtractor>`, chosen at startup via config.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, FALLBACK_NAME};

pub mod completeness;
pub mod handlers;
pub mod llm;
pub mod narrative;
pub mod prompts;
pub mod rules;
pub mod vocabulary;

#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    /// Short backend label reported by `/health`.
    fn backend(&self) -> &'static str;

    /// Capability tags advertised by `/health`.
    fn capabilities(&self) -> &'static [&'static str];

    async fn extract(&self, resume_text: &str) -> Result<CandidateProfile, AppError>;
}

pub fn validate_resume_text(resume_text: &str) -> Result<(), AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text is required".to_string()));
    }
    Ok(())
}

pub struct RuleBasedExtractor;

#[async_trait]
impl ResumeExtractor for RuleBasedExtractor {
    fn backend(&self) -> &'static str {
        "rule-based"
    }

    fn capabilities(&self) -> &'static [&'static str] {
        &["resume-parsing:rules", "skill-inference", "profile-scoring"]
    }

    async fn extract(&self, resume_text: &str) -> Result<CandidateProfile, AppError> {
        validate_resume_text(resume_text)?;
        Ok(extract_profile(resume_text))
    }
}

/// Runs every rule over the text and assembles the profile.
pub fn extract_profile(text: &str) -> CandidateProfile {
    let skills = rules::extract_skills(text);
    let experience_years = rules::extract_experience_years(text);
    let education = rules::detect_education(text).map(|e| e.label().to_string());
    let intent = narrative::classify_career_intent(text);
    let summary =
        narrative::build_summary(experience_years, &skills, education.as_deref(), intent);

    let mut profile = CandidateProfile {
        name: rules::extract_name(text).unwrap_or_else(|| FALLBACK_NAME.to_string()),
        email: rules::extract_email(text),
        phone: rules::extract_phone(text),
        skills,
        experience_years,
        education,
        summary,
        career_intent: intent.label().to_string(),
        profile_score: 0,
    };
    profile.profile_score = completeness::compute_profile_score(&profile);
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "John Smith has 5 years of experience in Python, Django and AWS.";

    #[test]
    fn test_sample_resume() {
        let profile = extract_profile(SAMPLE);
        assert_eq!(profile.name, "John Smith");
        assert_eq!(profile.experience_years, 5);
        assert!(profile.skills.contains(&"Python".to_string()));
        assert!(profile.skills.contains(&"Aws".to_string()));
        assert_eq!(profile.education, None);
        assert_eq!(profile.email, None);
        assert_eq!(profile.career_intent, "Cloud & DevOps");
    }

    #[test]
    fn test_full_resume() {
        let text = "Priya Sharma\n\
                    priya.sharma@example.com | +91 9876543210\n\
                    B.Tech (CSE). 4 yrs building full-stack apps with React, Node.js and MongoDB.";
        let profile = extract_profile(text);
        assert_eq!(profile.name, "Priya Sharma");
        assert_eq!(profile.email.as_deref(), Some("priya.sharma@example.com"));
        assert_eq!(profile.phone.as_deref(), Some("+91 9876543210"));
        assert_eq!(profile.education.as_deref(), Some("B.Tech"));
        assert_eq!(profile.experience_years, 4);
        assert_eq!(profile.career_intent, "Full-Stack Development");
        assert!(profile.skills.contains(&"Full-Stack Development".to_string()));
        assert!(profile.profile_score <= 100);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let first = extract_profile(SAMPLE);
        let second = extract_profile(SAMPLE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unrecognised_name_falls_back() {
        let profile = extract_profile("resume: 2 years java");
        assert_eq!(profile.name, FALLBACK_NAME);
        assert!(!profile.has_name());
    }

    #[tokio::test]
    async fn test_rule_extractor_rejects_blank_text() {
        let err = RuleBasedExtractor.extract(" \n\t ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
