use serde::{Deserialize, Serialize};

/// Name reported when no leading name can be recognised.
pub const FALLBACK_NAME: &str = "Candidate";

/// Maximum number of skills carried on a profile.
pub const MAX_SKILLS: usize = 10;

/// Structured candidate data extracted from a free-text resume.
/// Built and discarded within a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: Option<String>,
    pub summary: String,
    pub career_intent: String,
    /// Completeness metric, 0 – 100. Derived from the other fields.
    pub profile_score: u32,
}

impl CandidateProfile {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty() && self.name != FALLBACK_NAME
    }
}

/// Recognised education levels, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Education {
    Mba,
    BTech,
    MTech,
    Degree,
}

impl Education {
    pub fn label(self) -> &'static str {
        match self {
            Education::Mba => "MBA",
            Education::BTech => "B.Tech",
            Education::MTech => "M.Tech",
            Education::Degree => "Bachelor's Degree",
        }
    }
}

/// Career direction inferred from resume keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CareerIntent {
    FullStack,
    DataScience,
    CloudDevOps,
    Frontend,
    Backend,
    Mobile,
    #[default]
    SoftwareEngineering,
}

impl CareerIntent {
    pub fn label(self) -> &'static str {
        match self {
            CareerIntent::FullStack => "Full-Stack Development",
            CareerIntent::DataScience => "Data Science & AI",
            CareerIntent::CloudDevOps => "Cloud & DevOps",
            CareerIntent::Frontend => "Frontend Development",
            CareerIntent::Backend => "Backend Development",
            CareerIntent::Mobile => "Mobile Development",
            CareerIntent::SoftwareEngineering => "Software Engineering",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> CandidateProfile {
        CandidateProfile {
            name: name.to_string(),
            email: None,
            phone: None,
            skills: vec![],
            experience_years: 0,
            education: None,
            summary: String::new(),
            career_intent: CareerIntent::default().label().to_string(),
            profile_score: 0,
        }
    }

    #[test]
    fn test_fallback_name_is_not_a_name() {
        assert!(!profile(FALLBACK_NAME).has_name());
        assert!(!profile("  ").has_name());
        assert!(profile("Priya Sharma").has_name());
    }

    #[test]
    fn test_profile_serializes_absent_fields_as_null() {
        let value = serde_json::to_value(profile("Asha")).unwrap();
        assert!(value["email"].is_null());
        assert!(value["education"].is_null());
        assert_eq!(value["career_intent"], "Software Engineering");
    }
}
