use serde::{Deserialize, Deserializer, Serialize};

/// A job posting supplied by the caller of the match endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, deserialize_with = "deserialize_job_id")]
    pub job_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub exp_required: u32,
}

/// Fit of one candidate against one job posting.
///
/// Label fields are plain strings so that results produced by the LLM matcher
/// can be passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(default, deserialize_with = "deserialize_job_id")]
    pub job_id: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    pub match_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_match: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_match: Option<f64>,
    #[serde(default)]
    pub confidence: String,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub gaps: Vec<String>,
    #[serde(default)]
    pub ai_reasoning: String,
    #[serde(default)]
    pub growth_potential: String,
    #[serde(default)]
    pub recommendation: String,
}

/// Candidate as submitted to the match endpoint: usually a full
/// `CandidateProfile`, but only `skills` and `experience_years` are required
/// for scoring. Other fields are kept for the model-backed matcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

/// Job ids arrive as strings or integers depending on the caller.
fn deserialize_job_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_id_accepts_integer() {
        let job: JobPosting = serde_json::from_value(json!({
            "job_id": 42,
            "title": "Backend Engineer",
            "company": "Acme",
            "required_skills": ["Python"],
            "exp_required": 3
        }))
        .unwrap();
        assert_eq!(job.job_id, "42");
        assert_eq!(job.exp_required, 3);
    }

    #[test]
    fn test_job_defaults_missing_fields() {
        let job: JobPosting = serde_json::from_value(json!({"job_id": "J-1"})).unwrap();
        assert_eq!(job.job_id, "J-1");
        assert!(job.required_skills.is_empty());
        assert_eq!(job.exp_required, 0);
    }

    #[test]
    fn test_match_candidate_keeps_profile_extras() {
        let candidate: MatchCandidate = serde_json::from_value(json!({
            "name": "Asha",
            "skills": ["Python", "Aws"],
            "experience_years": 4,
            "profile_score": 70
        }))
        .unwrap();
        assert_eq!(candidate.skills.len(), 2);
        assert_eq!(candidate.experience_years, 4);
        assert_eq!(candidate.profile["name"], "Asha");

        let round_trip = serde_json::to_value(&candidate).unwrap();
        assert_eq!(round_trip["profile_score"], 70);
    }

    #[test]
    fn test_match_result_omits_absent_components() {
        let result: MatchResult = serde_json::from_value(json!({
            "job_id": "J-1",
            "match_score": 72.5,
            "recommendation": "Good Match"
        }))
        .unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("skill_match").is_none());
        assert_eq!(value["match_score"], 72.5);
    }
}
