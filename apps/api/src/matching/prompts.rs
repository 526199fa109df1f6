// Matching LLM prompt templates.

pub const MATCH_PROMPT_TEMPLATE: &str = r#"Score how well the candidate fits each job posting.

CANDIDATE:
{candidate_json}

JOBS:
{jobs_json}

OUTPUT SCHEMA (return a JSON array with one object per job):
[
  {
    "job_id": "string",
    "job_title": "string",
    "company": "string",
    "match_score": number (0-100, one decimal),
    "confidence": "High" | "Medium" | "Low",
    "matched_skills": ["string"],
    "gaps": ["string"],
    "ai_reasoning": "string",
    "growth_potential": "Immediate Impact" | "High Growth" | "Long-term Growth",
    "recommendation": "Strong Match" | "Good Match" | "Stretch Role"
  }
]

RULES:
1. Weigh skill overlap at 60% and experience sufficiency at 40%.
2. gaps lists required skills the candidate does not have.
3. Sort the array by match_score, highest first.
4. Return ONLY the JSON array — nothing else, no code fences."#;
