//! Keyword job matcher — skill overlap (60%) plus experience sufficiency (40%).
//!
//! Algorithm, per job:
//! 1. Lower-case candidate and required skills into sets.
//! 2. matched = intersection, gaps = required − candidate.
//! 3. skill % = 100 × |matched| / |required| (policy value when nothing is required).
//! 4. experience = 100 if enough, 80 if one year short, else proportional.
//! 5. overall = 0.6 × skill + 0.4 × experience, one decimal.
//! 6. Tier: ≥80 Strong Match, ≥60 Good Match, else Stretch Role.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::{validate_jobs, JobMatcher};
use crate::models::job::{JobPosting, MatchCandidate, MatchResult};

const SKILL_WEIGHT: f64 = 0.6;
const EXPERIENCE_WEIGHT: f64 = 0.4;
const NEAR_MISS_EXPERIENCE_SCORE: f64 = 80.0;
/// Matched / missing skills named in the reasoning text.
const REASONING_SKILLS: usize = 2;

/// Knobs that differ between deployments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    /// Skill match percentage for a job that lists no required skills.
    pub empty_requirements_skill_pct: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            empty_requirements_skill_pct: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Strong,
    Good,
    Stretch,
}

impl MatchTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            MatchTier::Strong
        } else if score >= 60.0 {
            MatchTier::Good
        } else {
            MatchTier::Stretch
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            MatchTier::Strong => "Strong Match",
            MatchTier::Good => "Good Match",
            MatchTier::Stretch => "Stretch Role",
        }
    }

    pub fn confidence(self) -> &'static str {
        match self {
            MatchTier::Strong => "High",
            MatchTier::Good => "Medium",
            MatchTier::Stretch => "Low",
        }
    }

    pub fn growth_potential(self) -> &'static str {
        match self {
            MatchTier::Strong => "Immediate Impact",
            MatchTier::Good => "High Growth",
            MatchTier::Stretch => "Long-term Growth",
        }
    }
}

/// Skill comparison for one job. Skill names keep the job's spelling and order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillOverlap {
    pub matched: Vec<String>,
    pub gaps: Vec<String>,
    pub percentage: f64,
}

pub fn skill_overlap(
    candidate_skills: &[String],
    required_skills: &[String],
    policy: &MatchPolicy,
) -> SkillOverlap {
    let candidate: HashSet<String> = candidate_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    let mut gaps = Vec::new();

    for skill in required_skills {
        let key = skill.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if candidate.contains(&key) {
            matched.push(skill.trim().to_string());
        } else {
            gaps.push(skill.trim().to_string());
        }
    }

    let percentage = if seen.is_empty() {
        policy.empty_requirements_skill_pct
    } else {
        100.0 * matched.len() as f64 / seen.len() as f64
    };

    SkillOverlap {
        matched,
        gaps,
        percentage,
    }
}

pub fn experience_score(candidate_years: u32, required_years: u32) -> f64 {
    if candidate_years >= required_years {
        100.0
    } else if candidate_years + 1 >= required_years {
        NEAR_MISS_EXPERIENCE_SCORE
    } else {
        // required_years > candidate_years + 1 > 0 here
        (100.0 * candidate_years as f64 / required_years as f64).max(0.0)
    }
}

pub fn overall_score(skill_pct: f64, experience_pct: f64) -> f64 {
    round1(SKILL_WEIGHT * skill_pct + EXPERIENCE_WEIGHT * experience_pct)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn describe(skills: &[String]) -> Option<String> {
    if skills.is_empty() {
        None
    } else {
        Some(
            skills
                .iter()
                .take(REASONING_SKILLS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

pub fn build_reasoning(tier: MatchTier, score: f64, matched: &[String], gaps: &[String]) -> String {
    let strengths = describe(matched);
    let missing = describe(gaps);

    let mut reasoning = match (tier, strengths) {
        (MatchTier::Strong, Some(s)) => format!("Excellent fit ({score}%) with strong overlap in {s}."),
        (MatchTier::Strong, None) => format!("Excellent fit ({score}%) on experience."),
        (MatchTier::Good, Some(s)) => format!("Solid fit ({score}%) backed by {s}."),
        (MatchTier::Good, None) => format!("Solid fit ({score}%) driven by experience."),
        (MatchTier::Stretch, Some(s)) => {
            format!("Stretch opportunity ({score}%); {s} give a starting point.")
        }
        (MatchTier::Stretch, None) => {
            format!("Stretch opportunity ({score}%) with little direct skill overlap.")
        }
    };

    if let Some(m) = missing {
        let advice = match tier {
            MatchTier::Strong => format!(" Minor gaps: {m}."),
            MatchTier::Good => format!(" Upskilling in {m} would strengthen the application."),
            MatchTier::Stretch => format!(" Key gaps to close: {m}."),
        };
        reasoning.push_str(&advice);
    }

    reasoning
}

pub fn score_job(candidate: &MatchCandidate, job: &JobPosting, policy: &MatchPolicy) -> MatchResult {
    let overlap = skill_overlap(&candidate.skills, &job.required_skills, policy);
    let experience = experience_score(candidate.experience_years, job.exp_required);
    let match_score = overall_score(overlap.percentage, experience);
    let tier = MatchTier::from_score(match_score);

    MatchResult {
        job_id: job.job_id.clone(),
        job_title: job.title.clone(),
        company: job.company.clone(),
        match_score,
        skill_match: Some(round1(overlap.percentage)),
        experience_match: Some(round1(experience)),
        confidence: tier.confidence().to_string(),
        ai_reasoning: build_reasoning(tier, match_score, &overlap.matched, &overlap.gaps),
        matched_skills: overlap.matched,
        gaps: overlap.gaps,
        growth_potential: tier.growth_potential().to_string(),
        recommendation: tier.recommendation().to_string(),
    }
}

/// Scores every job and orders by descending score. The sort is stable, so
/// equal scores keep input order.
pub fn rank_jobs(
    candidate: &MatchCandidate,
    jobs: &[JobPosting],
    policy: &MatchPolicy,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = jobs
        .iter()
        .map(|job| score_job(candidate, job, policy))
        .collect();
    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    results
}

/// Single-job request body: skills and experience given inline.
#[derive(Debug, Clone, Deserialize)]
pub struct SingleMatchRequest {
    pub candidate_skills: Vec<String>,
    pub job_skills: Vec<String>,
    #[serde(default)]
    pub candidate_experience: u32,
    #[serde(default)]
    pub required_experience: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleMatchResult {
    pub overall_score: f64,
    pub skill_match: f64,
    pub matched_skills: Vec<String>,
    pub recommendation: String,
}

pub fn score_single(request: &SingleMatchRequest, policy: &MatchPolicy) -> SingleMatchResult {
    let overlap = skill_overlap(&request.candidate_skills, &request.job_skills, policy);
    let experience = experience_score(request.candidate_experience, request.required_experience);
    let overall = overall_score(overlap.percentage, experience);

    SingleMatchResult {
        overall_score: overall,
        skill_match: round1(overlap.percentage),
        matched_skills: overlap.matched,
        recommendation: MatchTier::from_score(overall).recommendation().to_string(),
    }
}

/// Pure-Rust matcher. Fast, deterministic, no model call.
pub struct KeywordJobMatcher {
    pub policy: MatchPolicy,
}

#[async_trait]
impl JobMatcher for KeywordJobMatcher {
    fn backend(&self) -> &'static str {
        "keyword"
    }

    fn capabilities(&self) -> &'static [&'static str] {
        &["job-matching:keyword"]
    }

    async fn rank(
        &self,
        candidate: &MatchCandidate,
        jobs: &[JobPosting],
    ) -> Result<Vec<MatchResult>, AppError> {
        validate_jobs(jobs)?;
        Ok(rank_jobs(candidate, jobs, &self.policy))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
