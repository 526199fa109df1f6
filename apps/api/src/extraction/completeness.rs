//! Profile completeness score — a 0–100 sum of fixed per-field bonuses.
//! Measures how much was found, not how good the candidate is.

use crate::models::profile::CandidateProfile;

const NAME_BONUS: u32 = 10;
const EMAIL_BONUS: u32 = 15;
const PHONE_BONUS: u32 = 15;
const PER_SKILL_BONUS: u32 = 3;
const MAX_SKILLS_BONUS: u32 = 30;
const PER_YEAR_BONUS: u32 = 4;
const MAX_EXPERIENCE_BONUS: u32 = 20;
const EDUCATION_BONUS: u32 = 10;

pub fn compute_profile_score(profile: &CandidateProfile) -> u32 {
    let mut score = 0u32;

    if profile.has_name() {
        score += NAME_BONUS;
    }
    if profile.email.is_some() {
        score += EMAIL_BONUS;
    }
    if profile.phone.is_some() {
        score += PHONE_BONUS;
    }

    let skill_count = u32::try_from(profile.skills.len()).unwrap_or(u32::MAX);
    score += skill_count
        .saturating_mul(PER_SKILL_BONUS)
        .min(MAX_SKILLS_BONUS);
    score += profile
        .experience_years
        .saturating_mul(PER_YEAR_BONUS)
        .min(MAX_EXPERIENCE_BONUS);

    if profile.education.is_some() {
        score += EDUCATION_BONUS;
    }

    score.clamp(0, 100)
}
