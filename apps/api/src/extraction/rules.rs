//! Regex and keyword rules that pull individual fields out of resume text.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::extraction::vocabulary::{title_case, INFERENCE_RULES, SKILL_VOCABULARY};
use crate::models::profile::{Education, MAX_SKILLS};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.[a-zA-Z]{2,}").expect("valid email regex"));

/// Indian mobile: optional `+`, `91`, optional separator, then 6–9 and nine digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?91[\s-]?[6-9]\d{9}").expect("valid phone regex"));

static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*\+?\s*(?:years?|yrs?)").expect("valid experience regex")
});

/// Detection priority order for education levels.
static EDUCATION_RULES: Lazy<Vec<(Regex, Education)>> = Lazy::new(|| {
    [
        (r"(?i)\bmba\b", Education::Mba),
        (r"(?i)\bb\.?\s?tech\b", Education::BTech),
        (r"(?i)\bm\.?\s?tech\b", Education::MTech),
        (r"(?i)\bdegrees?\b", Education::Degree),
    ]
    .into_iter()
    .map(|(pattern, level)| (Regex::new(pattern).expect("valid education regex"), level))
    .collect()
});

/// Longest leading run of capitalised words accepted as a name.
const MAX_NAME_WORDS: usize = 4;

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Leading run of capitalised words on the first non-blank line.
pub fn extract_name(text: &str) -> Option<String> {
    let first_line = text.trim_start().lines().next()?;
    let mut words = Vec::new();

    for token in first_line.split_whitespace().take(MAX_NAME_WORDS) {
        let word = token.trim_end_matches([',', '.', ';', ':', '|']);
        let ends_run = word.len() != token.len();

        let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
        let is_wordlike = word
            .chars()
            .all(|c| c.is_alphabetic() || c == '-' || c == '\'');
        if !starts_upper || !is_wordlike {
            break;
        }

        words.push(word);
        if ends_run {
            break;
        }
    }

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Vocabulary hits in category order, then inferred skills; deduplicated
/// case-insensitively and capped at `MAX_SKILLS`.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut skills: Vec<String> = Vec::new();

    let mut push = |skill: String| {
        if !skills.iter().any(|s| s.eq_ignore_ascii_case(&skill)) {
            skills.push(skill);
        }
    };

    for category in SKILL_VOCABULARY {
        for keyword in category.keywords {
            if text_lower.contains(keyword) {
                trace!(category = category.name, keyword = *keyword, "Skill keyword matched");
                push(title_case(keyword));
            }
        }
    }

    for rule in INFERENCE_RULES {
        if rule.triggers.iter().any(|t| text_lower.contains(t)) {
            push(rule.skill.to_string());
        }
    }

    skills.truncate(MAX_SKILLS);
    skills
}

/// First integer followed by "year(s)" / "yr(s)". Zero when absent.
pub fn extract_experience_years(text: &str) -> u32 {
    EXPERIENCE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

pub fn detect_education(text: &str) -> Option<Education> {
    EDUCATION_RULES
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, level)| *level)
}
