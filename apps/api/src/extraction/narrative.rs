//! Templated summary and career-intent classification. Pure functions of the
//! already-extracted fields and the raw text; no randomness.

use crate::models::profile::CareerIntent;

/// Keyword triggers per intent, checked in order. First hit wins.
const INTENT_RULES: &[(CareerIntent, &[&str])] = &[
    (CareerIntent::FullStack, &["full-stack", "full stack", "fullstack"]),
    (
        CareerIntent::DataScience,
        &["data scien", "machine learning", "deep learning", "artificial intelligence"],
    ),
    (
        CareerIntent::CloudDevOps,
        &["devops", "cloud", "kubernetes", "aws", "azure", "site reliability"],
    ),
    (
        CareerIntent::Mobile,
        &["android", "ios developer", "flutter", "react native", "mobile app"],
    ),
    (
        CareerIntent::Frontend,
        &["frontend", "front-end", "front end", "react", "angular", "vue"],
    ),
    (
        CareerIntent::Backend,
        &["backend", "back-end", "back end", "django", "spring boot", "node.js", "nodejs"],
    ),
];

/// Number of skills named in the summary.
const SUMMARY_SKILLS: usize = 3;

pub fn classify_career_intent(text: &str) -> CareerIntent {
    let text_lower = text.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| text_lower.contains(t)))
        .map(|(intent, _)| *intent)
        .unwrap_or_default()
}

pub fn experience_tier(years: u32) -> &'static str {
    match years {
        0 => "Entry-level",
        1..=2 => "Junior",
        3..=5 => "Mid-level",
        6..=9 => "Senior",
        _ => "Veteran",
    }
}

pub fn build_summary(
    years: u32,
    skills: &[String],
    education: Option<&str>,
    intent: CareerIntent,
) -> String {
    let tier = experience_tier(years);
    let mut summary = match years {
        0 => format!("{tier} candidate"),
        1 => format!("{tier} professional with 1 year of experience"),
        n => format!("{tier} professional with {n} years of experience"),
    };

    if !skills.is_empty() {
        let top: Vec<&str> = skills
            .iter()
            .take(SUMMARY_SKILLS)
            .map(String::as_str)
            .collect();
        summary.push_str(&format!(" skilled in {}", top.join(", ")));
    }
    summary.push('.');

    if let Some(education) = education {
        summary.push_str(&format!(" Education: {education}."));
    }

    summary.push_str(&format!(" Oriented towards {}.", intent.label()));
    summary
}
