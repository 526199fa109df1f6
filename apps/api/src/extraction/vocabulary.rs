//! Skill vocabulary — keyword variants grouped by category, plus the contextual
//! inference rules that add skills implied rather than named.

/// A named family of skill keywords. Keywords are lower-case and matched as
/// plain substrings of the lower-cased resume text.
pub struct SkillCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Category order is discovery order: earlier categories win when the
/// skill list is capped.
pub const SKILL_VOCABULARY: &[SkillCategory] = &[
    SkillCategory {
        name: "python",
        keywords: &["python", "django", "flask", "fastapi", "pandas", "numpy"],
    },
    SkillCategory {
        name: "javascript",
        keywords: &[
            "javascript",
            "typescript",
            "react",
            "angular",
            "vue",
            "node.js",
            "nodejs",
            "express",
        ],
    },
    SkillCategory {
        name: "java",
        keywords: &["java", "spring boot", "hibernate"],
    },
    SkillCategory {
        name: "cloud",
        keywords: &["aws", "azure", "gcp", "docker", "kubernetes", "terraform"],
    },
    SkillCategory {
        name: "database",
        keywords: &["sql", "mysql", "postgresql", "mongodb", "redis"],
    },
    SkillCategory {
        name: "data",
        keywords: &[
            "machine learning",
            "deep learning",
            "data science",
            "tensorflow",
            "pytorch",
            "power bi",
            "tableau",
        ],
    },
    SkillCategory {
        name: "web",
        keywords: &["html", "css", "tailwind", "bootstrap"],
    },
    SkillCategory {
        name: "tools",
        keywords: &["git", "linux", "jira", "excel"],
    },
];

/// A skill added when any of its trigger phrases appears in the text.
pub struct InferenceRule {
    pub triggers: &'static [&'static str],
    pub skill: &'static str,
}

pub const INFERENCE_RULES: &[InferenceRule] = &[
    InferenceRule {
        triggers: &["microservices", "micro-services"],
        skill: "Microservices Architecture",
    },
    InferenceRule {
        triggers: &["rest api", "restful"],
        skill: "REST API Design",
    },
    InferenceRule {
        triggers: &["ci/cd", "jenkins", "github actions"],
        skill: "CI/CD",
    },
    InferenceRule {
        triggers: &["agile", "scrum"],
        skill: "Agile Methodologies",
    },
    InferenceRule {
        triggers: &["full-stack", "full stack"],
        skill: "Full-Stack Development",
    },
];

/// Upper-cases the first letter of every whitespace-separated word and
/// lower-cases the rest: `"machine learning"` → `"Machine Learning"`.
pub fn title_case(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// True if `skill` is one of the fixed inferred additions.
#[cfg(test)]
pub fn is_inferred_skill(skill: &str) -> bool {
    INFERENCE_RULES.iter().any(|rule| rule.skill == skill)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("aws"), "Aws");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("node.js"), "Node.js");
    }

    #[test]
    fn test_vocabulary_keywords_are_lowercase() {
        for category in SKILL_VOCABULARY {
            for kw in category.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "{} in {}", kw, category.name);
            }
        }
    }

    #[test]
    fn test_inferred_skill_lookup() {
        assert!(is_inferred_skill("Microservices Architecture"));
        assert!(!is_inferred_skill("Python"));
    }
}
