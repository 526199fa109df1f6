use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::{LlmSettings, DEFAULT_API_URL, DEFAULT_MODEL};
use crate::matching::scoring::MatchPolicy;

/// Which extractor / matcher pair serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    RuleBased,
    Llm,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" | "rule-based" => Ok(Backend::RuleBased),
            "llm" => Ok(Backend::Llm),
            other => bail!("EXTRACTOR_BACKEND must be 'rules' or 'llm', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed, or if the LLM
/// backend is selected without an API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub backend: Backend,
    /// Present only when `backend` is `Llm`.
    pub llm: Option<LlmSettings>,
    pub match_policy: MatchPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = match lookup("EXTRACTOR_BACKEND") {
            Some(raw) => raw.parse()?,
            None => Backend::RuleBased,
        };

        let llm = match backend {
            Backend::RuleBased => None,
            Backend::Llm => Some(LlmSettings {
                api_url: lookup("LLM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                api_key: lookup("ANTHROPIC_API_KEY").context(
                    "Required environment variable 'ANTHROPIC_API_KEY' is not set",
                )?,
                model: lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                max_tokens: parse_or(&lookup, "LLM_MAX_TOKENS", 2048)?,
                timeout: Duration::from_secs(parse_or(&lookup, "LLM_TIMEOUT_SECS", 30)?),
            }),
        };

        let empty_requirements_skill_pct: f64 =
            parse_or(&lookup, "EMPTY_REQUIREMENTS_SKILL_PCT", 0.0)?;
        if !(0.0..=100.0).contains(&empty_requirements_skill_pct) {
            bail!("EMPTY_REQUIREMENTS_SKILL_PCT must be between 0 and 100");
        }

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            backend,
            llm,
            match_policy: MatchPolicy {
                empty_requirements_skill_pct,
            },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.backend, Backend::RuleBased);
        assert!(config.llm.is_none());
        assert_eq!(config.match_policy, MatchPolicy::default());
    }

    #[test]
    fn test_llm_backend_requires_api_key() {
        let err = config_from(&[("EXTRACTOR_BACKEND", "llm")]).unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_llm_backend_settings() {
        let config = config_from(&[
            ("EXTRACTOR_BACKEND", "LLM"),
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("LLM_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        let llm = config.llm.unwrap();
        assert_eq!(llm.api_key, "sk-test");
        assert_eq!(llm.model, DEFAULT_MODEL);
        assert_eq!(llm.timeout, Duration::from_secs(5));
        assert_eq!(llm.max_tokens, 2048);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(config_from(&[("EXTRACTOR_BACKEND", "magic")]).is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_empty_requirements_pct_bounds() {
        let config = config_from(&[("EMPTY_REQUIREMENTS_SKILL_PCT", "100")]).unwrap();
        assert_eq!(config.match_policy.empty_requirements_skill_pct, 100.0);
        assert!(config_from(&[("EMPTY_REQUIREMENTS_SKILL_PCT", "150")]).is_err());
    }
}
