use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ResumeExtractor;
use crate::matching::scoring::MatchPolicy;
use crate::matching::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable extractor. Default: RuleBasedExtractor. Swap via EXTRACTOR_BACKEND.
    pub extractor: Arc<dyn ResumeExtractor>,
    /// Pluggable matcher, chosen together with the extractor.
    pub matcher: Arc<dyn JobMatcher>,
    /// Policy for the inline single-job match form, which is always scored locally.
    pub match_policy: MatchPolicy,
}

impl AppState {
    pub fn new(
        config: &Config,
        extractor: Arc<dyn ResumeExtractor>,
        matcher: Arc<dyn JobMatcher>,
    ) -> Self {
        Self {
            extractor,
            matcher,
            match_policy: config.match_policy,
        }
    }
}
