use std::sync::Arc;

use crate::config::Config;
use crate::feeds::jobs::JobsFeed;
use crate::feeds::skills::SkillsFeed;
use crate::recommend::engine::RecommendPolicy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable upstream feeds. HTTP-backed in production, swapped for
    /// in-process fakes in tests.
    pub skills_feed: Arc<dyn SkillsFeed>,
    pub jobs_feed: Arc<dyn JobsFeed>,
    /// Score floor and result cap applied to every recommendation request.
    pub policy: RecommendPolicy,
}
