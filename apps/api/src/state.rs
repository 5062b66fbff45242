use std::sync::Arc;

use crate::analysis::engine::CvAnalyzer;
use crate::config::Config;
use crate::rate_limit::RateLimiter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analysis backend. Default: HeuristicAnalyzer.
    pub analyzer: Arc<dyn CvAnalyzer>,
    pub rate_limiter: Arc<RateLimiter>,
}
