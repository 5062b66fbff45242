mod analysis;
mod config;
mod errors;
mod extraction;
mod gaps;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::engine::{CvAnalyzer, HeuristicAnalyzer};
use crate::config::Config;
use crate::rate_limit::RateLimiter;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every variable has a default)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Enhancer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the analysis backend
    let analyzer: Arc<dyn CvAnalyzer> = Arc::new(HeuristicAnalyzer);
    info!("Analysis backend initialized ({})", analyzer.backend());

    // Initialize the per-client rate limiter
    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limit_requests,
        Duration::from_secs(config.rate_limit_period_secs),
    ));
    info!(
        "Rate limiter initialized ({} requests per {}s)",
        config.rate_limit_requests, config.rate_limit_period_secs
    );

    let cors = build_cors_layer(&config)?;

    // Build app state
    let state = AppState {
        config: config.clone(),
        analyzer,
        rate_limiter,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Builds the CORS layer from configuration: permissive when "*" is listed,
/// otherwise restricted to the configured origins.
fn build_cors_layer(config: &Config) -> Result<CorsLayer> {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
