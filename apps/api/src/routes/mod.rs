pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_optimize;
use crate::extraction::handlers::handle_extract;
use crate::gaps::handlers::handle_skill_gaps;
use crate::state::AppState;

/// Headroom on top of the upload size limit for multipart boundaries and
/// field headers.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_file_size + MULTIPART_OVERHEAD);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/extract", post(handle_extract))
        .route("/optimize", post(handle_optimize))
        .route("/skill-gaps", post(handle_skill_gaps))
        .layer(body_limit)
        .with_state(state)
}
