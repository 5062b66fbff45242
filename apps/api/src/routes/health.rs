use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::analysis::engine::CvAnalyzer;
use crate::state::AppState;

/// GET /
/// Service identity: name, version, and the active analysis backend.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "CV Enhancer API",
        "version": env!("CARGO_PKG_VERSION"),
        "engine": state.analyzer.backend(),
        "status": "operational"
    }))
}

/// GET /health
/// Returns a simple status object with a timestamp.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "engine": state.analyzer.backend(),
        "timestamp": Utc::now().to_rfc3339()
    }))
}
