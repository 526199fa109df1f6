use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Served locally whichever backend is active.
const SINGLE_JOB_CAPABILITY: &str = "job-matching:single-job";

/// GET /health
/// Static descriptor of the active backends and what they can do.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let capabilities: Vec<&str> = state
        .extractor
        .capabilities()
        .iter()
        .chain(state.matcher.capabilities())
        .copied()
        .chain(std::iter::once(SINGLE_JOB_CAPABILITY))
        .collect();

    Json(json!({
        "status": "Floowbox AI is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "extractor": state.extractor.backend(),
        "matcher": state.matcher.backend(),
        "capabilities": capabilities
    }))
}
