use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / and GET /health
/// Returns service status, the configured model and the service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "AI Service Running",
        "model": state.config.gemini_model,
        "version": env!("CARGO_PKG_VERSION")
    }))
}
