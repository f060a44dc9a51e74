use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Demo UI: two tabs, one form each
        .route("/", get(index))
        // Health check
        .route("/api/health", get(health_check))
        // Form handlers
        .route("/api/reasoning", post(handlers::reasoning))
        .route("/api/translate", post(handlers::translation))
}

async fn index() -> Html<&'static str> {
    Html(include_str!("web/index.html"))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.config.runner_config.model,
    }))
}
