use axum::{Json, extract::State, response::IntoResponse};
use chrono::SecondsFormat;
use std::sync::Arc;

use crate::state::AppState;

// Reports whether FavQs is in use
pub async fn debug_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "API is working",
        "timestamp": chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "apiKeyStatus": state.api_key.status()
    }))
}
