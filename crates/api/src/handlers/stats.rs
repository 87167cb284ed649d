use axum::{extract::State, Json};
use flipdns_application::services::QueryMetricsSnapshot;

use crate::state::AppState;

pub async fn get_stats(State(state): State<AppState>) -> Json<QueryMetricsSnapshot> {
    Json(state.metrics.snapshot())
}
