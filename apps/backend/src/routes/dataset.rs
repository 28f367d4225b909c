//! Dataset endpoint

use axum::{extract::State, Json};

use prepdeck_core::Dataset;

use crate::services::grader::Grader;
use crate::AppState;

/// GET /data.json
pub async fn serve<G: Grader>(State(state): State<AppState<G>>) -> Json<Dataset> {
    Json((*state.dataset).clone())
}
