//! Interview grading endpoint

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::services::grader::{Assessment, GradeRequest, Grader};
use crate::AppState;

/// POST /api/interview
pub async fn grade<G: Grader>(
    State(state): State<AppState<G>>,
    Json(payload): Json<GradeRequest>,
) -> Result<Json<Assessment>> {
    if payload.question.trim().is_empty()
        || payload.expected_answer.trim().is_empty()
        || payload.user_answer.trim().is_empty()
    {
        return Err(ApiError::BadRequest(
            "Отсутствуют обязательные поля: question, expected_answer, user_answer".to_string(),
        ));
    }

    let assessment = state.grader.grade(payload).await?;
    Ok(Json(assessment))
}
