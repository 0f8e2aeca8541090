//! Quiz play endpoint
//!
//! Serves one random question at a time, skipping ids the client has
//! already seen. Category id 0 (or no category) means all categories.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::repos::QuestionRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

use super::questions::QuestionResponse;

/// Quiz request: previously served ids plus an optional category filter
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i32,
}

/// POST /quizzes - next random question for a quiz round
///
/// `question` is null once every question in the pool has been served;
/// the frontend treats that as end of game.
async fn play_quiz(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuizRequest>,
) -> Result<Json<Value>, ApiError> {
    let category = req
        .quiz_category
        .map(|c| c.id)
        .filter(|&id| id != 0);

    let picked = QuestionRepo::new(&state.pool)
        .random_for_quiz(category, &req.previous_questions)
        .await
        .map_err(ApiError::from_lookup)?
        .map(QuestionResponse::from);

    Ok(Json(json!({
        "success": true,
        "question": picked,
    })))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play_quiz))
}
