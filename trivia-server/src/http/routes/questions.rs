//! Question endpoints: paginated listing, create, delete, search

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::db::repos::{CategoryRepo, Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{
    page_slice, AnswerText, Difficulty, PageParams, Pagination, QuestionDraft, QuestionText,
};

use super::categories::category_map;

/// Question as rendered in API responses
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i16,
    pub category: i32,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

/// Create question request
#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    pub difficulty: i16,
    pub category: i32,
}

/// Search request
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// GET /questions - one page of the full question set
///
/// Fetches the full ordered set, formats it, and slices the requested
/// page in memory; total_questions is the full count. An empty page is a
/// 404 by contract.
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Value>, ApiError> {
    let page = Pagination::from(params);

    let all: Vec<QuestionResponse> = QuestionRepo::new(&state.pool)
        .list_all()
        .await
        .map_err(ApiError::from_lookup)?
        .into_iter()
        .map(QuestionResponse::from)
        .collect();
    let total = all.len();

    let current = page_slice(&all, page);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = CategoryRepo::new(&state.pool)
        .list()
        .await
        .map_err(ApiError::from_lookup)?;

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": total,
        "categories": category_map(categories),
    })))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let draft = QuestionDraft {
        question: QuestionText::new(&req.question)?,
        answer: AnswerText::new(&req.answer)?,
        difficulty: Difficulty::new(req.difficulty)?,
        category: req.category,
    };

    let question = QuestionRepo::new(&state.pool)
        .create(draft)
        .await
        .map_err(ApiError::from_lookup)?;
    tracing::debug!(id = question.id, "question created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Question successfully created!",
        })),
    ))
}

/// DELETE /questions/{id} - hard-delete a question
///
/// A missing id is a 422 by contract, not a 404.
async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    QuestionRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(ApiError::from_delete)?;
    tracing::debug!(id, "question deleted");

    Ok(Json(json!({
        "success": true,
        "message": "Question successfully deleted",
    })))
}

/// POST /questions/search - case-insensitive substring search
///
/// Zero matches is a 404 "Resource not found" by policy, not an empty 200.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<Value>, ApiError> {
    let matches: Vec<QuestionResponse> = QuestionRepo::new(&state.pool)
        .search(&req.search_term)
        .await
        .map_err(ApiError::from_lookup)?
        .into_iter()
        .map(QuestionResponse::from)
        .collect();

    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }
    let total = matches.len();

    Ok(Json(json!({
        "success": true,
        "questions": matches,
        "total_questions": total,
    })))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", axum::routing::delete(delete_question))
        .route("/questions/search", post(search_questions))
}
