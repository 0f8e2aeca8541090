//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::db::repos::{Category, CategoryRepo, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

use super::questions::QuestionResponse;

/// Shape categories the way the frontend expects: an object keyed by id.
///
/// BTreeMap keeps the keys ordered by id; serde_json renders integer keys
/// as strings.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// GET /categories - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let categories = CategoryRepo::new(&state.pool)
        .list()
        .await
        .map_err(ApiError::from_lookup)?;

    Ok(Json(json!({
        "success": true,
        "categories": category_map(categories),
    })))
}

/// GET /categories/{id}/questions - all questions in one category
async fn questions_for_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let category = CategoryRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(ApiError::from_lookup)?;

    let questions: Vec<QuestionResponse> = QuestionRepo::new(&state.pool)
        .list_for_category(id)
        .await
        .map_err(ApiError::from_lookup)?
        .into_iter()
        .map(QuestionResponse::from)
        .collect();
    let total = questions.len();

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total,
        "current_category": category.kind,
    })))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
}
