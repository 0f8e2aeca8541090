//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! The frontend contract fixes the 404 and 422 messages verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found: missing page, empty search, unknown category (404)
    NotFound,

    /// Delete target does not exist (422)
    Unprocessable,

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "message": e.to_string()
                }),
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "success": false,
                    "message": "Resource not found"
                }),
            ),
            Self::Unprocessable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "success": false,
                    "message": "Unprocessable entity"
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl ApiError {
    /// Map a repository error for lookup-style operations: a miss is a 404.
    pub fn from_lookup(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound,
            _ => Self::Database(e),
        }
    }

    /// Map a repository error for delete: a missing target is a 422.
    pub fn from_delete(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::Unprocessable,
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_with_fixed_message() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Resource not found");
    }

    #[tokio::test]
    async fn unprocessable_is_422_with_fixed_message() {
        let response = ApiError::Unprocessable.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Unprocessable entity");
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "question" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_miss_maps_to_422() {
        let db_err = DbError::NotFound {
            resource: "question",
            id: "42".into(),
        };
        let response = ApiError::from_delete(db_err).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn lookup_miss_maps_to_404() {
        let db_err = DbError::NotFound {
            resource: "category",
            id: "42".into(),
        };
        let response = ApiError::from_lookup(db_err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
