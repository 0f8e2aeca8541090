//! Test fixtures
//!
//! Disposable rows for driving test scenarios (delete, search, quiz).
//! Each call commits one row; callers own cleanup, usually by deleting
//! the returned id as part of the scenario under test.

use sqlx::PgPool;

use crate::db::repos::DbError;

/// Insert a throwaway question and return its generated id.
///
/// Fixed placeholder fields: difficulty 1, category 1 (Science, always
/// present after migrations).
pub async fn create_mock_question(pool: &PgPool) -> Result<i32, DbError> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO questions (question, answer, difficulty, category)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind("This is a mock question that should be deleted")
    .bind("this mock answer should be deleted")
    .bind(1_i16)
    .bind(1_i32)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
