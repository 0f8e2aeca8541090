//! Question repository
//!
//! Every operation is a single atomic statement. Ordering is by id so
//! pagination over the formatted set is stable.

use sqlx::{FromRow, PgPool};

use crate::models::QuestionDraft;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Question record from database
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i16,
    pub category: i32,
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated question, returning the stored record.
    pub async fn create(&self, draft: QuestionDraft) -> Result<Question, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, difficulty, category
            "#,
        )
        .bind(draft.question.as_str())
        .bind(draft.answer.as_str())
        .bind(draft.difficulty.value())
        .bind(draft.category)
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }

    /// Hard-delete a question by id.
    ///
    /// Surfaces NotFound when no row was removed; the delete endpoint
    /// turns that into a 422.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Fetch the full ordered question set.
    ///
    /// The listing endpoint slices one page out of this in memory and
    /// reports the full count as total_questions.
    pub async fn list_all(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category FROM questions ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Fetch all questions belonging to one category, ordered by id.
    pub async fn list_for_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring search on question text.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let pattern = format!("%{}%", escape_like(term));
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Pick one random question not in `exclude`, optionally limited to a
    /// category. Returns None once the pool is exhausted.
    pub async fn random_for_quiz(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE id <> ALL($1)
              AND ($2::int IS NULL OR category = $2)
            ORDER BY random()
            LIMIT 1
            "#,
        )
        .bind(exclude)
        .bind(category)
        .fetch_optional(self.pool)
        .await?;

        Ok(question)
    }
}

/// Escape LIKE metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
