//! Category repository
//!
//! Categories are read-only through the API: six fixed rows seeded by the
//! migrations.

use sqlx::{FromRow, PgPool};

use super::DbError;

/// Category record from database
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a single category by id.
    pub async fn get(&self, id: i32) -> Result<Category, DbError> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "category",
                id: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn lists_seeded_categories() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        let categories = CategoryRepo::new(&pool).list().await.expect("list failed");
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].kind, "Science");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_category_is_not_found() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        let err = CategoryRepo::new(&pool).get(999_999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "category", .. }));
    }
}
