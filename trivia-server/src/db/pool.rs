//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Handlers borrow a
//! connection per statement and the pool reclaims it on every exit path,
//! including error paths.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low; the API serves one small frontend.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost:5432/trivia").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");

        // Resolve every seeded category concurrently; more tasks than
        // connections, so the pool must hand connections back correctly.
        let handles: Vec<_> = (1..=6_i32)
            .map(|id| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let (kind,): (String,) =
                        sqlx::query_as("SELECT type FROM categories WHERE id = $1")
                            .bind(id)
                            .fetch_one(&pool)
                            .await
                            .expect("concurrent query failed");
                    (id, kind)
                })
            })
            .collect();

        for handle in handles {
            let (id, kind) = handle.await.expect("task panicked");
            assert!(!kind.is_empty());
            if id == 1 {
                assert_eq!(kind, "Science");
            }
        }
    }
}
