//! Database migrations and seed data
//!
//! Idempotent: CREATE TABLE IF NOT EXISTS plus ON CONFLICT DO NOTHING for
//! the category seed, so running against an existing schema is safe.

use sqlx::PgPool;

/// The six canonical categories every fresh schema starts with.
const SEED_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Run all migrations and seed the fixed categories.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            difficulty SMALLINT NOT NULL CHECK (difficulty BETWEEN 1 AND 5),
            category INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    seed_categories(pool).await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}

/// Insert the fixed categories with explicit ids, skipping existing rows.
async fn seed_categories(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (id, name) in SEED_CATEGORIES {
        sqlx::query(
            r#"
            INSERT INTO categories (id, type) VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(name)
        .execute(&mut *tx)
        .await?;
    }

    // Keep the sequence ahead of the explicit seed ids so later inserts
    // don't collide.
    sqlx::query(
        "SELECT setval('categories_id_seq', GREATEST((SELECT MAX(id) FROM categories), 1))",
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
