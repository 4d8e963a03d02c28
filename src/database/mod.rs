/// Database modules organized by feature
mod birthday;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

/// Database connection pool wrapper
///
/// Owns every birthday row; all reads and writes go through the
/// `Repository` implementation in this module tree.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection and run migrations
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let db = Self { pool };
        db.run_migrations().await?;

        info!("Database connected and migrations completed");
        Ok(db)
    }

    /// Get a reference to the connection pool (for internal use)
    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run database migrations to create tables
    async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS birthdays (
                chat_id BIGINT NOT NULL,
                user_id BIGINT NOT NULL,
                date DATE NOT NULL,
                adjusted_day_of_year INT NOT NULL,
                username TEXT NOT NULL DEFAULT '',
                first_name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                PRIMARY KEY (chat_id, user_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // The nearest-birthday and notification queries scan by ordinal
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS birthdays_by_ordinal \
             ON birthdays (adjusted_day_of_year)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
