use std::path::Path;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub type DbPool = SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),
  #[error("migration error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),
}

/// Open (or create) the snapshot store at the given path and run
/// migrations.
pub async fn init_db(path: &Path) -> Result<DbPool, StoreError> {
  let db_url = format!("sqlite://{}?mode=rwc", path.display());
  tracing::info!(path = %path.display(), "initializing snapshot store");

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;
  tracing::debug!("snapshot store ready");

  Ok(pool)
}
