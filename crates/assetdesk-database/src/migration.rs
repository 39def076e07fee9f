//! Embedded schema migrations.

use sqlx::PgPool;
use tracing::info;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;

/// Apply any schema migrations not yet recorded in the target database.
///
/// Migration files are compiled into the binary from `migrations/`, so
/// a deployed server carries its own schema history.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    let migrator = sqlx::migrate!("../../migrations");
    info!(known = migrator.migrations.len(), "Applying schema migrations");

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
    })?;

    info!("Database schema is up to date");
    Ok(())
}
