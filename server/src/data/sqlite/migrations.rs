//! Database migration system
//!
//! Fresh databases get the full schema; older ones are upgraded one version
//! at a time. A database written by a newer version is refused.

use sqlx::SqlitePool;

use super::error::SqliteError;
use super::schema::{MIGRATION_V2, SCHEMA, SCHEMA_VERSION};

/// Bring the database schema to the current version
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteError> {
    // Check if this is a fresh database
    let table_exists: bool = sqlx::query_scalar(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        tracing::debug!(
            "Initializing database with schema version {}",
            SCHEMA_VERSION
        );
        return apply_initial_schema(pool).await;
    }

    let current_version: i32 =
        sqlx::query_scalar("SELECT version FROM schema_version WHERE id = 1")
            .fetch_optional(pool)
            .await?
            .unwrap_or(0);

    if current_version > SCHEMA_VERSION {
        return Err(SqliteError::MigrationFailed {
            version: current_version,
            name: "unsupported".to_string(),
            error: format!(
                "Database schema version {} is newer than supported version {}",
                current_version, SCHEMA_VERSION
            ),
        });
    }

    if current_version < 1 {
        // Version row missing; the schema itself is idempotent
        return apply_initial_schema(pool).await;
    }

    for version in (current_version + 1)..=SCHEMA_VERSION {
        tracing::debug!("Applying migration to version {}", version);
        apply_migration(pool, version).await?;
    }

    tracing::debug!("Database schema is up to date (version {})", SCHEMA_VERSION);
    Ok(())
}

async fn apply_initial_schema(pool: &SqlitePool) -> Result<(), SqliteError> {
    let start = std::time::Instant::now();

    let mut tx = pool.begin().await?;

    sqlx::query(SCHEMA).execute(&mut *tx).await?;

    let now = chrono::Utc::now().timestamp_millis();
    sqlx::query(
        "INSERT INTO schema_version (id, version, applied_at, description) VALUES (1, ?, ?, 'Initial schema')
         ON CONFLICT(id) DO UPDATE SET version = excluded.version, applied_at = excluded.applied_at",
    )
    .bind(SCHEMA_VERSION)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(
        "Applied initial schema in {}ms",
        start.elapsed().as_millis()
    );
    Ok(())
}

async fn apply_migration(pool: &SqlitePool, version: i32) -> Result<(), SqliteError> {
    match version {
        2 => add_name_folded(pool).await.map_err(|e| SqliteError::MigrationFailed {
            version,
            name: "add_name_folded".to_string(),
            error: e.to_string(),
        }),
        _ => Err(SqliteError::MigrationFailed {
            version,
            name: "unknown".to_string(),
            error: format!("Unknown migration version: {}", version),
        }),
    }
}

/// Add `name_folded` and fill it for existing rows.
///
/// Folding uses Rust's Unicode lowercase, which SQLite's `LOWER` cannot do.
async fn add_name_folded(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(MIGRATION_V2).execute(&mut *tx).await?;

    let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM products")
        .fetch_all(&mut *tx)
        .await?;
    for (id, name) in &rows {
        sqlx::query("UPDATE products SET name_folded = ? WHERE id = ?")
            .bind(name.to_lowercase())
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query("UPDATE schema_version SET version = 2, applied_at = ? WHERE id = 1")
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::debug!(rows = rows.len(), "Backfilled folded product names");
    Ok(())
}
