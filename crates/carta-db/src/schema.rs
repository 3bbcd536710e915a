//! Schema definitions and migration runner for SurrealDB.
//!
//! Both tables use SCHEMAFULL mode for data integrity. External ids are
//! strings with UNIQUE indexes; `created_at` and `updated_at` default
//! to `time::now()` so creation stamps both timestamps.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
    #[allow(dead_code)]
    name: String,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1 — initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Menus
-- =======================================================================
DEFINE TABLE menu SCHEMAFULL;
DEFINE FIELD menu_id ON TABLE menu TYPE string;
DEFINE FIELD name ON TABLE menu TYPE string;
DEFINE FIELD category ON TABLE menu TYPE string;
DEFINE FIELD start_date ON TABLE menu TYPE option<datetime>;
DEFINE FIELD end_date ON TABLE menu TYPE option<datetime>;
DEFINE FIELD created_at ON TABLE menu TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE menu TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_menu_menu_id ON TABLE menu COLUMNS menu_id UNIQUE;

-- =======================================================================
-- Food items
-- =======================================================================
DEFINE TABLE food SCHEMAFULL;
DEFINE FIELD food_id ON TABLE food TYPE string;
DEFINE FIELD name ON TABLE food TYPE string;
DEFINE FIELD price ON TABLE food TYPE float;
DEFINE FIELD food_image ON TABLE food TYPE string;
DEFINE FIELD menu_id ON TABLE food TYPE string;
DEFINE FIELD created_at ON TABLE food TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE food TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_food_food_id ON TABLE food COLUMNS food_id UNIQUE;
DEFINE INDEX idx_food_menu_id ON TABLE food COLUMNS menu_id;
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
/// All DEFINE statements are idempotent so re-running is safe.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    // Ensure migration tracking table exists (idempotent).
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    // Determine current schema version.
    let mut result = db
        .query("SELECT * FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version > current_version {
            info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            db.query(migration.sql).await?.check().map_err(|e| {
                DbError::Migration(format!(
                    "Migration v{} '{}' failed: {}",
                    migration.version, migration.name, e,
                ))
            })?;

            // Record the applied migration.
            db.query(
                "CREATE _migration SET version = $version, \
                 name = $name",
            )
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "Failed to record migration v{}: {}",
                    migration.version, e,
                ))
            })?;

            info!(
                version = migration.version,
                "Migration applied successfully"
            );
        }
    }

    Ok(())
}

/// Returns the raw schema DDL for version 1.
///
/// Exposed for testing with in-memory SurrealDB instances that
/// bypass the migration runner.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}
