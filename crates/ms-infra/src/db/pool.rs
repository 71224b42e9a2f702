use anyhow::Result;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{error, info};

/// Embed all diesel migrations at compile time
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for SQLite connection pool
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Create database connection pool and run migrations
///
/// This function should be called **once at application startup**; the
/// returned pool is the process-wide cache handle and is injected into the
/// repositories.
///
/// Idempotent: opening an existing database only applies pending migrations.
/// Failures are logged and returned, never retried.
pub fn init_db_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let pool = Pool::builder().build(manager).map_err(|e| {
        error!(database_url, error = %e, "Failed to create database pool");
        anyhow::anyhow!("Failed to create database pool: {}", e)
    })?;

    run_migrations(&pool).inspect_err(|e| {
        error!(database_url, error = %e, "Failed to initialize signature store");
    })?;

    info!(database_url, "Signature store initialized");
    Ok(pool)
}

/// Run embedded Diesel migrations
fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;

    info!("Running database migrations...");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    info!("Database migrations completed");

    Ok(())
}
