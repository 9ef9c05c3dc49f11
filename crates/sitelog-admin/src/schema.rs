//! `init-schema` command.

use sitelog_event_store::schema::CREATE_EVENTS_TABLE;
use sqlx::PgPool;

/// Creates the site events table and its indexes. Safe to run repeatedly.
///
/// # Errors
///
/// Returns `sqlx::Error` if any DDL statement fails.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_EVENTS_TABLE).execute(pool).await?;
    tracing::info!("site event schema installed");
    Ok(())
}
