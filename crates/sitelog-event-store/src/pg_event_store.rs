//! `PostgreSQL` implementation of the `EventStore` trait.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use sitelog_core::codec::{decode_event, encode_payload};
use sitelog_core::error::StoreError;
use sitelog_core::event::SiteEvent;
use sitelog_core::ident;
use sitelog_core::repository::EventStore;

const SELECT_RANGE: &str = r"
SELECT version, user_id, occurred_at, payload
FROM site_events
WHERE site_id = $1
  AND ($2::BIGINT IS NULL OR version >= $2)
  AND ($3::BIGINT IS NULL OR version <= $3)
ORDER BY version ASC
";

const INSERT_EVENT: &str = r"
INSERT INTO site_events (site_id, version, user_id, occurred_at, payload)
VALUES ($1, $2, $3, $4, $5)
ON CONFLICT (site_id, version) DO NOTHING
";

/// SQLSTATE raised when `PostgreSQL` breaks a lock cycle between transactions.
const DEADLOCK_DETECTED: &str = "40P01";

/// `TIMESTAMPTZ` keeps microseconds.
const STORED_SUBSEC_DIGITS: u16 = 6;

/// PostgreSQL-backed site event store.
#[derive(Debug, Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    /// Creates a new `PgEventStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[allow(clippy::needless_pass_by_value)]
fn infrastructure(err: sqlx::Error) -> StoreError {
    StoreError::Infrastructure(err.to_string())
}

fn decode_row(row: &PgRow) -> Result<SiteEvent, StoreError> {
    let version: i64 = row.try_get("version").map_err(infrastructure)?;
    let user_id: Option<Vec<u8>> = row.try_get("user_id").map_err(infrastructure)?;
    let occurred_at: DateTime<Utc> = row.try_get("occurred_at").map_err(infrastructure)?;
    let payload: Vec<u8> = row.try_get("payload").map_err(infrastructure)?;

    let user_id = ident::unpack(user_id.as_deref())?;
    Ok(decode_event(user_id, version, occurred_at, &payload)?)
}

#[async_trait]
impl EventStore for PgEventStore {
    #[tracing::instrument(skip(self), fields(site_id = %site_id))]
    async fn read_range(
        &self,
        site_id: Uuid,
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<Vec<SiteEvent>, StoreError> {
        let rows = sqlx::query(SELECT_RANGE)
            .bind(ident::pack(site_id).as_slice())
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await
            .map_err(infrastructure)?;

        let events = rows.iter().map(decode_row).collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = events.len(), "loaded site events");
        Ok(events)
    }

    #[tracing::instrument(skip(self, events), fields(site_id = %site_id, count = events.len()))]
    async fn append_batch(
        &self,
        site_id: Uuid,
        events: &[SiteEvent],
    ) -> Result<bool, StoreError> {
        if events.is_empty() {
            return Ok(true);
        }

        // Encode up front so a codec failure never opens a transaction.
        let mut rows = events
            .iter()
            .map(|event| -> Result<_, StoreError> { Ok((event, encode_payload(event)?)) })
            .collect::<Result<Vec<_>, _>>()?;
        // Ascending key order across writers, so overlapping batches conflict
        // instead of deadlocking.
        rows.sort_by_key(|(event, _)| event.version());

        let site_key = ident::pack(site_id);
        let mut tx = self.pool.begin().await.map_err(infrastructure)?;

        let mut conflict = false;
        for (event, payload) in rows {
            let result = sqlx::query(INSERT_EVENT)
                .bind(site_key.as_slice())
                .bind(event.version())
                .bind(ident::pack(event.user_id()).as_slice())
                .bind(event.timestamp().trunc_subsecs(STORED_SUBSEC_DIGITS))
                .bind(payload)
                .execute(&mut *tx)
                .await;

            let inserted = match result {
                Ok(done) => done.rows_affected(),
                Err(sqlx::Error::Database(err))
                    if err.is_unique_violation()
                        || err.code().as_deref() == Some(DEADLOCK_DETECTED) =>
                {
                    0
                }
                Err(err) => return Err(infrastructure(err)),
            };

            if inserted != 1 {
                tracing::warn!(version = event.version(), "version already taken");
                conflict = true;
                break;
            }
        }

        if conflict {
            tx.rollback().await.map_err(infrastructure)?;
            return Ok(false);
        }

        tx.commit().await.map_err(infrastructure)?;
        tracing::info!("appended site events");
        Ok(true)
    }
}
