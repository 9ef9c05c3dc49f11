//! Test stores — in-process `EventStore` implementations for tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sitelog_core::codec::{decode_event, encode_payload};
use sitelog_core::error::StoreError;
use sitelog_core::event::SiteEvent;
use sitelog_core::repository::EventStore;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Row {
    user_id: Uuid,
    occurred_at: DateTime<Utc>,
    payload: Vec<u8>,
}

/// An event store that keeps encoded rows in memory.
///
/// Honours the same contract as the database-backed store: events go through
/// the payload codec, `(site, version)` is unique, and a batch with any taken
/// version is rejected as a whole.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    streams: Mutex<HashMap<Uuid, BTreeMap<i64, Row>>>,
}

impl InMemoryEventStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw payload at `version`, bypassing the codec. Used to seed
    /// corrupt rows.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn insert_raw(&self, site_id: Uuid, version: i64, user_id: Uuid, payload: Vec<u8>) {
        self.streams.lock().unwrap().entry(site_id).or_default().insert(
            version,
            Row {
                user_id,
                occurred_at: crate::fixed_timestamp(),
                payload,
            },
        );
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn read_range(
        &self,
        site_id: Uuid,
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<Vec<SiteEvent>, StoreError> {
        let (from, to) = (from.unwrap_or(i64::MIN), to.unwrap_or(i64::MAX));
        let streams = self.streams.lock().unwrap();
        let Some(stream) = streams.get(&site_id).filter(|_| from <= to) else {
            return Ok(vec![]);
        };

        stream
            .range(from..=to)
            .map(|(version, row)| {
                decode_event(row.user_id, *version, row.occurred_at, &row.payload)
                    .map_err(StoreError::from)
            })
            .collect()
    }

    async fn append_batch(
        &self,
        site_id: Uuid,
        events: &[SiteEvent],
    ) -> Result<bool, StoreError> {
        let mut rows = BTreeMap::new();
        for event in events {
            let row = Row {
                user_id: event.user_id(),
                occurred_at: event.timestamp(),
                payload: encode_payload(event)?,
            };
            if rows.insert(event.version(), row).is_some() {
                return Ok(false);
            }
        }

        let mut streams = self.streams.lock().unwrap();
        let stream = streams.entry(site_id).or_default();
        if rows.keys().any(|version| stream.contains_key(version)) {
            return Ok(false);
        }
        stream.extend(rows);
        Ok(true)
    }
}

/// An event store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingEventStore;

#[async_trait]
impl EventStore for FailingEventStore {
    async fn read_range(
        &self,
        _site_id: Uuid,
        _from: Option<i64>,
        _to: Option<i64>,
    ) -> Result<Vec<SiteEvent>, StoreError> {
        Err(StoreError::Infrastructure("connection refused".into()))
    }

    async fn append_batch(
        &self,
        _site_id: Uuid,
        _events: &[SiteEvent],
    ) -> Result<bool, StoreError> {
        Err(StoreError::Infrastructure("connection refused".into()))
    }
}
