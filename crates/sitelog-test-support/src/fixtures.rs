//! Event fixtures — deterministic site events for tests.
//!
//! Timestamps are whole seconds so they survive any backing store that keeps
//! at least millisecond precision.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{Value, json};
use sitelog_core::event::{INITIAL_VERSION, SiteEvent};
use uuid::Uuid;

/// Fixed point in time used as the base for all fixture timestamps.
///
/// # Panics
///
/// Panics only if chrono rejects the constant date.
#[must_use]
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

fn at_version(version: i64) -> DateTime<Utc> {
    fixed_timestamp() + Duration::seconds(version)
}

/// A creation event by `user_id`.
#[must_use]
pub fn created(user_id: Uuid) -> SiteEvent {
    SiteEvent::Created {
        user_id,
        timestamp: at_version(INITIAL_VERSION),
    }
}

/// An update at `version` carrying `delta`.
#[must_use]
pub fn updated(version: i64, user_id: Uuid, delta: Value) -> SiteEvent {
    SiteEvent::Updated {
        version,
        user_id,
        timestamp: at_version(version),
        delta,
    }
}

/// A deletion at `version`.
#[must_use]
pub fn deleted(version: i64, user_id: Uuid) -> SiteEvent {
    SiteEvent::Deleted {
        version,
        user_id,
        timestamp: at_version(version),
    }
}

/// A restoration at `version` of the state at `restored_version`.
#[must_use]
pub fn restored(version: i64, user_id: Uuid, restored_version: i64, delta: Value) -> SiteEvent {
    SiteEvent::Restored {
        version,
        user_id,
        timestamp: at_version(version),
        restored_version,
        delta,
    }
}

/// A stream of `len` events: a creation followed by updates at versions
/// `2..=len`, each renaming the site.
#[must_use]
pub fn site_history(user_id: Uuid, len: i64) -> Vec<SiteEvent> {
    (INITIAL_VERSION..INITIAL_VERSION + len)
        .map(|version| {
            if version == INITIAL_VERSION {
                created(user_id)
            } else {
                updated(version, user_id, json!({ "name": format!("site v{version}") }))
            }
        })
        .collect()
}
