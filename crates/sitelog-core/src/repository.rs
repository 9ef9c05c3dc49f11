//! Event store abstraction.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::event::SiteEvent;

/// Append-only storage for site event streams.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Load the events of a site, ordered by ascending version.
    ///
    /// `from` and `to` are inclusive version bounds; `None` leaves that side
    /// open. A site with no matching events yields an empty list.
    async fn read_range(
        &self,
        site_id: Uuid,
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<Vec<SiteEvent>, StoreError>;

    /// Atomically append events to a site stream, each at the version it
    /// carries.
    ///
    /// Returns `Ok(false)` without persisting anything if any of the versions
    /// is already taken. Callers that want to retry must re-read the stream
    /// and resubmit.
    ///
    /// Backends may store timestamps at a coarser precision than
    /// `DateTime<Utc>`; the `PostgreSQL` store truncates them to
    /// microseconds.
    async fn append_batch(
        &self,
        site_id: Uuid,
        events: &[SiteEvent],
    ) -> Result<bool, StoreError>;
}
