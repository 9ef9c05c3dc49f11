//! Site lifecycle events.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Version occupied by the creation event of every site stream.
pub const INITIAL_VERSION: i64 = 1;

/// A single entry in a site's event stream.
///
/// The site identifier is not part of the event; it keys the stream the event
/// is appended to.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    /// The site was created. Always occupies [`INITIAL_VERSION`].
    Created {
        /// User who created the site.
        user_id: Uuid,
        /// When the site was created.
        timestamp: DateTime<Utc>,
    },
    /// Some site fields changed.
    Updated {
        /// Stream version of this event.
        version: i64,
        /// User who made the change.
        user_id: Uuid,
        /// When the change was made.
        timestamp: DateTime<Utc>,
        /// Changed fields, opaque to the store.
        delta: Value,
    },
    /// The site was deleted.
    Deleted {
        /// Stream version of this event.
        version: i64,
        /// User who deleted the site.
        user_id: Uuid,
        /// When the site was deleted.
        timestamp: DateTime<Utc>,
    },
    /// The site was rolled back to the state at an earlier version.
    Restored {
        /// Stream version of this event.
        version: i64,
        /// User who restored the site.
        user_id: Uuid,
        /// When the site was restored.
        timestamp: DateTime<Utc>,
        /// The version whose state was restored.
        restored_version: i64,
        /// Fields changed by the restoration.
        delta: Value,
    },
}

impl SiteEvent {
    /// Returns the wire tag for this event.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Updated { .. } => "updated",
            Self::Deleted { .. } => "deleted",
            Self::Restored { .. } => "restored",
        }
    }

    /// Returns the stream version this event occupies.
    #[must_use]
    pub fn version(&self) -> i64 {
        match self {
            Self::Created { .. } => INITIAL_VERSION,
            Self::Updated { version, .. }
            | Self::Deleted { version, .. }
            | Self::Restored { version, .. } => *version,
        }
    }

    /// Returns the user responsible for this event.
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        match self {
            Self::Created { user_id, .. }
            | Self::Updated { user_id, .. }
            | Self::Deleted { user_id, .. }
            | Self::Restored { user_id, .. } => *user_id,
        }
    }

    /// Returns when this event occurred.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Created { timestamp, .. }
            | Self::Updated { timestamp, .. }
            | Self::Deleted { timestamp, .. }
            | Self::Restored { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the delta document, if this variant carries one.
    #[must_use]
    pub fn delta(&self) -> Option<&Value> {
        match self {
            Self::Updated { delta, .. } | Self::Restored { delta, .. } => Some(delta),
            Self::Created { .. } | Self::Deleted { .. } => None,
        }
    }
}
