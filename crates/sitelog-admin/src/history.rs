//! `history` command: dump a site's event stream.

use serde_json::{Value, json};
use sitelog_core::error::StoreError;
use sitelog_core::event::SiteEvent;
use sitelog_core::repository::EventStore;
use uuid::Uuid;

/// Renders an event as a flat JSON object for operators.
#[must_use]
pub fn render_event(event: &SiteEvent) -> Value {
    let mut rendered = json!({
        "type": event.event_type(),
        "version": event.version(),
        "user_id": event.user_id(),
        "timestamp": event.timestamp().to_rfc3339(),
    });
    if let SiteEvent::Restored {
        restored_version, ..
    } = event
    {
        rendered["restored_version"] = json!(restored_version);
    }
    if let Some(delta) = event.delta() {
        rendered["delta"] = delta.clone();
    }
    rendered
}

/// Loads the requested slice of a site's stream and renders each event.
///
/// # Errors
///
/// Propagates any `StoreError` from the store; a single undecodable row fails
/// the whole dump.
pub async fn load_history(
    store: &dyn EventStore,
    site_id: Uuid,
    from: Option<i64>,
    to: Option<i64>,
) -> Result<Vec<Value>, StoreError> {
    let events = store.read_range(site_id, from, to).await?;
    tracing::info!(%site_id, count = events.len(), "loaded site history");
    Ok(events.iter().map(render_event).collect())
}
