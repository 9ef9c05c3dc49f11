//! Event payload codec.
//!
//! Each stored row carries its version, user and timestamp as columns; the
//! payload is a JSON document holding the `type` tag and whatever fields the
//! variant adds on top of those columns.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::error::CodecError;
use crate::event::{INITIAL_VERSION, SiteEvent};

const TYPE_FIELD: &str = "type";
const DELTA_FIELD: &str = "delta";
const RESTORED_VERSION_FIELD: &str = "restoredVersion";

/// Encodes the payload column for an event.
///
/// # Errors
///
/// Returns `CodecError::Encode` if the document cannot be serialized.
pub fn encode_payload(event: &SiteEvent) -> Result<Vec<u8>, CodecError> {
    let payload = match event {
        SiteEvent::Created { .. } | SiteEvent::Deleted { .. } => {
            json!({ TYPE_FIELD: event.event_type() })
        }
        SiteEvent::Updated { delta, .. } => json!({
            TYPE_FIELD: event.event_type(),
            DELTA_FIELD: delta,
        }),
        SiteEvent::Restored {
            restored_version,
            delta,
            ..
        } => json!({
            TYPE_FIELD: event.event_type(),
            RESTORED_VERSION_FIELD: restored_version,
            DELTA_FIELD: delta,
        }),
    };

    serde_json::to_vec(&payload).map_err(CodecError::Encode)
}

/// Decodes a stored row back into an event.
///
/// # Errors
///
/// Returns a `CodecError` if the payload is not a JSON object with a known
/// `type` tag, if a creation event is stored outside [`INITIAL_VERSION`], or
/// if a restoration lacks an integral `restoredVersion`.
pub fn decode_event(
    user_id: Uuid,
    version: i64,
    timestamp: DateTime<Utc>,
    payload: &[u8],
) -> Result<SiteEvent, CodecError> {
    let mut document: Map<String, Value> = match serde_json::from_slice::<Value>(payload) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => return Err(CodecError::MissingType),
        Err(err) => return Err(CodecError::InvalidPayload(err)),
    };

    let tag = match document.remove(TYPE_FIELD) {
        Some(Value::String(tag)) => tag,
        Some(_) => return Err(CodecError::TypeNotText),
        None => return Err(CodecError::MissingType),
    };
    let delta = document.remove(DELTA_FIELD).unwrap_or(Value::Null);

    match tag.as_str() {
        "created" => {
            if version != INITIAL_VERSION {
                return Err(CodecError::UnexpectedCreationVersion(version));
            }
            Ok(SiteEvent::Created { user_id, timestamp })
        }
        "updated" => Ok(SiteEvent::Updated {
            version,
            user_id,
            timestamp,
            delta,
        }),
        "deleted" => Ok(SiteEvent::Deleted {
            version,
            user_id,
            timestamp,
        }),
        "restored" => {
            let restored_version = match document.get(RESTORED_VERSION_FIELD) {
                None => return Err(CodecError::MissingRestoredVersion),
                Some(value) => value
                    .as_i64()
                    .ok_or_else(|| CodecError::NonNumericRestoredVersion(value.to_string()))?,
            };
            Ok(SiteEvent::Restored {
                version,
                user_id,
                timestamp,
                restored_version,
                delta,
            })
        }
        _ => Err(CodecError::UnrecognizedType(tag)),
    }
}
