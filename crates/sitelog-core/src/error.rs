//! Codec and store error types.

use thiserror::Error;

/// Failure to encode an event payload or to decode a stored row.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The event document could not be serialized.
    #[error("cannot encode event payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored payload is not a JSON document.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    /// The payload has no `type` field.
    #[error("invalid payload: missing \"type\" field")]
    MissingType,

    /// The payload `type` field is not a string.
    #[error("invalid payload: \"type\" field is not a text node")]
    TypeNotText,

    /// The payload `type` names no known event.
    #[error("unrecognized event type {0}")]
    UnrecognizedType(String),

    /// A creation event was stored outside the initial version slot.
    #[error("unexpected version {0} on creation event")]
    UnexpectedCreationVersion(i64),

    /// A restoration payload has no `restoredVersion` field.
    #[error("invalid payload: missing \"restoredVersion\" field")]
    MissingRestoredVersion,

    /// A restoration payload carries a `restoredVersion` that is not an integer.
    #[error("unexpected non-numeric restored version {0}")]
    NonNumericRestoredVersion(String),

    /// An identifier column was null.
    #[error("unexpected null instead of identifier")]
    NullIdentifier,

    /// An identifier blob had the wrong size.
    #[error("unexpected identifier blob of size {0}")]
    IdentifierLength(usize),
}

/// Top-level event store error type.
///
/// A concurrency conflict is not represented here: `append_batch` reports it
/// as `Ok(false)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An event could not be encoded, or a stored row could not be decoded.
    #[error("malformed event data: {0}")]
    Codec(#[from] CodecError),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
