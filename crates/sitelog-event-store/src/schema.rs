//! Event store database schema.

/// SQL to create the site events table. Shared with the `migrations/`
/// fixture used by the integration tests.
///
/// Identifiers are stored as packed 16-byte values; see `sitelog_core::ident`.
pub const CREATE_EVENTS_TABLE: &str =
    include_str!("../../../migrations/20260101000000_create_site_events.sql");
