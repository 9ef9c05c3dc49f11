//! Sitelog Event Store — `PostgreSQL` persistence for site event streams.

pub mod pg_event_store;
pub mod schema;

pub use pg_event_store::PgEventStore;
