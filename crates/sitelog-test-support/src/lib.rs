//! Shared test fixtures and event store doubles for sitelog.

mod fixtures;
mod repository;

pub use fixtures::{created, deleted, fixed_timestamp, restored, site_history, updated};
pub use repository::{FailingEventStore, InMemoryEventStore};
