//! Sitelog Admin — operator commands for the site event store.

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod schema;
