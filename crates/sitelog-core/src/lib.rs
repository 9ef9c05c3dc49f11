//! Sitelog Core — site event model and event store contract.
//!
//! This crate defines the site lifecycle events, the payload codec used to
//! persist them, binary identifier packing, and the `EventStore` trait that
//! storage backends implement. It contains no infrastructure code.

pub mod codec;
pub mod error;
pub mod event;
pub mod ident;
pub mod repository;
