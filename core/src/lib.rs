//! Client-side core for a single-list to-do application.
//!
//! # Overview
//! Holds the session's items in an [`ItemStore`] and keeps them in step with
//! a REST backend through [`Syncer`]. Request building and response parsing
//! live in [`ApiClient`] and never touch the network; a [`Transport`]
//! implementation supplied by the host executes the actual round trips, so
//! the whole crate stays deterministic and testable.
//!
//! # Design
//! - `ItemStore` is plain owned state. Change detection is pull based:
//!   callers poll [`ItemStore::revision`] instead of registering callbacks.
//! - Each sync operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), with the transport in between.
//! - The store is only mutated after a response parses cleanly, so errors
//!   of every kind leave local state as it was.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod sync;
pub mod types;

pub use client::ApiClient;
pub use error::SyncError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use store::ItemStore;
pub use sync::Syncer;
pub use types::{Item, ItemId, ItemPatch, NewItem};
