//! Product catalogue CRUD API.
//!
//! Typed records, partial-update resolution, interchangeable in-memory and
//! SQLite stores, and an axum HTTP transport (feature `http`).

// Lets `#[derive(Patch)]` expansions refer to `catalog_api::…` inside this crate.
extern crate self as catalog_api;

pub mod catalog;
mod config;
mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod patch;
mod record;
pub mod store;
mod value;

pub use catalog_api_macros::Patch;
pub use config::{Backend, ServerConfig};
pub use error::StoreError;
pub use patch::{Assignment, Assignments, Patch, PatchField, Policy};
pub use record::{check_assignments, Column, ColumnKind, NewRecord, Record};
pub use store::{InMemoryStore, RecordRepository, RecordStore, RecordsExt};
#[cfg(feature = "sqlite")]
pub use store::SqliteStore;
pub use value::Value;
