//! HTTP API integration tests.
//!
//! Starts the axum router on an ephemeral port and exercises it with reqwest.

mod users;
mod products;
mod categories;

#[cfg(feature = "sqlite")]
mod sqlite;
