//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Which record store backs the server. Chosen once, at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Process-local HashMap store; data is lost on exit.
    Memory,
    /// SQLite database file.
    Sqlite(PathBuf),
}

/// Configuration for the catalogue server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Storage backend.
    pub backend: Backend,
    /// Insert the default users into an empty user table.
    pub seed_users: bool,
}

impl ServerConfig {
    /// Creates a new server configuration.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            backend: Backend::Memory,
            seed_users: true,
        }
    }

    /// Sets the storage backend.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Enables or disables user seeding.
    pub fn with_seed_users(mut self, seed: bool) -> Self {
        self.seed_users = seed;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 3000)))
    }
}
