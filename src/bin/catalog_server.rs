//! catalog-server
//!
//! Serves the product catalogue API over HTTP from either the in-memory
//! store or a SQLite database file.
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_api::catalog::seed_users;
use catalog_api::http::{self, Catalog};
use catalog_api::{Backend, InMemoryStore, RecordStore, ServerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StoreKind {
    Memory,
    Sqlite,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address for the HTTP API
    #[arg(short, long, env = "CATALOG_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Storage backend
    #[arg(long, env = "CATALOG_STORE", value_enum, default_value_t = StoreKind::Memory)]
    store: StoreKind,

    /// SQLite database file (sqlite backend only)
    #[arg(long, env = "CATALOG_DATABASE", default_value = "catalog.db")]
    database: PathBuf,

    /// Do not insert the default users into an empty user table
    #[arg(long)]
    no_seed: bool,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let backend = match self.store {
            StoreKind::Memory => Backend::Memory,
            StoreKind::Sqlite => Backend::Sqlite(self.database),
        };
        ServerConfig::new(self.bind)
            .with_backend(backend)
            .with_seed_users(!self.no_seed)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();
    info!(backend = ?config.backend, "starting catalog server");

    match config.backend.clone() {
        Backend::Memory => run(InMemoryStore::new(), &config).await,
        #[cfg(feature = "sqlite")]
        Backend::Sqlite(path) => {
            let store = catalog_api::SqliteStore::open(&path)
                .with_context(|| format!("opening database {}", path.display()))?;
            run(store, &config).await
        }
        #[cfg(not(feature = "sqlite"))]
        Backend::Sqlite(_) => anyhow::bail!("built without the `sqlite` feature"),
    }
}

async fn run<S: RecordStore + 'static>(store: S, config: &ServerConfig) -> Result<()> {
    if config.seed_users {
        seed_users(&store).context("seeding users")?;
    }

    let catalog = Arc::new(Catalog::new(store));
    http::serve(catalog, config.bind_addr)
        .await
        .context("HTTP server failed")?;

    info!("catalog server stopped");
    Ok(())
}
