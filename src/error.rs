use thiserror::Error;

/// Errors raised by record stores.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A shared lock was poisoned by a panicking writer.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),

    /// Row <-> record conversion failed.
    #[error("record serialization error: {0}")]
    Serde(String),

    /// An assignment named a column the record does not declare.
    #[error("unknown column {table}.{column}")]
    UnknownColumn {
        table: &'static str,
        column: String,
    },

    /// An assignment targeted the id or creation metadata.
    #[error("column {table}.{column} is immutable")]
    ImmutableColumn {
        table: &'static str,
        column: String,
    },

    /// A non-nullable column would be left empty.
    #[error("column {table}.{column} may not be null")]
    NotNull {
        table: &'static str,
        column: &'static str,
    },

    /// Underlying SQLite failure.
    #[cfg(feature = "sqlite")]
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
