//! Records - Typed entities persisted by a [`RecordStore`](crate::RecordStore).
//!
//! A record type declares its table and a static column catalogue. Stores use
//! the catalogue to map rows to JSON objects (and from there to the record
//! via serde) and to validate every assignment before it is written.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_api::{Column, ColumnKind, Record};
//!
//! #[derive(Serialize, Deserialize, Clone)]
//! struct Tag {
//!     id: i64,
//!     label: String,
//! }
//!
//! impl Record for Tag {
//!     const TABLE: &'static str = "tags";
//!     const COLUMNS: &'static [Column] = &[
//!         Column::new("id", "id", ColumnKind::Id),
//!         Column::new("label", "label", ColumnKind::Text),
//!     ];
//!     fn id(&self) -> i64 { self.id }
//! }
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;
use crate::patch::Assignments;

/// Trait for types that can be stored as records.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Table name. Maps to a SQL table or an in-memory collection.
    const TABLE: &'static str;

    /// Column catalogue, in select order.
    const COLUMNS: &'static [Column];

    /// Store-assigned identifier.
    fn id(&self) -> i64;
}

/// Field set supplied when creating a record of type [`Self::Record`].
///
/// The store fills in the id and any server-side defaults.
pub trait NewRecord {
    type Record: Record;

    fn assignments(&self) -> Assignments;
}

/// What a column holds and who is allowed to write it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Store-assigned primary key.
    Id,
    /// Creation timestamp, filled in by the store on insert.
    CreatedAt,
    Text,
    Integer,
    Real,
}

/// One entry of a record's column catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// SQL column name (snake_case).
    pub name: &'static str,
    /// JSON attribute name (camelCase).
    pub field: &'static str,
    pub kind: ColumnKind,
    pub nullable: bool,
}

impl Column {
    pub const fn new(name: &'static str, field: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            field,
            kind,
            nullable: false,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Id and creation metadata are never written after insert.
    pub fn is_mutable(&self) -> bool {
        !matches!(self.kind, ColumnKind::Id | ColumnKind::CreatedAt)
    }
}

/// Look up a column of `M` by SQL name.
pub(crate) fn column<M: Record>(name: &str) -> Result<&'static Column, StoreError> {
    M::COLUMNS
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| StoreError::UnknownColumn {
            table: M::TABLE,
            column: name.to_string(),
        })
}

/// Verify that every assignment targets a declared, mutable column of `M`.
pub fn check_assignments<M: Record>(assignments: &Assignments) -> Result<(), StoreError> {
    for assignment in assignments.iter() {
        let column = column::<M>(assignment.column)?;
        if !column.is_mutable() {
            return Err(StoreError::ImmutableColumn {
                table: M::TABLE,
                column: assignment.column.to_string(),
            });
        }
    }
    Ok(())
}

/// Comma-separated list of all column names of `M`, in catalogue order.
pub(crate) fn select_list<M: Record>() -> String {
    M::COLUMNS
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ")
}
