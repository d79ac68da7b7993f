//! SqliteStore - Relational record store backed by SQLite.
//!
//! Each operation is a single statement. Writes use `RETURNING` so that the
//! existence check and the write of an update or delete are one operation.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::{Type, ValueRef};
use rusqlite::{params_from_iter, Connection, OptionalExtension, ToSql};
use serde_json::{Map, Value as Json};
use tracing::debug;

use super::RecordStore;
use crate::error::StoreError;
use crate::patch::Assignments;
use crate::record::{check_assignments, select_list, Record};

/// Tables for the catalogue records. Bootstrapped on open; there is no
/// migration machinery.
const SCHEMA: &str = include_str!("schema.sql");

/// SQLite record store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database file and bootstrap the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection and bootstrap the schema.
    pub fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::LockPoisoned("connection"))
    }
}

/// Map a row selected with [`select_list`] to the record's JSON shape.
fn row_to_json<M: Record>(row: &rusqlite::Row<'_>) -> rusqlite::Result<Json> {
    let mut object = Map::new();
    for (idx, column) in M::COLUMNS.iter().enumerate() {
        let value = match row.get_ref(idx)? {
            ValueRef::Null => Json::Null,
            ValueRef::Integer(n) => Json::from(n),
            ValueRef::Real(f) => Json::from(f),
            ValueRef::Text(bytes) => Json::String(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(_) => {
                return Err(rusqlite::Error::InvalidColumnType(
                    idx,
                    column.name.to_string(),
                    Type::Blob,
                ))
            }
        };
        object.insert(column.field.to_string(), value);
    }
    Ok(Json::Object(object))
}

fn decode<M: Record>(json: Json) -> Result<M, StoreError> {
    Ok(serde_json::from_value(json)?)
}

impl RecordStore for SqliteStore {
    fn find_all<M: Record>(&self) -> Result<Vec<M>, StoreError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", select_list::<M>(), M::TABLE);
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], row_to_json::<M>)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(decode::<M>).collect()
    }

    fn find_by_id<M: Record>(&self, id: i64) -> Result<Option<M>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            select_list::<M>(),
            M::TABLE
        );
        let conn = self.conn()?;
        let row = conn
            .query_row(&sql, [id], row_to_json::<M>)
            .optional()?;

        row.map(decode::<M>).transpose()
    }

    fn insert<M: Record>(&self, fields: &Assignments) -> Result<M, StoreError> {
        check_assignments::<M>(fields)?;

        let sql = if fields.is_empty() {
            format!(
                "INSERT INTO {} DEFAULT VALUES RETURNING {}",
                M::TABLE,
                select_list::<M>()
            )
        } else {
            let placeholders = (1..=fields.len())
                .map(|i| format!("?{i}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
                M::TABLE,
                fields.columns().join(", "),
                placeholders,
                select_list::<M>()
            )
        };

        let conn = self.conn()?;
        let row = conn.query_row(
            &sql,
            params_from_iter(fields.iter().map(|a| &a.value)),
            row_to_json::<M>,
        )?;
        let record = decode::<M>(row)?;
        debug!(table = M::TABLE, id = record.id(), "inserted record");

        Ok(record)
    }

    fn apply_assignments<M: Record>(
        &self,
        id: i64,
        assignments: &Assignments,
    ) -> Result<Option<M>, StoreError> {
        check_assignments::<M>(assignments)?;
        if assignments.is_empty() {
            return self.find_by_id(id);
        }

        let set_clause = assignments
            .iter()
            .enumerate()
            .map(|(i, a)| format!("{} = ?{}", a.column, i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?1 RETURNING {}",
            M::TABLE,
            set_clause,
            select_list::<M>()
        );

        let mut params: Vec<&dyn ToSql> = Vec::with_capacity(assignments.len() + 1);
        params.push(&id);
        params.extend(assignments.iter().map(|a| &a.value as &dyn ToSql));

        let conn = self.conn()?;
        let row = conn
            .query_row(&sql, params.as_slice(), row_to_json::<M>)
            .optional()?;
        debug!(
            table = M::TABLE,
            id,
            columns = ?assignments.columns(),
            found = row.is_some(),
            "update statement executed"
        );

        row.map(decode::<M>).transpose()
    }

    fn delete<M: Record>(&self, id: i64) -> Result<Option<M>, StoreError> {
        let sql = format!(
            "DELETE FROM {} WHERE id = ?1 RETURNING {}",
            M::TABLE,
            select_list::<M>()
        );
        let conn = self.conn()?;
        let row = conn
            .query_row(&sql, [id], row_to_json::<M>)
            .optional()?;
        debug!(table = M::TABLE, id, found = row.is_some(), "delete statement executed");

        row.map(decode::<M>).transpose()
    }

    fn count<M: Record>(&self) -> Result<usize, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", M::TABLE);
        let conn = self.conn()?;
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
