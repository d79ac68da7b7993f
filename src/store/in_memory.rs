//! InMemoryStore - HashMap-backed record store for testing and development.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use serde_json::{Map, Value as Json};
use tracing::debug;

use super::RecordStore;
use crate::error::StoreError;
use crate::patch::Assignments;
use crate::record::{check_assignments, ColumnKind, Record};

type Row = Map<String, Json>;

/// Rows of one table plus its id sequence.
#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Row>,
    last_id: i64,
}

impl Table {
    /// Ids are never reused, even after deletes.
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory record store.
///
/// Rows are kept as JSON objects keyed by table name and id. Clone-friendly
/// via Arc; clones share storage.
#[derive(Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<&'static str, Table>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

/// Server-side creation timestamp, in SQLite `CURRENT_TIMESTAMP` format.
fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn decode<M: Record>(row: &Row) -> Result<M, StoreError> {
    Ok(serde_json::from_value(Json::Object(row.clone()))?)
}

fn check_not_null<M: Record>(row: &Row) -> Result<(), StoreError> {
    for column in M::COLUMNS {
        if column.nullable {
            continue;
        }
        if matches!(row.get(column.field), None | Some(Json::Null)) {
            return Err(StoreError::NotNull {
                table: M::TABLE,
                column: column.name,
            });
        }
    }
    Ok(())
}

impl RecordStore for InMemoryStore {
    fn find_all<M: Record>(&self) -> Result<Vec<M>, StoreError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        match tables.get(M::TABLE) {
            Some(table) => table.rows.values().map(decode::<M>).collect(),
            None => Ok(Vec::new()),
        }
    }

    fn find_by_id<M: Record>(&self, id: i64) -> Result<Option<M>, StoreError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        tables
            .get(M::TABLE)
            .and_then(|table| table.rows.get(&id))
            .map(decode::<M>)
            .transpose()
    }

    fn insert<M: Record>(&self, fields: &Assignments) -> Result<M, StoreError> {
        check_assignments::<M>(fields)?;

        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        let table = tables.entry(M::TABLE).or_default();

        let id = table.last_id + 1;
        let mut row = Row::new();
        for column in M::COLUMNS {
            let value = match column.kind {
                ColumnKind::Id => Json::from(id),
                ColumnKind::CreatedAt => Json::String(now()),
                ColumnKind::Text | ColumnKind::Integer | ColumnKind::Real => fields
                    .get(column.name)
                    .map(|v| v.to_json())
                    .unwrap_or(Json::Null),
            };
            row.insert(column.field.to_string(), value);
        }

        check_not_null::<M>(&row)?;
        let record = decode::<M>(&row)?;

        let id = table.next_id();
        table.rows.insert(id, row);
        debug!(table = M::TABLE, id, "inserted record");

        Ok(record)
    }

    fn apply_assignments<M: Record>(
        &self,
        id: i64,
        assignments: &Assignments,
    ) -> Result<Option<M>, StoreError> {
        check_assignments::<M>(assignments)?;

        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let Some(current) = tables
            .get_mut(M::TABLE)
            .and_then(|table| table.rows.get_mut(&id))
        else {
            return Ok(None);
        };

        let mut updated = current.clone();
        for assignment in assignments {
            updated.insert(assignment.field.to_string(), assignment.value.to_json());
        }

        check_not_null::<M>(&updated)?;
        let record = decode::<M>(&updated)?;
        *current = updated;
        debug!(table = M::TABLE, id, columns = ?assignments.columns(), "updated record");

        Ok(Some(record))
    }

    fn delete<M: Record>(&self, id: i64) -> Result<Option<M>, StoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let removed = tables
            .get_mut(M::TABLE)
            .and_then(|table| table.rows.remove(&id));

        match removed {
            Some(row) => {
                debug!(table = M::TABLE, id, "deleted record");
                decode::<M>(&row).map(Some)
            }
            None => Ok(None),
        }
    }

    fn count<M: Record>(&self) -> Result<usize, StoreError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        Ok(tables.get(M::TABLE).map(|t| t.rows.len()).unwrap_or(0))
    }
}
