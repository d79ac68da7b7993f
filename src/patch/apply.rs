use tracing::debug;

use super::Patch;
use crate::error::StoreError;
use crate::record::Record;
use crate::store::RecordStore;

/// Resolve `patch` and persist it against record `id`.
///
/// An empty assignment set performs no write and returns the current record.
/// Otherwise the store verifies existence and writes in one operation.
/// `Ok(None)` means the record does not exist.
pub fn apply<S, P>(store: &S, id: i64, patch: &P) -> Result<Option<P::Record>, StoreError>
where
    S: RecordStore,
    P: Patch,
{
    let assignments = patch.assignments();
    let table = <P::Record as Record>::TABLE;

    if assignments.is_empty() {
        debug!(table, id, "no qualifying fields, fetching current record");
        return store.find_by_id::<P::Record>(id);
    }

    debug!(table, id, columns = ?assignments.columns(), "applying assignments");
    store.apply_assignments::<P::Record>(id, &assignments)
}
