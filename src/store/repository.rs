//! RecordRepository - Typed accessor for record CRUD operations.

use std::marker::PhantomData;

use super::RecordStore;
use crate::error::StoreError;
use crate::patch::{self, Patch};
use crate::record::{NewRecord, Record};

/// Typed repository wrapper for accessing records of a specific type.
pub struct RecordRepository<'a, S, M> {
    store: &'a S,
    _marker: PhantomData<M>,
}

impl<'a, S: RecordStore, M: Record> RecordRepository<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// All records, ordered by id.
    pub fn all(&self) -> Result<Vec<M>, StoreError> {
        self.store.find_all()
    }

    /// Get a record by id.
    pub fn get(&self, id: i64) -> Result<Option<M>, StoreError> {
        self.store.find_by_id(id)
    }

    /// Insert a new record from its creation field set.
    pub fn insert<N: NewRecord<Record = M>>(&self, new: &N) -> Result<M, StoreError> {
        self.store.insert(&new.assignments())
    }

    /// Resolve and apply a partial update. None if the record does not exist.
    pub fn patch<P>(&self, id: i64, update: &P) -> Result<Option<M>, StoreError>
    where
        P: Patch<Record = M>,
    {
        patch::apply(self.store, id, update)
    }

    /// Delete a record, returning its last state.
    pub fn delete(&self, id: i64) -> Result<Option<M>, StoreError> {
        self.store.delete(id)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        self.store.count::<M>()
    }
}

/// Extension trait for typed record access on any RecordStore.
pub trait RecordsExt: RecordStore + Sized {
    /// Get a typed record repository.
    fn records<M: Record>(&self) -> RecordRepository<'_, Self, M> {
        RecordRepository::new(self)
    }
}

impl<S: RecordStore> RecordsExt for S {}
