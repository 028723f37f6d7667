//! Append-only record store.
//!
//! # Responsibility
//! - Keep committed records ordered oldest-first.
//! - Reject duplicate ids before they can corrupt the sequence.
//!
//! # Invariants
//! - `all()` order equals append order.
//! - Every id in the store is unique.

use crate::model::record::{Record, RecordId};
use log::{debug, error};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with the same id is already stored.
    DuplicateId(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "record id already present in store: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Ordered in-memory collection of committed records.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    ids: HashSet<RecordId>,
}

impl<R: Record> RecordStore<R> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: HashSet::new(),
        }
    }

    /// Appends `record` at the end of the sequence.
    ///
    /// # Panics
    /// Panics when `record.id()` is already stored. A duplicate id means the
    /// id generator or the caller is broken, not that the user typed
    /// something wrong.
    pub fn append(&mut self, record: R) {
        if let Err(err) = self.try_append(record) {
            error!(
                "event=store_invariant_violation module=repo status=error kind={} error={}",
                R::KIND,
                err
            );
            panic!("{err}");
        }
    }

    /// Appends `record`, returning `StoreError::DuplicateId` instead of panicking.
    ///
    /// The store is left unchanged on error.
    pub fn try_append(&mut self, record: R) -> StoreResult<()> {
        let id = record.id();
        if !self.ids.insert(id) {
            return Err(StoreError::DuplicateId(id));
        }
        self.records.push(record);
        debug!(
            "event=record_appended module=repo status=ok kind={} id={} count={}",
            R::KIND,
            id,
            self.records.len()
        );
        Ok(())
    }

    /// Read-only view of every record, oldest first.
    pub fn all(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
