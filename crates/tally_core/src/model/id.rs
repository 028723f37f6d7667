//! Record identity generation.
//!
//! # Invariants
//! - A generator never returns the same id twice within one process.
//! - Generated ids are never the nil UUID.

use crate::model::record::RecordId;
use uuid::Uuid;

/// Source of fresh record identities.
pub trait IdGenerator {
    /// Returns an id distinct from every id this generator returned before.
    fn generate(&mut self) -> RecordId;
}

/// Time-ordered UUIDv7 generator.
///
/// `Uuid::now_v7` keeps a process-wide counter, so ids from this generator
/// are strictly increasing and therefore distinct.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn generate(&mut self) -> RecordId {
        Uuid::now_v7()
    }
}

/// Deterministic counter-backed generator.
///
/// Yields `Uuid::from_u128(1)`, `Uuid::from_u128(2)`, ... Useful for hosts
/// that replay event logs and need reproducible ids.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts the sequence at `first`; `0` is bumped to `1` to avoid the nil id.
    pub fn starting_at(first: u128) -> Self {
        Self { next: first.max(1) }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&mut self) -> RecordId {
        let id = Uuid::from_u128(self.next);
        // Saturate instead of wrapping to nil; a repeat is caught by the store.
        self.next = self.next.saturating_add(1);
        id
    }
}
