//! Shared record contract.

use serde::Serialize;
use uuid::Uuid;

/// Stable identifier for every committed record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// A committed domain entity.
///
/// `Input` is the validated, typed payload a validator produces; the record
/// is assembled from it once an id has been generated.
pub trait Record: Clone + std::fmt::Debug + Serialize {
    /// Validated payload used to build the record.
    type Input: Clone + std::fmt::Debug + PartialEq;

    /// Short, stable kind label used in log events.
    const KIND: &'static str;

    /// Returns the identity assigned at creation.
    fn id(&self) -> RecordId;

    /// Builds a record from a freshly generated id and validated input.
    fn from_input(id: RecordId, input: Self::Input) -> Self;
}
