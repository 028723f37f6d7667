//! In-memory record storage.
//!
//! # Responsibility
//! - Hold committed records in insertion order.
//! - Guard id uniqueness at the single write entry point.
//!
//! # Invariants
//! - Append is the only mutation; there is no update or delete path.
//! - Readers only ever get shared borrows or owned copies.

pub mod record_store;
