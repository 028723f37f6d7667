//! Domain model for committed records and user-facing notifications.
//!
//! # Responsibility
//! - Define the record shapes (users, expenses) stored by the core.
//! - Define record identity and the generators that mint it.
//!
//! # Invariants
//! - Every committed record carries a `RecordId` assigned at creation.
//! - Records are never mutated once handed to a `RecordStore`.

pub mod expense;
pub mod id;
pub mod notification;
pub mod record;
pub mod user;
