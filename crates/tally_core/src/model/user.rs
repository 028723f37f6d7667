//! User record produced by the "add user" form.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Committed user entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    /// Non-blank display name, stored as entered.
    pub username: String,
    /// Age in whole years, always >= 1.
    pub age: u32,
}

/// Validated user input, not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub age: u32,
}

impl Record for User {
    type Input = NewUser;

    const KIND: &'static str = "user";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_input(id: RecordId, input: NewUser) -> Self {
        Self {
            id,
            username: input.username,
            age: input.age,
        }
    }
}
