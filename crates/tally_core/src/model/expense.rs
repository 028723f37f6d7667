//! Expense record produced by the "new expense" form.
//!
//! # Invariants
//! - `amount` is strictly positive.
//! - `date` is a calendar date without time or zone.

use crate::model::record::{Record, RecordId};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Committed expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    pub title: String,
    /// Serialized as a decimal string to avoid float rounding.
    pub amount: Decimal,
    /// Serialized as ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Validated expense input, not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub title: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// Records that can be bucketed by calendar year.
pub trait Dated {
    fn date(&self) -> NaiveDate;

    fn year(&self) -> i32 {
        self.date().year()
    }
}

impl Dated for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Record for Expense {
    type Input = NewExpense;

    const KIND: &'static str = "expense";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_input(id: RecordId, input: NewExpense) -> Self {
        Self {
            id,
            title: input.title,
            amount: input.amount,
            date: input.date,
        }
    }
}
