//! Derived, filtered views over stored records.
//!
//! # Responsibility
//! - Select the records matching a user-chosen year.
//! - Hold the selected year independently of the store.
//!
//! # Invariants
//! - Filtering is pure: the store is never touched.
//! - Output keeps the store's relative order.
//! - No match yields an empty list, not an error.

use crate::model::expense::Dated;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Year used when nothing else is configured.
pub const DEFAULT_FILTER_YEAR: i32 = 2020;

/// Criterion parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Criterion text is not a calendar year.
    InvalidYear(String),
}

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear(value) => write!(f, "filter criterion is not a year: `{value}`"),
        }
    }
}

impl Error for FilterError {}

/// Selected year criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearFilter {
    year: i32,
}

impl YearFilter {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Parses selector text such as `"2021"`.
    pub fn parse(value: &str) -> Result<Self, FilterError> {
        value
            .trim()
            .parse::<i32>()
            .map(Self::new)
            .map_err(|_| FilterError::InvalidYear(value.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn matches<R: Dated>(&self, record: &R) -> bool {
        record.year() == self.year
    }

    /// Records matching this year, in input order.
    pub fn apply<'a, R: Dated>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

impl Default for YearFilter {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER_YEAR)
    }
}

/// Returns the records whose date falls in `year`, in input order.
pub fn filter_by_year<R: Dated>(records: &[R], year: i32) -> Vec<&R> {
    YearFilter::new(year).apply(records)
}

/// Distinct years present in `records`, ascending.
pub fn available_years<R: Dated>(records: &[R]) -> Vec<i32> {
    records
        .iter()
        .map(|record| record.year())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
