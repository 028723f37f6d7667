//! Pure form validators.
//!
//! # Responsibility
//! - Map a form snapshot to typed record input or one user-facing failure.
//!
//! # Invariants
//! - Rules run in a fixed order; the first failing rule wins.
//! - Blank-field checks always run before range/format checks.
//! - Validators never mutate anything.

use crate::model::expense::{Expense, NewExpense};
use crate::model::notification::Notification;
use crate::model::record::Record;
use crate::model::user::{NewUser, User};
use crate::service::form::FormSnapshot;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const USERNAME_FIELD: &str = "username";
pub const AGE_FIELD: &str = "age";
pub const USER_FIELDS: &[&str] = &[USERNAME_FIELD, AGE_FIELD];

pub const TITLE_FIELD: &str = "title";
pub const AMOUNT_FIELD: &str = "amount";
pub const DATE_FIELD: &str = "date";
pub const EXPENSE_FIELDS: &[&str] = &[TITLE_FIELD, AMOUNT_FIELD, DATE_FIELD];

pub const USER_EMPTY_MESSAGE: &str = "Please set a valid name and age (non-empty values)";
pub const USER_AGE_MESSAGE: &str = "Please enter a valid age ( > 0 )";
pub const EXPENSE_EMPTY_MESSAGE: &str =
    "Please set a valid title, amount and date (non-empty values)";
pub const EXPENSE_AMOUNT_MESSAGE: &str = "Please enter a valid amount ( > 0 )";
pub const EXPENSE_DATE_MESSAGE: &str = "Please enter a valid date (YYYY-MM-DD)";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which rule rejected the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A required field is blank after trimming.
    MissingValue,
    /// A numeric field is below its minimum or not a number.
    OutOfRange,
    /// A field has the wrong textual format.
    BadFormat,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingValue => "missing_value",
            Self::OutOfRange => "out_of_range",
            Self::BadFormat => "bad_format",
        }
    }
}

/// Structured validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub kind: FailureKind,
    pub message: &'static str,
}

impl ValidationFailure {
    fn new(kind: FailureKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    /// Notification shown to the user for this failure.
    pub fn to_notification(&self) -> Notification {
        Notification::invalid_input(self.message)
    }
}

/// Outcome of validating one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult<T> {
    Valid(T),
    Invalid(ValidationFailure),
}

/// Validator for one record kind.
pub trait Validator {
    type Record: Record;

    /// Field names of the form this validator reads.
    fn fields(&self) -> &'static [&'static str];

    fn validate(
        &self,
        snapshot: &FormSnapshot,
    ) -> ValidationResult<<Self::Record as Record>::Input>;
}

/// Rules for the "add user" form.
///
/// 1. `username` or `age` blank ⇒ missing-value message.
/// 2. `age` below 1 (or not a number) ⇒ age-range message.
/// 3. Otherwise valid, age truncated to whole years.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserValidator;

impl Validator for UserValidator {
    type Record = User;

    fn fields(&self) -> &'static [&'static str] {
        USER_FIELDS
    }

    fn validate(&self, snapshot: &FormSnapshot) -> ValidationResult<NewUser> {
        let username = snapshot.get(USERNAME_FIELD);
        let age = snapshot.get(AGE_FIELD);

        if is_blank(username) || is_blank(age) {
            return ValidationResult::Invalid(ValidationFailure::new(
                FailureKind::MissingValue,
                USER_EMPTY_MESSAGE,
            ));
        }

        let Some(age) = parse_whole_years(age) else {
            return ValidationResult::Invalid(ValidationFailure::new(
                FailureKind::OutOfRange,
                USER_AGE_MESSAGE,
            ));
        };

        ValidationResult::Valid(NewUser {
            username: username.to_string(),
            age,
        })
    }
}

/// Rules for the "new expense" form.
///
/// 1. Any of `title`, `amount`, `date` blank ⇒ missing-value message.
/// 2. `amount` not a decimal > 0 ⇒ amount message.
/// 3. `date` not `YYYY-MM-DD` ⇒ date message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseValidator;

impl Validator for ExpenseValidator {
    type Record = Expense;

    fn fields(&self) -> &'static [&'static str] {
        EXPENSE_FIELDS
    }

    fn validate(&self, snapshot: &FormSnapshot) -> ValidationResult<NewExpense> {
        let title = snapshot.get(TITLE_FIELD);
        let amount = snapshot.get(AMOUNT_FIELD);
        let date = snapshot.get(DATE_FIELD);

        if [title, amount, date].into_iter().any(is_blank) {
            return ValidationResult::Invalid(ValidationFailure::new(
                FailureKind::MissingValue,
                EXPENSE_EMPTY_MESSAGE,
            ));
        }

        let amount = match Decimal::from_str(amount.trim()) {
            Ok(value) if value > Decimal::ZERO => value,
            _ => {
                return ValidationResult::Invalid(ValidationFailure::new(
                    FailureKind::OutOfRange,
                    EXPENSE_AMOUNT_MESSAGE,
                ))
            }
        };

        let Some(date) = parse_iso_date(date) else {
            return ValidationResult::Invalid(ValidationFailure::new(
                FailureKind::BadFormat,
                EXPENSE_DATE_MESSAGE,
            ));
        };

        ValidationResult::Valid(NewExpense {
            title: title.to_string(),
            amount,
            date,
        })
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parses a zero-padded `YYYY-MM-DD` date.
///
/// chrono alone also takes `2020-1-5` and `+2020-01-01`, so the shape is
/// checked byte by byte first.
fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parses an age as a number and truncates it to whole years.
///
/// Returns `None` when the value is not a finite number or is below 1.
fn parse_whole_years(value: &str) -> Option<u32> {
    let parsed = value.trim().parse::<f64>().ok()?;
    if !parsed.is_finite() || parsed < 1.0 {
        return None;
    }
    // `as` saturates at u32::MAX.
    Some(parsed.trunc() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_snapshot(username: &str, age: &str) -> FormSnapshot {
        FormSnapshot::from([(USERNAME_FIELD, username), (AGE_FIELD, age)])
    }

    fn expense_snapshot(title: &str, amount: &str, date: &str) -> FormSnapshot {
        FormSnapshot::from([
            (TITLE_FIELD, title),
            (AMOUNT_FIELD, amount),
            (DATE_FIELD, date),
        ])
    }

    fn failure_message<T>(result: ValidationResult<T>) -> &'static str {
        match result {
            ValidationResult::Invalid(failure) => failure.message,
            ValidationResult::Valid(_) => panic!("expected invalid result"),
        }
    }

    #[test]
    fn blank_username_and_age_reports_missing_values() {
        let result = UserValidator.validate(&user_snapshot("", ""));
        assert_eq!(failure_message(result), USER_EMPTY_MESSAGE);
    }

    #[test]
    fn whitespace_only_username_is_blank() {
        let result = UserValidator.validate(&user_snapshot("   ", "28"));
        assert_eq!(failure_message(result), USER_EMPTY_MESSAGE);
    }

    #[test]
    fn empty_age_wins_over_range_check() {
        let result = UserValidator.validate(&user_snapshot("Max", " "));
        assert_eq!(failure_message(result), USER_EMPTY_MESSAGE);
    }

    #[test]
    fn zero_and_negative_age_report_range() {
        assert_eq!(
            failure_message(UserValidator.validate(&user_snapshot("Max", "0"))),
            USER_AGE_MESSAGE
        );
        assert_eq!(
            failure_message(UserValidator.validate(&user_snapshot("Max", "-3"))),
            USER_AGE_MESSAGE
        );
        assert_eq!(
            failure_message(UserValidator.validate(&user_snapshot("Max", "0.5"))),
            USER_AGE_MESSAGE
        );
    }

    #[test]
    fn non_numeric_age_reports_range() {
        let result = UserValidator.validate(&user_snapshot("Max", "abc"));
        match result {
            ValidationResult::Invalid(failure) => {
                assert_eq!(failure.kind, FailureKind::OutOfRange);
                assert_eq!(failure.message, USER_AGE_MESSAGE);
            }
            ValidationResult::Valid(_) => panic!("non-numeric age must fail"),
        }
    }

    #[test]
    fn valid_user_is_typed() {
        let result = UserValidator.validate(&user_snapshot("Max", "28"));
        assert_eq!(
            result,
            ValidationResult::Valid(NewUser {
                username: "Max".to_string(),
                age: 28,
            })
        );
    }

    #[test]
    fn fractional_age_is_truncated() {
        let result = UserValidator.validate(&user_snapshot("Max", " 2.7 "));
        match result {
            ValidationResult::Valid(user) => assert_eq!(user.age, 2),
            ValidationResult::Invalid(failure) => panic!("unexpected failure: {failure:?}"),
        }
    }

    #[test]
    fn oversized_age_clamps_to_u32_max() {
        let result = UserValidator.validate(&user_snapshot("Max", "4294967296"));
        match result {
            ValidationResult::Valid(user) => assert_eq!(user.age, 4_294_967_295),
            ValidationResult::Invalid(failure) => panic!("unexpected failure: {failure:?}"),
        }
    }

    #[test]
    fn hex_age_is_not_a_number() {
        let result = UserValidator.validate(&user_snapshot("Max", "0x10"));
        assert_eq!(failure_message(result), USER_AGE_MESSAGE);
    }

    #[test]
    fn expense_blank_fields_report_missing_values() {
        let snapshot = expense_snapshot("Rent", "", "2021-01-01");
        let result = ExpenseValidator.validate(&snapshot);
        assert_eq!(failure_message(result), EXPENSE_EMPTY_MESSAGE);
    }

    #[test]
    fn expense_amount_must_be_positive_decimal() {
        for amount in ["0", "-1.50", "lots"] {
            let snapshot = expense_snapshot("Rent", amount, "2021-01-01");
            let result = ExpenseValidator.validate(&snapshot);
            assert_eq!(failure_message(result), EXPENSE_AMOUNT_MESSAGE);
        }
    }

    #[test]
    fn expense_date_must_be_iso() {
        let snapshot = expense_snapshot("Rent", "12.50", "01/02/2021");
        let result = ExpenseValidator.validate(&snapshot);
        assert_eq!(failure_message(result), EXPENSE_DATE_MESSAGE);
    }

    #[test]
    fn expense_date_must_be_zero_padded_and_unsigned() {
        let malformed = [
            "2020-1-5",
            "+2020-01-01",
            "2020-01-1 ",
            "2020/01/01",
            "2020-02-30",
        ];
        for date in malformed {
            let snapshot = expense_snapshot("Rent", "12.50", date);
            let result = ExpenseValidator.validate(&snapshot);
            assert_eq!(failure_message(result), EXPENSE_DATE_MESSAGE, "{date}");
        }
    }

    #[test]
    fn expense_date_tolerates_surrounding_whitespace() {
        let snapshot = expense_snapshot("Rent", "12.50", " 2020-01-05 ");
        match ExpenseValidator.validate(&snapshot) {
            ValidationResult::Valid(expense) => {
                let expected = NaiveDate::from_ymd_opt(2020, 1, 5).expect("valid date");
                assert_eq!(expense.date, expected);
            }
            ValidationResult::Invalid(failure) => panic!("unexpected failure: {failure:?}"),
        }
    }

    #[test]
    fn valid_expense_is_typed() {
        let snapshot = expense_snapshot("Car Insurance", "297.48", "2021-03-28");
        let result = ExpenseValidator.validate(&snapshot);
        assert_eq!(
            result,
            ValidationResult::Valid(NewExpense {
                title: "Car Insurance".to_string(),
                amount: Decimal::new(29748, 2),
                date: NaiveDate::from_ymd_opt(2021, 3, 28).expect("valid date"),
            })
        );
    }

    #[test]
    fn failures_map_to_invalid_input_notification() {
        let failure = ValidationFailure::new(FailureKind::MissingValue, USER_EMPTY_MESSAGE);
        let notification = failure.to_notification();
        assert_eq!(notification.title, "Invalid input");
        assert_eq!(notification.message, USER_EMPTY_MESSAGE);
    }
}
