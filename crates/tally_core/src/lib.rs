//! Core state logic for the tally forms.
//! This crate owns record storage, draft validation, filtered views and
//! notifications; presentation layers only send events and render state.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig, LoggingConfig};
pub use logging::{
    default_log_level, init_from_config, init_logging, logging_status, LoggingError,
};
pub use model::expense::{Dated, Expense, NewExpense};
pub use model::id::{IdGenerator, SequentialIdGenerator, UuidV7Generator};
pub use model::notification::{Notification, INVALID_INPUT_TITLE};
pub use model::record::{Record, RecordId};
pub use model::user::{NewUser, User};
pub use repo::record_store::{RecordStore, StoreError, StoreResult};
pub use service::flow::{
    DispatchError, DispatchOutcome, EntryFlow, ExpensesFlow, UiEvent, UsersFlow,
};
pub use service::form::{FormError, FormInputController, FormSnapshot};
pub use service::notification::NotificationState;
pub use service::submission::{SubmissionCoordinator, SubmitOutcome};
pub use service::validator::{
    ExpenseValidator, FailureKind, UserValidator, ValidationFailure, ValidationResult, Validator,
};
pub use service::view_filter::{available_years, filter_by_year, FilterError, YearFilter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
