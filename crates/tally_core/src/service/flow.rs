//! Event-driven flows consumed by a presentation layer.
//!
//! # Responsibility
//! - Translate typed UI events into core operations.
//! - Expose the state a presentation layer re-renders after every event.
//!
//! # Invariants
//! - Every event runs to completion synchronously.
//! - Validation failures surface through `notification()`, never as `Err`.
//! - `Err(DispatchError)` means the caller sent an event the flow cannot
//!   honor; no state is changed in that case.

use crate::config::CoreConfig;
use crate::model::expense::Expense;
use crate::model::id::{IdGenerator, UuidV7Generator};
use crate::model::notification::Notification;
use crate::repo::record_store::RecordStore;
use crate::service::form::{FormError, FormInputController, FormSnapshot};
use crate::service::notification::NotificationState;
use crate::service::submission::{SubmissionCoordinator, SubmitOutcome};
use crate::service::validator::{ExpenseValidator, UserValidator, Validator};
use crate::service::view_filter::{available_years, FilterError, YearFilter};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw user action delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    FieldChanged { field: String, value: String },
    SubmitRequested,
    FilterChanged(String),
    NotificationDismissed,
    FormOpened,
    FormClosed,
}

impl UiEvent {
    pub fn field_changed(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldChanged {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Stable event label used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FieldChanged { .. } => "field_changed",
            Self::SubmitRequested => "submit_requested",
            Self::FilterChanged(_) => "filter_changed",
            Self::NotificationDismissed => "notification_dismissed",
            Self::FormOpened => "form_opened",
            Self::FormClosed => "form_closed",
        }
    }
}

/// What a successfully dispatched event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    FieldUpdated,
    Submitted(SubmitOutcome),
    NotificationDismissed,
    FilterChanged(i32),
    FormOpened,
    FormClosed,
}

/// Events a flow refused to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Field name not declared by the flow's form.
    Form(FormError),
    /// Filter text is not a valid criterion.
    Filter(FilterError),
    /// The flow has no handler for this event.
    Unsupported(&'static str),
    /// Form input arrived while the form is hidden.
    FormClosed(&'static str),
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{err}"),
            Self::Filter(err) => write!(f, "{err}"),
            Self::Unsupported(event) => write!(f, "event not supported by this flow: {event}"),
            Self::FormClosed(event) => write!(f, "form is closed; cannot apply {event}"),
        }
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            Self::Filter(err) => Some(err),
            Self::Unsupported(_) | Self::FormClosed(_) => None,
        }
    }
}

impl From<FormError> for DispatchError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<FilterError> for DispatchError {
    fn from(value: FilterError) -> Self {
        Self::Filter(value)
    }
}

/// Form + store + notification wiring for one record kind.
#[derive(Debug, Clone)]
pub struct EntryFlow<V: Validator, G: IdGenerator> {
    store: RecordStore<V::Record>,
    form: FormInputController,
    notifications: NotificationState,
    coordinator: SubmissionCoordinator<V, G>,
}

/// "Add user" flow.
pub type UsersFlow<G = UuidV7Generator> = EntryFlow<UserValidator, G>;

impl<V: Validator, G: IdGenerator> EntryFlow<V, G> {
    pub fn new(validator: V, ids: G) -> Self {
        let form = FormInputController::new(validator.fields());
        Self {
            store: RecordStore::new(),
            form,
            notifications: NotificationState::new(),
            coordinator: SubmissionCoordinator::new(validator, ids),
        }
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Result<DispatchOutcome, DispatchError> {
        match event {
            UiEvent::FieldChanged { field, value } => {
                self.change_field(&field, value)?;
                Ok(DispatchOutcome::FieldUpdated)
            }
            UiEvent::SubmitRequested => Ok(DispatchOutcome::Submitted(self.submit())),
            UiEvent::NotificationDismissed => {
                self.dismiss_notification();
                Ok(DispatchOutcome::NotificationDismissed)
            }
            other => Err(DispatchError::Unsupported(other.name())),
        }
    }

    pub fn change_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.form.set_field(field, value)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.coordinator
            .submit(&mut self.form, &mut self.store, &mut self.notifications)
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.clear();
    }

    /// Drops the draft without submitting it.
    pub fn discard_draft(&mut self) {
        self.form.reset();
    }

    pub fn records(&self) -> &[V::Record] {
        self.store.all()
    }

    pub fn draft(&self) -> FormSnapshot {
        self.form.snapshot()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }
}

impl UsersFlow {
    /// User flow with time-ordered UUID ids.
    pub fn users() -> Self {
        Self::new(UserValidator, UuidV7Generator)
    }
}

/// "Expenses" flow: entry form behind an open/close toggle plus a year filter.
#[derive(Debug, Clone)]
pub struct ExpensesFlow<G: IdGenerator = UuidV7Generator> {
    entry: EntryFlow<ExpenseValidator, G>,
    filter: YearFilter,
    form_open: bool,
}

impl<G: IdGenerator> ExpensesFlow<G> {
    /// Starts with the form closed and the filter on `filter`.
    pub fn new(ids: G, filter: YearFilter) -> Self {
        Self {
            entry: EntryFlow::new(ExpenseValidator, ids),
            filter,
            form_open: false,
        }
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Result<DispatchOutcome, DispatchError> {
        match event {
            UiEvent::FilterChanged(value) => {
                let year = self.change_filter(&value)?;
                Ok(DispatchOutcome::FilterChanged(year))
            }
            UiEvent::FormOpened => {
                self.open_form();
                Ok(DispatchOutcome::FormOpened)
            }
            UiEvent::FormClosed => {
                self.close_form();
                Ok(DispatchOutcome::FormClosed)
            }
            UiEvent::NotificationDismissed => self.entry.dispatch(event),
            form_event if !self.form_open => Err(DispatchError::FormClosed(form_event.name())),
            form_event => self.entry.dispatch(form_event),
        }
    }

    /// Parses and applies a new year criterion; keeps the old one on error.
    pub fn change_filter(&mut self, value: &str) -> Result<i32, FilterError> {
        let parsed = YearFilter::parse(value)?;
        self.filter = parsed;
        debug!(
            "event=filter_changed module=service status=ok year={}",
            parsed.year()
        );
        Ok(parsed.year())
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Hides the form and drops its draft.
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.entry.discard_draft();
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn filter(&self) -> YearFilter {
        self.filter
    }

    /// Stored expenses matching the current year, in store order.
    pub fn filtered(&self) -> Vec<&Expense> {
        self.filter.apply(self.entry.records())
    }

    pub fn available_years(&self) -> Vec<i32> {
        available_years(self.entry.records())
    }

    pub fn records(&self) -> &[Expense] {
        self.entry.records()
    }

    pub fn draft(&self) -> FormSnapshot {
        self.entry.draft()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.entry.notification()
    }
}

impl ExpensesFlow {
    /// Expenses flow with time-ordered UUID ids and the default year.
    pub fn expenses() -> Self {
        Self::new(UuidV7Generator, YearFilter::default())
    }

    /// Expenses flow starting on `config.default_filter_year`.
    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(UuidV7Generator, YearFilter::new(config.default_filter_year))
    }
}
