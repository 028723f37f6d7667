//! Submit-time orchestration.
//!
//! # Responsibility
//! - Validate the current draft, then either commit it or report a failure.
//!
//! # Invariants
//! - Validation finishes before any state container is touched.
//! - On success: one append, one form reset, notification cleared.
//! - On failure: only the notification changes; the draft is kept for editing.
//! - Only the store, form and notification passed in are mutated.

use crate::model::id::IdGenerator;
use crate::model::record::{Record, RecordId};
use crate::repo::record_store::RecordStore;
use crate::service::form::FormInputController;
use crate::service::notification::NotificationState;
use crate::service::validator::{ValidationFailure, ValidationResult, Validator};
use log::info;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A record with this id was appended.
    Committed(RecordId),
    /// The draft was rejected and a notification raised.
    Rejected(ValidationFailure),
}

/// Runs validate → commit/reject for one record kind.
#[derive(Debug, Clone)]
pub struct SubmissionCoordinator<V: Validator, G: IdGenerator> {
    validator: V,
    ids: G,
}

impl<V: Validator, G: IdGenerator> SubmissionCoordinator<V, G> {
    pub fn new(validator: V, ids: G) -> Self {
        Self { validator, ids }
    }

    /// Submits the current draft held by `form`.
    pub fn submit(
        &mut self,
        form: &mut FormInputController,
        store: &mut RecordStore<V::Record>,
        notifications: &mut NotificationState,
    ) -> SubmitOutcome {
        let snapshot = form.snapshot();
        match self.validator.validate(&snapshot) {
            ValidationResult::Valid(input) => {
                let id = self.ids.generate();
                store.append(V::Record::from_input(id, input));
                form.reset();
                notifications.clear();
                info!(
                    "event=submit_committed module=service status=ok kind={} id={} count={}",
                    V::Record::KIND,
                    id,
                    store.len()
                );
                SubmitOutcome::Committed(id)
            }
            ValidationResult::Invalid(failure) => {
                notifications.set(failure.to_notification());
                info!(
                    "event=submit_rejected module=service status=rejected kind={} reason={}",
                    V::Record::KIND,
                    failure.kind.as_str()
                );
                SubmitOutcome::Rejected(failure)
            }
        }
    }
}
