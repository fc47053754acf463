//! State transitions for the order form. Every mutation goes through [`OrderFormController::apply`].

use shared::{domain::ToppingId, error::FormField, protocol::OrderRequest};
use tracing::{debug, info, warn};

use crate::{
    controller::events::{FormEffect, FormEvent, SubmissionOutcome, SubmissionResult},
    draft::{OrderDraft, ValidationErrors},
    validation,
};

pub const GENERIC_SUCCESS_MESSAGE: &str = "order placed";
pub const GENERIC_FAILURE_MESSAGE: &str = "order could not be placed; please try again";

#[derive(Debug, Clone, Default)]
pub struct OrderFormController {
    draft: OrderDraft,
    errors: ValidationErrors,
    outcome: SubmissionOutcome,
    submit_enabled: bool,
}

impl OrderFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    /// Drives the submit control. Kept in step with the draft on every change.
    pub fn is_form_valid(&self) -> bool {
        self.submit_enabled
    }

    pub fn apply(&mut self, event: FormEvent) -> Option<FormEffect> {
        match event {
            FormEvent::FieldChanged { field, value } => {
                self.on_field_change(field, value);
                None
            }
            FormEvent::ToppingToggled { id, checked } => {
                self.on_topping_toggle(id, checked);
                None
            }
            FormEvent::SubmitRequested => self.begin_submit().map(FormEffect::Submit),
            FormEvent::SubmissionResolved(result) => {
                self.complete_submit(result);
                None
            }
        }
    }

    pub fn on_field_change(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let error = validation::validate_field(field, &value);
        debug!(%field, valid = error.is_none(), "form: field changed");
        self.draft.set_field(field, value);
        self.errors.set(field, error);
        self.revalidate();
    }

    pub fn on_topping_toggle(&mut self, id: ToppingId, checked: bool) {
        debug!(topping = id.id(), checked, "form: topping toggled");
        self.draft.set_topping(id, checked);
        self.revalidate();
    }

    /// Snapshot of the draft to send, or `None` when the form is not valid.
    pub fn begin_submit(&self) -> Option<OrderRequest> {
        if !self.submit_enabled {
            debug!("form: submit ignored while form is invalid");
            return None;
        }
        self.draft.to_request()
    }

    pub fn complete_submit(&mut self, result: SubmissionResult) {
        match result {
            Ok(response) => {
                let message = non_empty(response.message)
                    .unwrap_or_else(|| GENERIC_SUCCESS_MESSAGE.to_string());
                info!(%message, "form: order placed");
                self.outcome = SubmissionOutcome::Success(message);
                self.draft = OrderDraft::default();
                self.errors.clear();
                self.revalidate();
            }
            Err(err) => {
                let message = non_empty(err.server_message().map(str::to_string))
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
                warn!(error = %err, %message, "form: order failed");
                self.outcome = SubmissionOutcome::Failure(message);
            }
        }
    }

    fn revalidate(&mut self) {
        self.submit_enabled = validation::is_valid(&self.draft);
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|message| !message.trim().is_empty())
}
