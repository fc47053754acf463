//! Form events, effects, and error modeling for the order form controller.

use client_core::SubmitError;
use shared::{
    domain::{ToppingId, UnknownTopping},
    error::{FormField, UnknownField},
    protocol::{OrderRequest, OrderResponse},
};
use thiserror::Error;

pub type SubmissionResult = Result<OrderResponse, SubmitError>;

#[derive(Debug)]
pub enum FormEvent {
    FieldChanged { field: FormField, value: String },
    ToppingToggled { id: ToppingId, checked: bool },
    SubmitRequested,
    SubmissionResolved(SubmissionResult),
}

impl FormEvent {
    /// Builds a field change from a raw field name such as `"fullName"`.
    pub fn field_changed(field: &str, value: impl Into<String>) -> Result<Self, FormError> {
        Ok(FormEvent::FieldChanged {
            field: field.parse()?,
            value: value.into(),
        })
    }

    /// Builds a topping toggle from a raw catalog id such as `"3"`.
    pub fn topping_toggled(id: &str, checked: bool) -> Result<Self, FormError> {
        Ok(FormEvent::ToppingToggled {
            id: id.parse()?,
            checked,
        })
    }
}

/// Work the caller must carry out after applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    Submit(OrderRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    #[error(transparent)]
    UnknownTopping(#[from] UnknownTopping),
}

/// Last known result of submitting the order. Only one status region shows at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    None,
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn success_message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Success(message) => Some(message),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Failure(message) => Some(message),
            _ => None,
        }
    }
}
