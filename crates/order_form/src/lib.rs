//! Order form controller: field validation, submit gating, and submission outcome.

pub mod controller;
pub mod draft;
pub mod validation;
pub mod view;

pub use controller::{
    events::{FormEffect, FormError, FormEvent, SubmissionOutcome, SubmissionResult},
    orchestration::run_submission,
    reducer::{OrderFormController, GENERIC_FAILURE_MESSAGE, GENERIC_SUCCESS_MESSAGE},
};
pub use draft::{OrderDraft, ValidationErrors};
pub use view::FormView;

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;
