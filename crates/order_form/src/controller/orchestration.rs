//! Runs submit effects against an order intake.

use client_core::OrderIntake;
use shared::protocol::OrderRequest;

use crate::controller::{
    events::{FormEvent, SubmissionResult},
    reducer::OrderFormController,
};

pub async fn run_submission(intake: &dyn OrderIntake, request: OrderRequest) -> SubmissionResult {
    intake.place_order(&request).await
}

impl OrderFormController {
    /// Submits in place and waits for the response. Returns whether a request was sent.
    pub async fn submit(&mut self, intake: &dyn OrderIntake) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let result = run_submission(intake, request).await;
        self.apply(FormEvent::SubmissionResolved(result));
        true
    }
}
