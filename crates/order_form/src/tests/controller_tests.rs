use std::sync::Mutex;

use async_trait::async_trait;
use client_core::{OrderIntake, SubmitError};
use reqwest::StatusCode;
use shared::{
    domain::{Size, ToppingId},
    error::{FormField, ValidationError},
    protocol::{OrderRequest, OrderResponse},
};

use crate::{
    FormEffect, FormError, FormEvent, OrderDraft, OrderFormController, SubmissionOutcome,
    GENERIC_FAILURE_MESSAGE, GENERIC_SUCCESS_MESSAGE,
};

enum Reply {
    Accept(Option<&'static str>),
    Reject(StatusCode, Option<&'static str>),
    Garbage,
}

struct FakeIntake {
    reply: Reply,
    received: Mutex<Vec<OrderRequest>>,
}

impl FakeIntake {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            received: Mutex::new(Vec::new()),
        }
    }

    fn received(&self) -> Vec<OrderRequest> {
        self.received.lock().expect("lock").clone()
    }
}

#[async_trait]
impl OrderIntake for FakeIntake {
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, SubmitError> {
        self.received.lock().expect("lock").push(order.clone());
        match &self.reply {
            Reply::Accept(message) => Ok(OrderResponse {
                message: message.map(str::to_string),
            }),
            Reply::Reject(status, message) => Err(SubmitError::Rejected {
                status: *status,
                message: message.map(str::to_string),
            }),
            Reply::Garbage => Err(SubmitError::MalformedResponse {
                status: StatusCode::OK,
                source: serde_json::from_str::<OrderResponse>("<html>")
                    .expect_err("not json"),
            }),
        }
    }
}

fn filled_form() -> OrderFormController {
    let mut form = OrderFormController::new();
    form.on_field_change(FormField::FullName, "Alice");
    form.on_field_change(FormField::Size, "M");
    form.on_topping_toggle(ToppingId::Pepperoni, true);
    form.on_topping_toggle(ToppingId::Pineapple, true);
    form
}

fn alice_draft() -> OrderDraft {
    OrderDraft {
        full_name: "Alice".to_string(),
        size: "M".to_string(),
        toppings: [ToppingId::Pepperoni, ToppingId::Pineapple]
            .into_iter()
            .collect(),
    }
}

#[test]
fn fresh_form_is_invalid_without_visible_errors() {
    let form = OrderFormController::new();
    assert!(!form.is_form_valid());
    assert!(form.errors().is_empty());
    assert_eq!(form.outcome(), &SubmissionOutcome::None);
    assert_eq!(form.draft(), &OrderDraft::default());
}

#[test]
fn short_name_and_empty_size_populate_both_errors() {
    let mut form = OrderFormController::new();
    form.on_field_change(FormField::FullName, "Al");
    form.on_field_change(FormField::Size, "");

    assert!(!form.is_form_valid());
    assert_eq!(
        form.errors().message(FormField::FullName),
        "full name must be at least 3 characters"
    );
    assert_eq!(form.errors().message(FormField::Size), "size must be S or M or L");
}

#[test]
fn fixing_a_field_clears_only_its_error() {
    let mut form = OrderFormController::new();
    form.on_field_change(FormField::FullName, "A very long name indeed");
    form.on_field_change(FormField::Size, "XL");
    assert_eq!(
        form.errors().get(FormField::FullName),
        Some(ValidationError::FullNameTooLong)
    );

    form.on_field_change(FormField::FullName, "Alice");
    assert_eq!(form.errors().message(FormField::FullName), "");
    assert_eq!(
        form.errors().get(FormField::Size),
        Some(ValidationError::SizeIncorrect)
    );
    assert!(!form.is_form_valid());

    form.on_field_change(FormField::Size, "S");
    assert!(form.errors().is_empty());
    assert!(form.is_form_valid());
}

#[test]
fn validity_ignores_toppings() {
    let mut form = OrderFormController::new();
    form.on_field_change(FormField::FullName, "Bob");
    form.on_field_change(FormField::Size, "L");
    assert!(form.is_form_valid());

    for topping in shared::domain::TOPPINGS {
        form.on_topping_toggle(topping, true);
        assert!(form.is_form_valid());
    }
    for topping in shared::domain::TOPPINGS {
        form.on_topping_toggle(topping, false);
    }
    assert!(form.is_form_valid());
    assert!(form.draft().toppings.is_empty());
}

#[test]
fn topping_toggle_round_trip_restores_draft() {
    let mut form = filled_form();
    let before = form.draft().clone();

    form.on_topping_toggle(ToppingId::Ham, true);
    assert!(form.draft().toppings.contains(&ToppingId::Ham));
    form.on_topping_toggle(ToppingId::Ham, false);

    assert_eq!(form.draft(), &before);
}

#[test]
fn raw_events_reject_unknown_names() {
    assert!(matches!(
        FormEvent::field_changed("fullname", "Alice"),
        Err(FormError::UnknownField(_))
    ));
    assert!(matches!(
        FormEvent::topping_toggled("6", true),
        Err(FormError::UnknownTopping(_))
    ));

    let mut form = OrderFormController::new();
    let event = FormEvent::field_changed("size", "M").expect("event");
    assert_eq!(form.apply(event), None);
    assert_eq!(form.draft().selected_size(), Some(Size::Medium));
}

#[test]
fn submit_request_is_suppressed_while_invalid() {
    let mut form = OrderFormController::new();
    form.on_field_change(FormField::FullName, "Alice");
    assert_eq!(form.apply(FormEvent::SubmitRequested), None);

    form.on_field_change(FormField::Size, "M");
    let effect = form.apply(FormEvent::SubmitRequested).expect("effect");
    let FormEffect::Submit(request) = effect;
    assert_eq!(request.full_name, "Alice");
    assert_eq!(request.size, Size::Medium);
}

#[tokio::test]
async fn accepted_order_shows_server_message_and_resets_draft() {
    let intake = FakeIntake::new(Reply::Accept(Some("Order placed")));
    let mut form = filled_form();

    assert!(form.submit(&intake).await);

    assert_eq!(
        form.outcome(),
        &SubmissionOutcome::Success("Order placed".to_string())
    );
    assert_eq!(form.draft(), &OrderDraft::default());
    assert!(!form.is_form_valid());

    let received = intake.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0], alice_draft().to_request().expect("request"));
}

#[tokio::test]
async fn rejected_order_shows_server_message_and_keeps_draft() {
    let intake = FakeIntake::new(Reply::Reject(StatusCode::BAD_REQUEST, Some("Out of stock")));
    let mut form = filled_form();

    assert!(form.submit(&intake).await);

    assert_eq!(
        form.outcome(),
        &SubmissionOutcome::Failure("Out of stock".to_string())
    );
    assert_eq!(form.draft(), &alice_draft());
    assert!(form.is_form_valid());
}

#[tokio::test]
async fn rejection_without_message_uses_generic_failure() {
    let intake = FakeIntake::new(Reply::Reject(StatusCode::INTERNAL_SERVER_ERROR, None));
    let mut form = filled_form();

    form.submit(&intake).await;

    assert_eq!(form.outcome().failure_message(), Some(GENERIC_FAILURE_MESSAGE));
    assert_eq!(form.draft(), &alice_draft());
}

#[tokio::test]
async fn malformed_response_degrades_to_generic_failure() {
    let intake = FakeIntake::new(Reply::Garbage);
    let mut form = filled_form();

    form.submit(&intake).await;

    assert_eq!(form.outcome().failure_message(), Some(GENERIC_FAILURE_MESSAGE));
    assert_eq!(form.draft(), &alice_draft());
}

#[tokio::test]
async fn acceptance_without_message_uses_generic_success() {
    let intake = FakeIntake::new(Reply::Accept(None));
    let mut form = filled_form();

    form.submit(&intake).await;

    assert_eq!(form.outcome().success_message(), Some(GENERIC_SUCCESS_MESSAGE));
}

#[tokio::test]
async fn invalid_form_never_reaches_intake() {
    let intake = FakeIntake::new(Reply::Accept(Some("Order placed")));
    let mut form = OrderFormController::new();
    form.on_field_change(FormField::FullName, "Al");
    form.on_field_change(FormField::Size, "M");

    assert!(!form.submit(&intake).await);
    assert!(intake.received().is_empty());
    assert_eq!(form.outcome(), &SubmissionOutcome::None);
}

#[tokio::test]
async fn each_outcome_replaces_the_previous_one() {
    let mut form = filled_form();

    form.submit(&FakeIntake::new(Reply::Reject(StatusCode::BAD_REQUEST, Some("Out of stock"))))
        .await;
    assert!(form.outcome().success_message().is_none());

    form.submit(&FakeIntake::new(Reply::Accept(Some("Order placed"))))
        .await;
    assert_eq!(form.outcome().success_message(), Some("Order placed"));
    assert!(form.outcome().failure_message().is_none());
}

#[test]
fn last_resolved_submission_wins() {
    let mut form = filled_form();
    let first = form.begin_submit().expect("first");
    let second = form.begin_submit().expect("second");
    assert_eq!(first, second);

    form.apply(FormEvent::SubmissionResolved(Ok(OrderResponse::new("Order placed"))));
    form.apply(FormEvent::SubmissionResolved(Err(SubmitError::Rejected {
        status: StatusCode::CONFLICT,
        message: Some("Duplicate order".to_string()),
    })));

    assert_eq!(
        form.outcome(),
        &SubmissionOutcome::Failure("Duplicate order".to_string())
    );
    assert_eq!(form.draft(), &OrderDraft::default());
}
