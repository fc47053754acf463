//! Per-field validation rules. Each rule is a pure function of the raw value.

use shared::{domain::Size, error::FormField, error::ValidationError};

use crate::draft::OrderDraft;

pub const FULL_NAME_MIN_CHARS: usize = 3;
pub const FULL_NAME_MAX_CHARS: usize = 20;

/// Length is counted in characters, and the name is checked as typed.
pub fn validate_full_name(raw: &str) -> Option<ValidationError> {
    let len = raw.chars().count();
    if len < FULL_NAME_MIN_CHARS {
        Some(ValidationError::FullNameTooShort)
    } else if len > FULL_NAME_MAX_CHARS {
        Some(ValidationError::FullNameTooLong)
    } else {
        None
    }
}

pub fn validate_size(raw: &str) -> Option<ValidationError> {
    match raw.parse::<Size>() {
        Ok(_) => None,
        Err(_) => Some(ValidationError::SizeIncorrect),
    }
}

pub fn validate_field(field: FormField, raw: &str) -> Option<ValidationError> {
    match field {
        FormField::FullName => validate_full_name(raw),
        FormField::Size => validate_size(raw),
    }
}

/// Whether every validated field of `draft` passes. Toppings are unconstrained.
pub fn is_valid(draft: &OrderDraft) -> bool {
    FormField::ALL
        .into_iter()
        .all(|field| validate_field(field, draft.field(field)).is_none())
}
