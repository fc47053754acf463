use std::fmt;

use thiserror::Error;

/// A form field that carries a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    FullName,
    Size,
}

impl FormField {
    pub const ALL: [FormField; 2] = [FormField::FullName, FormField::Size];

    pub fn name(self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Size => "size",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl std::str::FromStr for FormField {
    type Err = UnknownField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == raw)
            .ok_or_else(|| UnknownField(raw.to_string()))
    }
}

/// Human-readable reason a field value was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("full name must be at least 3 characters")]
    FullNameTooShort,
    #[error("full name must be at most 20 characters")]
    FullNameTooLong,
    #[error("size must be S or M or L")]
    SizeIncorrect,
}

impl ValidationError {
    pub fn field(self) -> FormField {
        match self {
            ValidationError::FullNameTooShort | ValidationError::FullNameTooLong => {
                FormField::FullName
            }
            ValidationError::SizeIncorrect => FormField::Size,
        }
    }
}
