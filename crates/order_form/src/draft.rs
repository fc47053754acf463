use std::collections::{BTreeMap, BTreeSet};

use shared::{
    domain::{Size, ToppingId},
    error::{FormField, ValidationError},
    protocol::OrderRequest,
};

/// The in-progress order held by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub full_name: String,
    /// Raw select value; empty while the placeholder is selected.
    pub size: String,
    pub toppings: BTreeSet<ToppingId>,
}

impl OrderDraft {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Size => &self.size,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Size => self.size = value,
        }
    }

    pub fn set_topping(&mut self, id: ToppingId, checked: bool) {
        if checked {
            self.toppings.insert(id);
        } else {
            self.toppings.remove(&id);
        }
    }

    pub fn selected_size(&self) -> Option<Size> {
        self.size.parse().ok()
    }

    /// Wire form of the draft, or `None` while the size is not one of S/M/L.
    pub fn to_request(&self) -> Option<OrderRequest> {
        Some(OrderRequest {
            full_name: self.full_name.clone(),
            size: self.selected_size()?,
            toppings: self.toppings.clone(),
        })
    }
}

/// Field name to message; a field with no entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<FormField, ValidationError>,
}

impl ValidationErrors {
    /// The message for `field`, or an empty string.
    pub fn message(&self, field: FormField) -> String {
        self.messages
            .get(&field)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn get(&self, field: FormField) -> Option<ValidationError> {
        self.messages.get(&field).copied()
    }

    pub fn set(&mut self, field: FormField, error: Option<ValidationError>) {
        match error {
            Some(error) => {
                self.messages.insert(field, error);
            }
            None => {
                self.messages.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
