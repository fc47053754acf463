//! Text rendering of the order form surface.

use std::fmt;

use shared::{
    domain::{Size, SIZE_PLACEHOLDER, TOPPINGS},
    error::FormField,
};

use crate::controller::reducer::OrderFormController;

pub const FORM_TITLE: &str = "Order Your Pizza";

/// Borrowed view of the controller, rendered with `Display`.
pub struct FormView<'a> {
    form: &'a OrderFormController,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a OrderFormController) -> Self {
        Self { form }
    }
}

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draft = self.form.draft();
        let errors = self.form.errors();
        let outcome = self.form.outcome();

        writeln!(f, "== {FORM_TITLE} ==")?;
        if let Some(message) = outcome.success_message() {
            writeln!(f, "[success] {message}")?;
        }
        if let Some(message) = outcome.failure_message() {
            writeln!(f, "[failure] {message}")?;
        }

        writeln!(f, "Full Name: {}", display_or(&draft.full_name, "<Type full name>"))?;
        write_error(f, &errors.message(FormField::FullName))?;

        let size = match draft.selected_size() {
            Some(size) => format!("{} ({})", size.label(), size.code()),
            None => display_or(&draft.size, SIZE_PLACEHOLDER).to_string(),
        };
        writeln!(f, "Size: {size}")?;
        write!(f, "  options:")?;
        for size in Size::ALL {
            write!(f, " {}={}", size.code(), size.label())?;
        }
        writeln!(f)?;
        write_error(f, &errors.message(FormField::Size))?;

        writeln!(f, "Toppings:")?;
        for topping in TOPPINGS {
            let mark = if draft.toppings.contains(&topping) { 'x' } else { ' ' };
            writeln!(f, "  [{mark}] {} {}", topping.id(), topping.name())?;
        }

        let submit = if self.form.is_form_valid() {
            "enabled"
        } else {
            "disabled"
        };
        write!(f, "Submit: {submit}")
    }
}

fn display_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn write_error(f: &mut fmt::Formatter<'_>, message: &str) -> fmt::Result {
    if message.is_empty() {
        Ok(())
    } else {
        writeln!(f, "  ! {message}")
    }
}
