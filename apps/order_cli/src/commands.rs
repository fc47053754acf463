//! Line commands typed into the interactive form.

use order_form::{FormError, FormEvent};
use shared::error::FormField;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  name <text>            set the full name
  size <S|M|L>           choose a size
  topping <1-5> on|off   check or uncheck a topping
  set <field> <value>    set a field by name (fullName, size)
  submit                 place the order
  show                   redraw the form
  help                   show this help
  quit                   leave";

#[derive(Debug)]
pub enum Command {
    Event(FormEvent),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' for a list")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("expected 'on' or 'off', got '{0}'")]
    InvalidToggle(String),
    #[error(transparent)]
    Form(#[from] FormError),
}

/// `None` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let trimmed = line.trim_start();
    let (verb, rest) = match trimmed.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };

    let command = match verb {
        "name" => Command::Event(FormEvent::FieldChanged {
            field: FormField::FullName,
            value: rest.to_string(),
        }),
        "size" => Command::Event(FormEvent::FieldChanged {
            field: FormField::Size,
            value: rest.to_string(),
        }),
        "set" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            if field.is_empty() {
                return Err(CommandError::MissingArgument("set"));
            }
            Command::Event(FormEvent::field_changed(field, value)?)
        }
        "topping" => {
            let mut args = rest.split_whitespace();
            let id = args.next().ok_or(CommandError::MissingArgument("topping"))?;
            let checked = match args.next() {
                Some("on") | None => true,
                Some("off") => false,
                Some(other) => return Err(CommandError::InvalidToggle(other.to_string())),
            };
            Command::Event(FormEvent::topping_toggled(id, checked)?)
        }
        "submit" => Command::Event(FormEvent::SubmitRequested),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
