//! Compose form component for the simulated email send flow.

use crate::tui::state::{ComposeField, ComposeForm};

/// Context for rendering the compose form.
#[derive(Debug, Clone)]
pub struct ComposeFormViewContext<'a> {
    /// The form being edited.
    pub form: &'a ComposeForm,
    /// Whether a simulated send is in flight.
    pub sending: bool,
}

/// Renders the compose form with a focus marker on the active field.
#[must_use]
pub fn view(ctx: &ComposeFormViewContext<'_>) -> String {
    let form = ctx.form;
    let mut output = String::from("Compose Email\n\n");
    output.push_str(&format!(
        "Template: {} (F2 to change)\n\n",
        form.template().name
    ));

    output.push_str(&field_row(form, ComposeField::To, &form.to));
    output.push_str(&field_row(form, ComposeField::Subject, &form.subject));
    output.push_str(&format!(
        "{} {}:\n",
        focus_marker(form, ComposeField::Message),
        ComposeField::Message.label()
    ));
    for line in form.message.lines() {
        output.push_str(&format!("    {line}\n"));
    }
    if form.message.is_empty() {
        output.push('\n');
    }

    output.push('\n');
    if ctx.sending {
        output.push_str("Sending...\n");
    } else {
        output.push_str("Tab:next field  F2:template  Enter:send  Esc:cancel\n");
    }
    output
}

fn field_row(form: &ComposeForm, field: ComposeField, value: &str) -> String {
    format!("{} {:<8} {value}\n", focus_marker(form, field), format!("{}:", field.label()))
}

fn focus_marker(form: &ComposeForm, field: ComposeField) -> &'static str {
    if form.focus == field { ">" } else { " " }
}
