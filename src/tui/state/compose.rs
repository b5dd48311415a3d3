//! Compose form state for the simulated email send flow.

use crate::registry::{EmailLogEntry, EmailTemplate, RegistryError};

/// Fallback when the template index is somehow out of range.
const CUSTOM_TEMPLATE: EmailTemplate = EmailTemplate {
    id: "custom",
    name: "Custom Message",
    subject: "",
    body: "",
};

/// The compose field currently receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    /// Recipient address.
    To,
    /// Subject line.
    Subject,
    /// Message body.
    Message,
}

impl ComposeField {
    /// Returns the next field in focus order, wrapping after the body.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::To => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::To,
        }
    }

    /// Returns the field label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::To => "To",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

/// Editable state of the compose form.
///
/// Templates pre-fill the subject and body; the blank "custom" template
/// clears them again. Selecting a template never touches the recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeForm {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Field currently receiving input.
    pub focus: ComposeField,
    /// Index into [`EmailTemplate::builtin`].
    pub template_index: usize,
}

impl Default for ComposeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposeForm {
    /// Creates a blank form on the custom template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            to: String::new(),
            subject: String::new(),
            message: String::new(),
            focus: ComposeField::To,
            template_index: EmailTemplate::builtin().len().saturating_sub(1),
        }
    }

    /// Creates a reply pre-filled from an existing log entry.
    ///
    /// The subject gains a single `Re: ` prefix (an existing one is not
    /// stacked) and the body quotes the original message header.
    #[must_use]
    pub fn reply_to(entry: &EmailLogEntry) -> Self {
        let base_subject = entry.subject.strip_prefix("Re: ").unwrap_or(&entry.subject);
        let message = format!(
            "\n\n--- Original Message ---\nTo: {}\nSubject: {}\nDate: {}\n",
            entry.recipient,
            entry.subject,
            entry.date.format("%Y-%m-%d %H:%M"),
        );
        Self {
            to: entry.recipient.clone(),
            subject: format!("Re: {base_subject}"),
            message,
            focus: ComposeField::Message,
            template_index: EmailTemplate::builtin().len().saturating_sub(1),
        }
    }

    /// Returns the currently selected template.
    #[must_use]
    pub fn template(&self) -> &'static EmailTemplate {
        let templates = EmailTemplate::builtin();
        templates
            .get(self.template_index)
            .or_else(|| templates.last())
            .unwrap_or(&CUSTOM_TEMPLATE)
    }

    /// Appends a character to the focused field.
    pub fn push_char(&mut self, ch: char) {
        self.focused_field_mut().push(ch);
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_field_mut().pop();
    }

    /// Moves focus to the next field.
    pub const fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Advances to the next template and applies its subject and body.
    ///
    /// Non-blank templates overwrite the subject and message; the blank
    /// custom template clears both so the admin can start over.
    pub fn cycle_template(&mut self) {
        let templates = EmailTemplate::builtin();
        if templates.is_empty() {
            return;
        }
        self.template_index = (self.template_index + 1) % templates.len();
        if let Some(template) = templates.get(self.template_index) {
            self.subject = template.subject.to_owned();
            self.message = template.body.to_owned();
        }
    }

    /// Checks that every field has content before a send.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingField`] naming the first empty
    /// field, checked in display order.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.to.trim().is_empty() {
            return Err(RegistryError::MissingField { field: "Recipient" });
        }
        if self.subject.trim().is_empty() {
            return Err(RegistryError::MissingField { field: "Subject" });
        }
        if self.message.trim().is_empty() {
            return Err(RegistryError::MissingField { field: "Message" });
        }
        Ok(())
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            ComposeField::To => &mut self.to,
            ComposeField::Subject => &mut self.subject,
            ComposeField::Message => &mut self.message,
        }
    }
}
