//! Contact form validation and local submission state.
//!
//! Nothing is sent anywhere: a valid submission clears the form and shows a
//! transient notice. The notice timer is owned by the component.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),

    #[error("{0} address is invalid")]
    InvalidFormat(Field),
}

/// Failing fields only; empty means the form is valid.
pub type ErrorMap = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

pub fn validate(form: &ContactForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if form.name.is_empty() {
        errors.insert(Field::Name, FieldError::Required(Field::Name));
    }
    if form.email.is_empty() {
        errors.insert(Field::Email, FieldError::Required(Field::Email));
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, FieldError::InvalidFormat(Field::Email));
    }
    if form.message.is_empty() {
        errors.insert(Field::Message, FieldError::Required(Field::Message));
    }
    errors
}

/// Everything the contact component renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: ErrorMap,
    pub notice_visible: bool,
}

impl ContactState {
    /// Update a field; editing clears that field's error.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Validate and, if clean, clear the form and show the notice.
    ///
    /// Returns the submitted form on success. The caller arms the timer that
    /// ends in [`ContactState::hide_notice`].
    pub fn submit(&mut self) -> Result<ContactForm, ErrorMap> {
        let errors = validate(&self.form);
        if !errors.is_empty() {
            tracing::debug!(failing = errors.len(), "contact form rejected");
            self.errors = errors.clone();
            return Err(errors);
        }
        let sent = std::mem::take(&mut self.form);
        self.errors.clear();
        self.notice_visible = true;
        tracing::info!(name = %sent.name, email = %sent.email, "contact form submitted");
        Ok(sent)
    }

    pub fn hide_notice(&mut self) {
        self.notice_visible = false;
    }
}
