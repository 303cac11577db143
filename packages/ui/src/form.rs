//! Signup form state and its reducer.
//!
//! Every input event becomes a [`FormMessage`] applied to [`FormState`]. Nothing
//! is validated while the user types; [`FormState::validate`] runs once, when
//! the form is submitted.

use api::RegisterRequest;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Changed(FormField, String),
    /// Shows or hides both password inputs at once.
    ToggleVisibility,
}

/// Local reasons to refuse a submission. The message doubles as the notice title.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please Fill all the Fields")]
    MissingFields,
    #[error("Passwords Do Not Match")]
    PasswordMismatch,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub password_visible: bool,
    /// Set while a registration request is in flight.
    pub submitting: bool,
}

impl FormState {
    pub fn apply(&mut self, message: FormMessage) {
        match message {
            FormMessage::Changed(field, value) => match field {
                FormField::Name => self.name = value,
                FormField::Email => self.email = value,
                FormField::Password => self.password = value,
                FormField::ConfirmPassword => self.confirm_password = value,
            },
            FormMessage::ToggleVisibility => self.password_visible = !self.password_visible,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Check the two submission rules in order and build the request body.
    ///
    /// Values are sent as typed; there are no format or strength rules.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let required = [
            FormField::Name,
            FormField::Email,
            FormField::Password,
            FormField::ConfirmPassword,
        ];
        if required.iter().any(|field| self.value(*field).is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
