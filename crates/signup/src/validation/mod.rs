// File: src/validation/mod.rs
// Purpose: Validation runtime, validator trait and error taxonomy

use crate::field::Field;
use crate::form::{ErrorSet, FieldSet};
use signup_validation::LengthViolation;

pub mod rules;

pub use rules::{USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH};

/// Trait for types that can be validated as a whole
pub trait Validate {
    /// Returns Ok(()) if valid, or Err with the errors keyed by field
    fn validate(&self) -> Result<(), ErrorSet>;
}

impl Validate for FieldSet {
    fn validate(&self) -> Result<(), ErrorSet> {
        let errors = validate(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A validation failure attached to one field.
///
/// `Display` renders the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", required_message(.0))]
    Required(Field),

    #[error("{}", length_message(.field, .violation))]
    LengthBound {
        field: Field,
        violation: LengthViolation,
    },

    #[error("{}", .0.message())]
    FormatInvalid(Format),

    /// The confirmation differs from the password
    #[error("Passwords must match")]
    MatchMismatch,
}

/// Value shapes checked by a format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    Password,
}

impl Format {
    pub fn field(self) -> Field {
        match self {
            Format::Email => Field::Email,
            Format::Password => Field::Password,
        }
    }

    fn message(self) -> &'static str {
        match self {
            Format::Email => "Enter a valid email",
            Format::Password => "Must Contain 5 Characters, One Uppercase, One Lowercase, One Number",
        }
    }
}

impl ValidationError {
    /// The field this error belongs to
    pub fn field(&self) -> Field {
        match *self {
            ValidationError::Required(field) => field,
            ValidationError::LengthBound { field, .. } => field,
            ValidationError::FormatInvalid(format) => format.field(),
            ValidationError::MatchMismatch => Field::ConfirmPassword,
        }
    }
}

fn required_message(field: &Field) -> String {
    match field {
        Field::ConfirmPassword => "Password confirmation is required".to_string(),
        other => format!("{} is required", other.label()),
    }
}

fn length_message(field: &Field, violation: &LengthViolation) -> String {
    match *violation {
        LengthViolation::TooShort { min } => {
            format!("{} should be of minimum {} characters length", field.label(), min)
        }
        LengthViolation::TooLong { max } => {
            format!("{} should be of maximum {} characters length", field.label(), max)
        }
    }
}

/// Validate a single field. Some rules read other fields, so the whole
/// [`FieldSet`] is passed.
pub fn validate_field(field: Field, fields: &FieldSet) -> Option<ValidationError> {
    let result = match field {
        Field::Username => rules::username(&fields.username),
        Field::Email => rules::email(&fields.email),
        Field::Password => rules::password(&fields.password),
        Field::ConfirmPassword => rules::confirm_password(&fields.confirm_password, &fields.password),
    };
    result.err()
}

/// Run every field rule over `fields` in one pass.
pub fn validate(fields: &FieldSet) -> ErrorSet {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, fields))
        .fold(ErrorSet::new(), |mut errors, error| {
            errors.insert(error);
            errors
        })
}
