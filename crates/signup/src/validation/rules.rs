// File: src/validation/rules.rs
// Purpose: Per-field rules of the registration form

use super::{Format, ValidationError};
use crate::field::Field;
use signup_validation::{equals, is_present, is_valid_email, is_valid_password, validate_length};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;

/// Required, 3 to 20 characters.
pub fn username(value: &str) -> Result<(), ValidationError> {
    if !is_present(value) {
        return Err(ValidationError::Required(Field::Username));
    }
    validate_length(value, USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH).map_err(|violation| {
        ValidationError::LengthBound {
            field: Field::Username,
            violation,
        }
    })
}

/// Required, email-shaped.
pub fn email(value: &str) -> Result<(), ValidationError> {
    if !is_present(value) {
        return Err(ValidationError::Required(Field::Email));
    }
    if !is_valid_email(value) {
        return Err(ValidationError::FormatInvalid(Format::Email));
    }
    Ok(())
}

/// Optional. A non-empty password must satisfy the composite rule.
pub fn password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_valid_password(value) {
        Ok(())
    } else {
        Err(ValidationError::FormatInvalid(Format::Password))
    }
}

/// Must equal the password exactly. Required whenever a password was entered;
/// with an empty password the empty confirmation is the matching value.
pub fn confirm_password(value: &str, password: &str) -> Result<(), ValidationError> {
    if !is_present(value) && is_present(password) {
        return Err(ValidationError::Required(Field::ConfirmPassword));
    }
    if !equals(value, password) {
        return Err(ValidationError::MatchMismatch);
    }
    Ok(())
}
