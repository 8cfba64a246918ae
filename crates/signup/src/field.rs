// File: src/field.rs
// Purpose: The four fields of the registration form and their display metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of the registration form.
///
/// Ordering follows the on-screen order, so maps keyed by `Field` iterate
/// top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Name used in HTML `name`/`id` attributes, URLs and JSON keys.
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Password again",
        }
    }

    /// Password inputs are masked while editing. The submitted echo is not.
    pub fn is_masked(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// HTML input type for the field
    pub fn input_type(self) -> &'static str {
        if self.is_masked() {
            "password"
        } else {
            "text"
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a field name does not belong to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_names() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "confirm_password".parse::<Field>(),
            Err(UnknownField("confirm_password".to_string()))
        );
    }

    #[test]
    fn test_masked_fields() {
        assert_eq!(Field::Username.input_type(), "text");
        assert_eq!(Field::Email.input_type(), "text");
        assert_eq!(Field::Password.input_type(), "password");
        assert_eq!(Field::ConfirmPassword.input_type(), "password");
    }

    #[test]
    fn test_serde_names_match_field_names() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.name()));
        }
    }
}
