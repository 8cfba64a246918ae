//! Password validation functions

/// Minimum number of characters in a password
pub const PASSWORD_MIN_LENGTH: usize = 5;

/// Validates the composite rule: 5+ characters with an uppercase letter, a
/// lowercase letter and a digit.
///
/// The rule is all-or-nothing; callers learn only whether it holds, not
/// which part failed. Letters and digits are matched in the ASCII ranges
/// only, and line terminators are never accepted anywhere in the password.
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().any(is_line_terminator) {
        return false;
    }
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return false;
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    has_uppercase && has_lowercase && has_digit
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Abcde1")]
    #[case("aB3cd")]
    #[case("Password123")]
    #[case("Zz9 with spaces")]
    #[case("ÄbcD1e")]
    fn test_composite_accepts(#[case] password: &str) {
        assert!(is_valid_password(password));
    }

    #[rstest]
    #[case("")]
    #[case("Ab1c")]
    #[case("abcde1")]
    #[case("ABCDE1")]
    #[case("Abcdef")]
    #[case("Abc\nde1")]
    #[case("Abcde1\r")]
    fn test_composite_rejects(#[case] password: &str) {
        assert!(!is_valid_password(password));
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        // Uppercase and lowercase must come from A-Z and a-z
        assert!(!is_valid_password("ÄÖÜabc1"));
        assert!(!is_valid_password("ABCäöü1"));
    }
}
