//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld with an alphabetic TLD of two or more letters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Validates the shape of an email address.
///
/// This is a shape check only: it does not resolve the domain and it does
/// not try to cover every address RFC 5322 allows. An empty string is never
/// a valid email; callers that treat emptiness separately should check it
/// first.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com")]
    #[case("user@example.com")]
    #[case("test.user@example.co.uk")]
    #[case("user+tag@example.com")]
    #[case("user_name@example-domain.com")]
    #[case("100%@percent.org")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email), "{email} should be valid");
    }

    #[rstest]
    #[case("")]
    #[case("@")]
    #[case("user@")]
    #[case("@example.com")]
    #[case("user@@example.com")]
    #[case("user@example")]
    #[case("user@example.c")]
    #[case("user@example.c0m")]
    #[case("user name@example.com")]
    #[case(" user@example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email), "{email:?} should be invalid");
    }
}
