//! String validation functions

/// Which bound of a length range a value fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthViolation {
    TooShort { min: usize },
    TooLong { max: usize },
}

/// Number of characters in `s`, counted as Unicode scalar values.
pub fn char_length(s: &str) -> usize {
    s.chars().count()
}

/// Validates that `s` has between `min` and `max` characters, inclusive.
pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), LengthViolation> {
    let len = char_length(s);
    if len < min {
        Err(LengthViolation::TooShort { min })
    } else if len > max {
        Err(LengthViolation::TooLong { max })
    } else {
        Ok(())
    }
}

/// A required value is present when it is not the empty string.
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

/// Exact, case-sensitive equality
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(validate_length("bob", 3, 20).is_ok());
        assert!(validate_length("abcdefghijklmnopqrst", 3, 20).is_ok());
        assert_eq!(
            validate_length("hi", 3, 20),
            Err(LengthViolation::TooShort { min: 3 })
        );
        assert_eq!(
            validate_length("abcdefghijklmnopqrstu", 3, 20),
            Err(LengthViolation::TooLong { max: 20 })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert_eq!(char_length("äöü"), 3);
        assert!(validate_length("äöü", 3, 3).is_ok());
    }

    #[test]
    fn test_presence_and_equality() {
        assert!(is_present(" "));
        assert!(!is_present(""));

        assert!(equals("Abcde1", "Abcde1"));
        assert!(!equals("Abcde1", "abcde1"));
        assert!(equals("", ""));
    }
}
