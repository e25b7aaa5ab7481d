//! Length section - flags passwords below the minimum length.

use super::{Finding, SectionOutcome};
use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;
const PENALTY: u8 = 15;

const WARNING: &str = "Too short (fewer than 8 characters)";
const SUGGESTION: &str = "Aim for at least 12-16 characters; a multi-word passphrase works well";

/// Flags passwords shorter than the minimum length.
///
/// Length is counted in code points, not bytes.
pub fn length_section(password: &SecretString) -> SectionOutcome {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Finding {
            warning: WARNING,
            suggestion: SUGGESTION,
            penalty: PENALTY,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        let result = length_section(&secret("Short1!"));
        assert!(result.is_some());
        assert_eq!(result.unwrap().penalty, 15);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(&secret("12345678")), None);
    }

    #[test]
    fn test_length_section_counts_code_points() {
        // 8 code points, more than 8 bytes
        assert_eq!(length_section(&secret("pässwörd")), None);
    }

    #[test]
    fn test_length_section_valid() {
        assert_eq!(length_section(&secret("LongEnough123!")), None);
    }
}
