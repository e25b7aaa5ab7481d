//! Digits section - flags passwords made of digits only.

use super::{Finding, SectionOutcome};
use secrecy::{ExposeSecret, SecretString};

const PENALTY: u8 = 15;

const WARNING: &str = "Digits only, extremely easy to guess";
const SUGGESTION: &str = "Add letters or symbols, or switch to a long passphrase";

/// Flags non-empty passwords consisting solely of decimal digits.
pub fn all_digit_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();
    if !pwd.is_empty() && pwd.chars().all(|c| c.is_numeric()) {
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
    fn test_digits_section_all_digits() {
        let result = all_digit_section(&secret("19850412"));
        assert!(result.is_some());
        assert_eq!(result.unwrap().penalty, 15);
    }

    #[test]
    fn test_digits_section_mixed_passes() {
        assert_eq!(all_digit_section(&secret("1985apr12")), None);
    }

    #[test]
    fn test_digits_section_empty_passes() {
        assert_eq!(all_digit_section(&secret("")), None);
    }
}
